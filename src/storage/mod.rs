mod preferences;
mod schema;
mod subscribers;
mod types;

pub use schema::Database;
pub use types::{DatabaseError, Subscriber};
