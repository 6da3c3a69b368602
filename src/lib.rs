//! dial — a terminal podcast-catalog browser.
//!
//! The catalog (categories, podcasts, episodes) is immutable, in-memory data
//! constructed once at startup. Everything the UI shows is a derived view:
//! filtering, searching and sorting never touch the source collections.
//! User state (theme preference, newsletter subscriptions) lives in SQLite.

pub mod app;
pub mod catalog;
pub mod config;
pub mod preferences;
pub mod storage;
pub mod subscribe;
pub mod theme;
pub mod ui;
pub mod util;
