use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Database-specific errors with user-friendly messages
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Another instance of the application has locked the database
    #[error("Another instance of dial appears to be running. Please close it and try again.")]
    InstanceLocked,

    /// Migration failed
    #[error("Database migration failed: {0}")]
    Migration(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Other(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Check if a sqlx error indicates database locking
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        let error_string = err.to_string().to_lowercase();

        // SQLITE_BUSY (5), SQLITE_LOCKED (6), SQLITE_CANTOPEN (14)
        if error_string.contains("database is locked")
            || error_string.contains("database table is locked")
            || error_string.contains("sqlite_busy")
            || error_string.contains("sqlite_locked")
            || error_string.contains("unable to open database file")
        {
            return DatabaseError::InstanceLocked;
        }

        DatabaseError::Other(err)
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A newsletter subscriber row.
///
/// `interests` is stored as a JSON array in the DB; a row whose JSON fails to
/// parse surfaces with an empty interest list rather than failing the whole
/// listing.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub interests: Vec<String>,
    /// Timestamp string set by the DB at insert time.
    pub subscribed_at: String,
}

/// Raw subscriber row before the interests column is decoded.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SubscriberRow {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub interests: String,
    pub subscribed_at: String,
}

impl SubscriberRow {
    pub(crate) fn into_subscriber(self) -> Subscriber {
        let interests = serde_json::from_str(&self.interests).unwrap_or_else(|e| {
            tracing::warn!(email = %self.email, error = %e, "Corrupt interests JSON, treating as empty");
            Vec::new()
        });
        Subscriber {
            id: self.id,
            email: self.email,
            name: self.name,
            interests,
            subscribed_at: self.subscribed_at,
        }
    }
}
