//! Error types for the database access layer.
//!
//! All fallible operations return [`DbResult`]. Driver-level failures are
//! captured verbatim (error text, and for queries the attempted SQL) and
//! surfaced as typed errors; this layer never retries or recovers on its own.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The driver could not establish a connection.
    #[error("Database connect failed: {message}")]
    ConnectFailed { message: String },

    /// The driver reported a failure while executing a statement.
    /// `sql` is the statement that was attempted, after table-name rewriting.
    #[error("Database query failed: {message}")]
    QueryFailed { message: String, sql: String },

    /// An operation that requires a live connection was invoked before
    /// `connect` succeeded (or after the context was never given a driver).
    #[error("No database connection established")]
    NotConnected,
}

impl DbError {
    /// Create a connect failure from the driver's error text.
    pub fn connect_failed(message: impl Into<String>) -> Self {
        Self::ConnectFailed {
            message: message.into(),
        }
    }

    /// Create a query failure from the driver's error text and the attempted SQL.
    pub fn query_failed(message: impl Into<String>, sql: impl Into<String>) -> Self {
        Self::QueryFailed {
            message: message.into(),
            sql: sql.into(),
        }
    }

    /// The SQL that was being executed when the failure occurred, if any.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::QueryFailed { sql, .. } if !sql.is_empty() => Some(sql),
            _ => None,
        }
    }
}

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;
