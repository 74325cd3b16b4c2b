//! Configuration for the database access layer.

use crate::db::dialect::Dialect;
use serde::{Deserialize, Serialize};

/// Settings consumed by the access layer: which dialect the configured driver
/// speaks, the table-name prefix/suffix convention, and whether executed
/// query text is retained for profiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Dialect identifier for the backend, e.g. "mysql" or "pgsql".
    pub dialect: Dialect,
    /// Table-name prefix spliced in for the `{` delimiter (an underscore is
    /// appended automatically).
    pub table_prefix: String,
    /// Table-name suffix spliced in for the `}` delimiter.
    pub table_suffix: String,
    /// When true, executed query text is reconstructed and kept in the query
    /// log; when false only elapsed times are retained.
    pub log_queries: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySql,
            table_prefix: String::new(),
            table_suffix: String::new(),
            log_queries: false,
        }
    }
}

impl DbConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    pub fn with_table_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.table_suffix = suffix.into();
        self
    }

    pub fn with_query_logging(mut self, enabled: bool) -> Self {
        self.log_queries = enabled;
        self
    }
}
