//! Bound parameter values for parameterized queries.

use crate::db::dialect::Dialect;
use serde::{Deserialize, Serialize};

/// A typed value bound to a positional placeholder.
///
/// The set of bindable types is closed, so parameter handling is exhaustively
/// checked at compile time; there is no "unsupported parameter type" failure
/// path at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundParam {
    /// NULL value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (stored as i64 for maximum range)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Text(String),
}

impl BoundParam {
    /// Check if this parameter is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the type name of this parameter for debugging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    /// Render this parameter as a dialect-appropriate SQL literal for log
    /// reconstruction. Display only: strings are quoted without escaping,
    /// because actual binding happens natively inside the driver and this
    /// text is never executed.
    pub(crate) fn display_literal(&self, dialect: Dialect) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Text(s) => format!("'{s}'"),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            // Postgres expects a quoted boolean literal; everything else
            // takes the integer truth value.
            Self::Bool(v) => {
                if dialect == Dialect::Postgres {
                    format!("'{v}'")
                } else {
                    i64::from(*v).to_string()
                }
            }
        }
    }
}

impl From<bool> for BoundParam {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for BoundParam {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for BoundParam {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for BoundParam {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for BoundParam {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for BoundParam {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
