//! SQL dialect identification and dialect-specific SQL fragments.
//!
//! The dialect is resolved once at connect time from a configured identifier
//! and carried as a tagged enum; call sites never compare identifier strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL dialect of a supported backend.
///
/// The three MSSQL variants correspond to distinct access methods against the
/// same server family and answer `is_mssql_family` alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "mysql", alias = "mysqli")]
    MySql,
    #[serde(rename = "pgsql", alias = "postgres")]
    Postgres,
    #[serde(rename = "mssql")]
    Mssql,
    #[serde(rename = "mssqlnative")]
    MssqlNative,
    #[serde(rename = "odbc_mssql")]
    OdbcMssql,
    #[serde(rename = "db2")]
    Db2,
}

impl Dialect {
    /// The positional-placeholder token. Uniform across all dialects; drivers
    /// translate to their native parameter style during binding.
    pub const fn placeholder() -> &'static str {
        "?"
    }

    /// True for any of the MSSQL access-method variants.
    pub const fn is_mssql_family(self) -> bool {
        matches!(self, Self::Mssql | Self::MssqlNative | Self::OdbcMssql)
    }

    /// Whether an identifier names a dialect this layer knows at all.
    /// Unknown identifiers report unsupported.
    pub fn is_supported(identifier: &str) -> bool {
        identifier.parse::<Self>().is_ok()
    }

    /// Canonical identifier for this dialect.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "pgsql",
            Self::Mssql => "mssql",
            Self::MssqlNative => "mssqlnative",
            Self::OdbcMssql => "odbc_mssql",
            Self::Db2 => "db2",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" | "mysqli" => Ok(Self::MySql),
            "pgsql" | "postgres" => Ok(Self::Postgres),
            "mssql" => Ok(Self::Mssql),
            "mssqlnative" => Ok(Self::MssqlNative),
            "odbc_mssql" => Ok(Self::OdbcMssql),
            "db2" => Ok(Self::Db2),
            _ => Err(format!("Unsupported database dialect: {s}")),
        }
    }
}

/// Operand of a date-difference comparison: either a literal column
/// expression or a slot filled by a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOperand {
    Column(String),
    Param,
}

impl DateOperand {
    /// Convenience constructor for a column expression operand.
    pub fn column(expr: impl Into<String>) -> Self {
        Self::Column(expr.into())
    }

    fn fragment(&self) -> &str {
        match self {
            Self::Column(expr) => expr,
            Self::Param => Dialect::placeholder(),
        }
    }
}

/// Generate a case-sensitive or case-insensitive LIKE phrase for the given
/// dialect. The field expression is assumed to already be safe to splice into
/// a query.
///
/// Returns `(<field> LIKE ?)`, or `(<field> ILIKE ?)` for case-insensitive
/// matching under Postgres.
pub fn like_clause(field: &str, case_sensitive: bool, dialect: Dialect) -> String {
    let keyword = if !case_sensitive && dialect == Dialect::Postgres {
        "ILIKE"
    } else {
        "LIKE"
    };
    format!("({field} {keyword} {})", Dialect::placeholder())
}

/// Generate a query fragment comparing the difference of two date columns
/// against a caller-supplied comparison suffix, e.g. `" < 30"`.
///
/// Returns `((<lhs> - <rhs>)<suffix>)` with `Param` operands rendered as the
/// placeholder token.
pub fn compare_days(lhs: &DateOperand, rhs: &DateOperand, suffix: &str) -> String {
    format!("(({} - {}){suffix})", lhs.fragment(), rhs.fragment())
}

/// Render binary data as a SQL literal for the given dialect: `0x<hex>` for
/// the MSSQL family, hex-format bytea for Postgres, a quoted string elsewhere.
pub fn binary_literal(bytes: &[u8], dialect: Dialect) -> String {
    if dialect.is_mssql_family() {
        return format!("0x{}", hex(bytes));
    }
    match dialect {
        Dialect::Postgres => format!("'\\x{}'", hex(bytes)),
        _ => format!("'{}'", String::from_utf8_lossy(bytes)),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
