//! Metadata introspection over a driver handle.
//!
//! Existence checks compare names case-insensitively, since backends differ
//! in how they report identifier case. Blank lookup inputs are non-fatal and
//! simply report absence.

use crate::db::driver::Driver;
use tracing::debug;

/// Table/index/column existence and listing, built atop the driver's
/// introspection capabilities.
pub struct SchemaInspector;

impl SchemaInspector {
    /// Check whether a table exists. The driver-configured prefix/suffix are
    /// composed around the bare name, then the full name is compared
    /// case-insensitively against the driver's table list.
    pub fn table_exists(driver: &mut dyn Driver, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }

        let full_name = format!(
            "{}{}{}",
            driver.table_name_prefix(),
            name,
            driver.table_name_suffix()
        )
        .to_lowercase();

        let tables = driver.tables().unwrap_or_default();
        tables.iter().any(|t| t.to_lowercase() == full_name)
    }

    /// Check whether an index exists on a table, comparing index names
    /// case-insensitively.
    pub fn index_exists(driver: &mut dyn Driver, table: &str, index: &str) -> bool {
        if table.trim().is_empty() || index.trim().is_empty() {
            return false;
        }

        let index = index.to_lowercase();
        let indexes = driver.indexes(table).unwrap_or_default();
        indexes.keys().any(|name| name.to_lowercase() == index)
    }

    /// Check whether a column exists on a table. Exact membership test.
    pub fn field_exists(driver: &mut dyn Driver, field: &str, table: &str) -> bool {
        Self::field_names(driver, table).iter().any(|c| c == field)
    }

    /// Column list for a table, or empty when the driver reports a failure.
    pub fn field_names(driver: &mut dyn Driver, table: &str) -> Vec<String> {
        match driver.columns(table) {
            Ok(columns) => columns,
            Err(e) => {
                debug!(table = %table, error = %e, "column listing failed");
                Vec::new()
            }
        }
    }
}
