//! Query execution pipeline.
//!
//! The pipeline for every statement: rewrite table-name templates, dispatch
//! to the driver (plain or paginated), measure elapsed time, reconstruct a
//! human-readable query string for the profiling log when enabled, and
//! normalize driver failures into typed errors.
//!
//! Reconstruction-for-logging is decoupled from actual binding: the driver
//! binds parameters natively and the reconstructed text is never executed.

use crate::config::DbConfig;
use crate::db::dialect::Dialect;
use crate::db::driver::{Driver, ResultSet};
use crate::db::params::BoundParam;
use crate::db::profile::QueryLog;
use crate::db::rewrite::rewrite_table_names;
use crate::error::{DbError, DbResult};
use std::time::Instant;
use tracing::debug;

/// Paging window for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

pub(crate) fn run_query(
    driver: &mut dyn Driver,
    config: &DbConfig,
    log: &mut QueryLog,
    template: &str,
    params: &[BoundParam],
    page: Option<Page>,
) -> DbResult<Box<dyn ResultSet>> {
    let sql = rewrite_table_names(template, &config.table_prefix, &config.table_suffix);

    let start = Instant::now();
    let result = match page {
        Some(page) => driver.select_limit(&sql, page.limit, page.offset, params),
        None => driver.execute(&sql, params),
    };
    let elapsed = start.elapsed();

    // The elapsed time is recorded whether or not query logging is enabled;
    // only the text field differs.
    let text = if config.log_queries {
        let display_text = if params.is_empty() {
            sql.clone()
        } else {
            render_for_log(&sql, params, driver.dialect())
        };
        debug!(
            query = %display_text,
            elapsed_ms = elapsed.as_millis() as u64,
            "executed query"
        );
        display_text
    } else {
        String::new()
    };
    log.push(text, elapsed);

    result.map_err(|e| DbError::query_failed(e.message, sql))
}

/// Substitute bound parameters back into `?` placeholders to produce a
/// human-readable query string.
///
/// The scan walks the statement per codepoint, so multi-byte characters ahead
/// of a placeholder (user-defined field names, for instance) cannot shift the
/// match position. Placeholders beyond the supplied parameter count are left
/// verbatim.
fn render_for_log(sql: &str, params: &[BoundParam], dialect: Dialect) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut remaining = params.iter();
    for ch in sql.chars() {
        if ch == '?' {
            match remaining.next() {
                Some(param) => out.push_str(&param.display_literal(dialect)),
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
