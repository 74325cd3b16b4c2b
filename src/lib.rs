//! Uniform query layer over multiple relational database backends.
//!
//! Applications issue SQL through a [`DbContext`] instead of native driver
//! APIs. The context owns a single [`Driver`] handle (MySQL, PostgreSQL, the
//! MSSQL access-method variants, or DB2), rewrites table-name templates,
//! executes parameterized queries with dialect-aware handling, and keeps a
//! per-context profiling log of executed statements.

pub mod config;
pub mod db;
pub mod error;

pub use config::DbConfig;
pub use db::context::DbContext;
pub use db::dialect::{DateOperand, Dialect};
pub use db::driver::{ConnectOptions, Driver, DriverError, IndexInfo, ResultSet, Row};
pub use db::params::BoundParam;
pub use db::profile::{QueryLog, QueryRecord};
pub use error::{DbError, DbResult};
