//! Database abstraction layer.
//!
//! This module provides the uniform access surface:
//! - Connection context and dialect predicates
//! - Query execution with parameter binding and log reconstruction
//! - Table-name template rewriting
//! - Schema introspection
//! - Query profiling

pub mod context;
pub mod dialect;
pub mod driver;
pub mod executor;
pub mod helpers;
pub mod params;
pub mod profile;
pub mod rewrite;
pub mod schema;

pub use context::DbContext;
pub use dialect::{DateOperand, Dialect};
pub use driver::{ConnectOptions, Driver, DriverError, IndexInfo, ResultSet, Row};
pub use executor::Page;
pub use params::BoundParam;
pub use profile::{QueryLog, QueryRecord};
pub use rewrite::rewrite_table_names;
pub use schema::SchemaInspector;
