//! Connection context.
//!
//! [`DbContext`] owns the connection state and the query log for one
//! execution context. There is no process-wide singleton: callers create a
//! context at connection-open time and drop (or `close`) it when done. The
//! underlying driver connection is not assumed thread-safe, so the context is
//! neither `Send` nor shared.

use crate::config::DbConfig;
use crate::db::dialect::{self, Dialect};
use crate::db::driver::{ConnectOptions, Driver, ResultSet};
use crate::db::executor::{self, Page};
use crate::db::params::BoundParam;
use crate::db::profile::QueryLog;
use crate::db::schema::SchemaInspector;
use crate::error::{DbError, DbResult};
use tracing::{info, warn};

pub struct DbContext {
    config: DbConfig,
    driver: Option<Box<dyn Driver>>,
    connected: bool,
    log: QueryLog,
}

impl DbContext {
    /// Create a context with no driver attached. Every query operation fails
    /// with [`DbError::NotConnected`] until [`connect`](Self::connect)
    /// succeeds.
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            driver: None,
            connected: false,
            log: QueryLog::new(),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Attach a driver and open its connection. The DSN in `opts` takes
    /// precedence over the discrete host/user/password/database fields when
    /// both are given.
    ///
    /// On driver failure the error text is surfaced in
    /// [`DbError::ConnectFailed`] and the context stays disconnected. The
    /// driver handle is retained either way, so dialect predicates keep
    /// working after a failed attempt.
    pub fn connect(&mut self, mut driver: Box<dyn Driver>, opts: &ConnectOptions) -> DbResult<()> {
        if driver.dialect() != self.config.dialect {
            warn!(
                configured = %self.config.dialect,
                driver = %driver.dialect(),
                "driver dialect differs from configured dialect"
            );
        }

        let result = driver.connect(opts);
        self.driver = Some(driver);

        match result {
            Ok(()) => {
                self.connected = true;
                info!(dialect = %self.config.dialect, "database connected");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "database connect failed");
                Err(DbError::connect_failed(e.message))
            }
        }
    }

    /// Whether a connection has been opened and not yet closed.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Release the driver's connection. Safe to call when already closed or
    /// when no driver was ever attached; both are no-ops.
    pub fn close(&mut self) {
        if let Some(driver) = self.driver.as_deref_mut() {
            driver.close();
        }
        self.connected = false;
    }

    fn dialect(&self) -> DbResult<Dialect> {
        self.driver
            .as_deref()
            .map(|d| d.dialect())
            .ok_or(DbError::NotConnected)
    }

    pub fn is_mysql(&self) -> DbResult<bool> {
        Ok(self.dialect()? == Dialect::MySql)
    }

    pub fn is_pgsql(&self) -> DbResult<bool> {
        Ok(self.dialect()? == Dialect::Postgres)
    }

    /// True for any of the MSSQL access-method variants.
    pub fn is_mssql(&self) -> DbResult<bool> {
        Ok(self.dialect()?.is_mssql_family())
    }

    pub fn is_db2(&self) -> DbResult<bool> {
        Ok(self.dialect()? == Dialect::Db2)
    }

    /// Execute a parameterized query template.
    ///
    /// Table-name delimiters are rewritten, the driver binds `params`
    /// natively, and a record is appended to the query log (with reconstructed
    /// text when query logging is enabled).
    pub fn query(
        &mut self,
        template: &str,
        params: &[BoundParam],
    ) -> DbResult<Box<dyn ResultSet>> {
        if !self.connected {
            return Err(DbError::NotConnected);
        }
        let driver = self.driver.as_deref_mut().ok_or(DbError::NotConnected)?;
        executor::run_query(driver, &self.config, &mut self.log, template, params, None)
    }

    /// Execute a parameterized query template with the dialect's paging
    /// semantics applied.
    pub fn query_limited(
        &mut self,
        template: &str,
        params: &[BoundParam],
        limit: i64,
        offset: i64,
    ) -> DbResult<Box<dyn ResultSet>> {
        if !self.connected {
            return Err(DbError::NotConnected);
        }
        let driver = self.driver.as_deref_mut().ok_or(DbError::NotConnected)?;
        executor::run_query(
            driver,
            &self.config,
            &mut self.log,
            template,
            params,
            Some(Page { limit, offset }),
        )
    }

    /// Last insert id for a table. `field` defaults to `"id"` at call sites
    /// that follow the common convention.
    pub fn insert_id(&mut self, table: Option<&str>, field: &str) -> DbResult<i64> {
        let driver = self.connected_driver()?;
        driver
            .insert_id(table, field)
            .map_err(|e| DbError::query_failed(e.message, ""))
    }

    /// Generate a LIKE phrase for the connected dialect.
    /// See [`dialect::like_clause`].
    pub fn like_clause(&self, field: &str, case_sensitive: bool) -> DbResult<String> {
        Ok(dialect::like_clause(field, case_sensitive, self.dialect()?))
    }

    // Metadata introspection. Blank inputs are non-fatal and report absence;
    // a missing connection is a precondition violation.

    pub fn table_exists(&mut self, name: &str) -> DbResult<bool> {
        let driver = self.connected_driver()?;
        Ok(SchemaInspector::table_exists(driver, name))
    }

    pub fn index_exists(&mut self, table: &str, index: &str) -> DbResult<bool> {
        let driver = self.connected_driver()?;
        Ok(SchemaInspector::index_exists(driver, table, index))
    }

    pub fn field_exists(&mut self, field: &str, table: &str) -> DbResult<bool> {
        let driver = self.connected_driver()?;
        Ok(SchemaInspector::field_exists(driver, field, table))
    }

    pub fn field_names(&mut self, table: &str) -> DbResult<Vec<String>> {
        let driver = self.connected_driver()?;
        Ok(SchemaInspector::field_names(driver, table))
    }

    /// Full table listing, straight from the driver.
    pub fn table_list(&mut self) -> DbResult<Vec<String>> {
        let driver = self.connected_driver()?;
        driver
            .tables()
            .map_err(|e| DbError::query_failed(e.message, ""))
    }

    // Profiling accessors over the context's query log.

    pub fn query_count(&self) -> usize {
        self.log.query_count()
    }

    pub fn unique_query_count(&self) -> usize {
        self.log.unique_query_count()
    }

    pub fn total_query_time(&self) -> f64 {
        self.log.total_query_time()
    }

    pub fn query_log(&self) -> &QueryLog {
        &self.log
    }

    pub fn clear_query_log(&mut self) {
        self.log.clear();
    }

    fn connected_driver(&mut self) -> DbResult<&mut dyn Driver> {
        if !self.connected {
            return Err(DbError::NotConnected);
        }
        match self.driver.as_deref_mut() {
            Some(driver) => Ok(driver),
            None => Err(DbError::NotConnected),
        }
    }
}
