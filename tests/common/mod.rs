//! Shared scripted driver for integration tests.

#![allow(dead_code)]

use dbal::{
    BoundParam, ConnectOptions, Dialect, Driver, DriverError, IndexInfo, ResultSet, Row,
};
use serde_json::Value as JsonValue;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// Install a test subscriber so executor/context tracing output is visible
/// under `RUST_LOG`. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One recorded call into the driver's execution surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedQuery {
    pub sql: String,
    pub params: Vec<BoundParam>,
    /// `(limit, offset)` when the paginated entry point was used.
    pub page: Option<(i64, i64)>,
}

/// Observable driver state, shared with the test body after the driver has
/// been moved into the context.
#[derive(Debug, Default)]
pub struct DriverState {
    pub executed: Vec<ExecutedQuery>,
    pub connects: usize,
    pub closed: bool,
}

/// Scripted in-memory driver.
pub struct MockDriver {
    dialect: Dialect,
    prefix: String,
    suffix: String,
    tables: Vec<String>,
    indexes: BTreeMap<String, BTreeMap<String, IndexInfo>>,
    columns: BTreeMap<String, Vec<String>>,
    rows: Vec<Row>,
    insert_id: i64,
    fail_connect: Option<String>,
    fail_execute: Option<String>,
    fail_metadata: Option<String>,
    pub state: Rc<RefCell<DriverState>>,
}

impl MockDriver {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            prefix: String::new(),
            suffix: String::new(),
            tables: Vec::new(),
            indexes: BTreeMap::new(),
            columns: BTreeMap::new(),
            rows: Vec::new(),
            insert_id: 1,
            fail_connect: None,
            fail_execute: None,
            fail_metadata: None,
            state: Rc::new(RefCell::new(DriverState::default())),
        }
    }

    pub fn with_table_names(mut self, prefix: &str, suffix: &str) -> Self {
        self.prefix = prefix.to_string();
        self.suffix = suffix.to_string();
        self
    }

    pub fn with_tables(mut self, tables: &[&str]) -> Self {
        self.tables = tables.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_index(mut self, table: &str, index: &str, columns: &[&str], unique: bool) -> Self {
        self.indexes.entry(table.to_string()).or_default().insert(
            index.to_string(),
            IndexInfo {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                unique,
            },
        );
        self
    }

    pub fn with_columns(mut self, table: &str, columns: &[&str]) -> Self {
        self.columns.insert(
            table.to_string(),
            columns.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_insert_id(mut self, id: i64) -> Self {
        self.insert_id = id;
        self
    }

    pub fn failing_connect(mut self, message: &str) -> Self {
        self.fail_connect = Some(message.to_string());
        self
    }

    pub fn failing_execute(mut self, message: &str) -> Self {
        self.fail_execute = Some(message.to_string());
        self
    }

    pub fn failing_metadata(mut self, message: &str) -> Self {
        self.fail_metadata = Some(message.to_string());
        self
    }

    /// Handle onto the shared call record; keep a clone before moving the
    /// driver into a context.
    pub fn state_handle(&self) -> Rc<RefCell<DriverState>> {
        Rc::clone(&self.state)
    }

    fn record(&self, sql: &str, params: &[BoundParam], page: Option<(i64, i64)>) {
        self.state.borrow_mut().executed.push(ExecutedQuery {
            sql: sql.to_string(),
            params: params.to_vec(),
            page,
        });
    }

    fn result_set(&self) -> Box<dyn ResultSet> {
        Box::new(MockResultSet {
            affected: self.rows.len() as u64,
            rows: self.rows.iter().cloned().collect(),
        })
    }
}

impl Driver for MockDriver {
    fn connect(&mut self, _opts: &ConnectOptions) -> Result<(), DriverError> {
        self.state.borrow_mut().connects += 1;
        match &self.fail_connect {
            Some(message) => Err(DriverError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn execute(
        &mut self,
        sql: &str,
        params: &[BoundParam],
    ) -> Result<Box<dyn ResultSet>, DriverError> {
        self.record(sql, params, None);
        match &self.fail_execute {
            Some(message) => Err(DriverError::new(message.clone())),
            None => Ok(self.result_set()),
        }
    }

    fn select_limit(
        &mut self,
        sql: &str,
        limit: i64,
        offset: i64,
        params: &[BoundParam],
    ) -> Result<Box<dyn ResultSet>, DriverError> {
        self.record(sql, params, Some((limit, offset)));
        match &self.fail_execute {
            Some(message) => Err(DriverError::new(message.clone())),
            None => Ok(self.result_set()),
        }
    }

    fn close(&mut self) {
        self.state.borrow_mut().closed = true;
    }

    fn insert_id(&mut self, _table: Option<&str>, _field: &str) -> Result<i64, DriverError> {
        Ok(self.insert_id)
    }

    fn tables(&mut self) -> Result<Vec<String>, DriverError> {
        match &self.fail_metadata {
            Some(message) => Err(DriverError::new(message.clone())),
            None => Ok(self.tables.clone()),
        }
    }

    fn indexes(&mut self, table: &str) -> Result<BTreeMap<String, IndexInfo>, DriverError> {
        match &self.fail_metadata {
            Some(message) => Err(DriverError::new(message.clone())),
            None => Ok(self.indexes.get(table).cloned().unwrap_or_default()),
        }
    }

    fn columns(&mut self, table: &str) -> Result<Vec<String>, DriverError> {
        match &self.fail_metadata {
            Some(message) => Err(DriverError::new(message.clone())),
            None => Ok(self.columns.get(table).cloned().unwrap_or_default()),
        }
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn table_name_prefix(&self) -> String {
        self.prefix.clone()
    }

    fn table_name_suffix(&self) -> String {
        self.suffix.clone()
    }
}

struct MockResultSet {
    rows: VecDeque<Row>,
    affected: u64,
}

impl ResultSet for MockResultSet {
    fn row_count(&self) -> u64 {
        self.affected
    }

    fn fetch(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    fn fetch_column(&mut self, index: usize) -> Option<JsonValue> {
        self.fetch()
            .and_then(|row| row.values().nth(index).cloned())
    }
}

/// Build a row from column/value pairs.
pub fn row(pairs: &[(&str, JsonValue)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
