//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `steelflow.db` in the output directory.  Each table is
//! stored under its persistence name with an autoincrement `id` followed by
//! the persisted columns only; stage-file columns are left out.  A table is
//! replaced on every write, in one transaction.

use std::path::Path;

use rusqlite::Connection;
use rusqlite::types::Value as SqlValue;

use crate::writer::TableWriter;
use crate::{TableResult, TableSchema, Value};

/// Database file name inside the output directory.
pub const DB_FILE: &str = "steelflow.db";

/// Writes stage tables to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `steelflow.db` in `dir`.
    pub fn new(dir: &Path) -> TableResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join(DB_FILE))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        Ok(Self { conn, finished: false })
    }
}

fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Text(s)    => SqlValue::Text(s.clone()),
        Value::Real(x)    => SqlValue::Real(*x),
        Value::Int(n)     => SqlValue::Integer(*n),
        Value::Date(_) | Value::DateTime(_) => SqlValue::Text(value.to_cell()),
    }
}

fn create_statement(schema: &TableSchema) -> String {
    let columns: Vec<String> = schema
        .persisted()
        .map(|(_, c)| format!("{} {}", c.name, c.ty.sql_type()))
        .collect();
    format!(
        "CREATE TABLE {} (id INTEGER PRIMARY KEY AUTOINCREMENT, {})",
        schema.table,
        columns.join(", ")
    )
}

fn insert_statement(schema: &TableSchema) -> String {
    let names: Vec<&str> = schema.persisted().map(|(_, c)| c.name).collect();
    let params: Vec<String> = (1..=names.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.table,
        names.join(", "),
        params.join(", ")
    )
}

impl TableWriter for SqliteWriter {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn write_table(&mut self, schema: &TableSchema, rows: &[Vec<Value>]) -> TableResult<()> {
        let positions: Vec<usize> = schema.persisted().map(|(i, _)| i).collect();

        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {};", schema.table))?;
        tx.execute_batch(&create_statement(schema))?;
        {
            let mut stmt = tx.prepare_cached(&insert_statement(schema))?;
            for row in rows {
                stmt.execute(rusqlite::params_from_iter(
                    positions.iter().map(|&i| to_sql(&row[i])),
                ))?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> TableResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
