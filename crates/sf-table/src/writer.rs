//! The `TableWriter` trait implemented by all backend writers.

use crate::{TableResult, TableRow, TableSchema, Value};

/// Trait implemented by the CSV, SQLite, and Parquet writers.
///
/// Object safe so the pipeline can hold a `Vec<Box<dyn TableWriter>>` of the
/// backends enabled at run time.
pub trait TableWriter {
    /// Short backend name for log lines.
    fn backend(&self) -> &'static str;

    /// Write a whole table, replacing any previous contents.
    ///
    /// Every row must hold one value per column of `schema`.
    fn write_table(&mut self, schema: &TableSchema, rows: &[Vec<Value>]) -> TableResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> TableResult<()>;
}

/// Write typed rows through any backend.
pub fn write_rows<R: TableRow>(writer: &mut dyn TableWriter, rows: &[R]) -> TableResult<()> {
    let values: Vec<Vec<Value>> = rows.iter().map(TableRow::values).collect();
    writer.write_table(&R::SCHEMA, &values)?;
    tracing::debug!(
        backend = writer.backend(),
        table = R::SCHEMA.table,
        rows = rows.len(),
        "table written"
    );
    Ok(())
}
