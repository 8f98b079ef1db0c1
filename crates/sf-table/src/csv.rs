//! CSV output backend.
//!
//! Creates one `<file_stem>.csv` per table in the output directory, header
//! first, every schema column included.  These files are the stage boundary
//! read back by [`crate::read_table`].

use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::TableWriter;
use crate::{TableResult, TableSchema, Value};

/// Writes each table to its own CSV file.
pub struct CsvWriter {
    dir:     PathBuf,
    written: Vec<PathBuf>,
}

impl CsvWriter {
    /// Use `dir` as the output directory, creating it if needed.
    pub fn new(dir: &Path) -> TableResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), written: Vec::new() })
    }

    /// Path of the CSV file for `schema` in this writer's directory.
    pub fn path_for(&self, schema: &TableSchema) -> PathBuf {
        self.dir.join(schema.csv_file())
    }

    /// Files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl TableWriter for CsvWriter {
    fn backend(&self) -> &'static str {
        "csv"
    }

    fn write_table(&mut self, schema: &TableSchema, rows: &[Vec<Value>]) -> TableResult<()> {
        let path = self.path_for(schema);
        let mut w = Writer::from_path(&path)?;
        w.write_record(schema.header())?;
        for row in rows {
            debug_assert_eq!(row.len(), schema.columns.len());
            w.write_record(row.iter().map(Value::to_cell))?;
        }
        w.flush()?;
        if !self.written.contains(&path) {
            self.written.push(path);
        }
        Ok(())
    }

    fn finish(&mut self) -> TableResult<()> {
        Ok(())
    }
}
