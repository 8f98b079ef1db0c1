//! Column schema shared by every backend.
//!
//! A [`TableSchema`] is `'static` data attached to a row type through
//! [`TableRow::SCHEMA`].  Writers take the header from it and the loader
//! validates a file header against it, so the column list lives in exactly one
//! place per table.

use chrono::{NaiveDate, NaiveDateTime};

use sf_core::calendar::{DATE_FORMAT, DATETIME_FORMAT};

/// Cell type of a column, mapped to a SQL affinity and an Arrow data type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Real,
    Integer,
    Date,
    DateTime,
}

impl ColumnType {
    /// SQLite declared type.
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Text                        => "TEXT",
            ColumnType::Real                        => "REAL",
            ColumnType::Integer                     => "INTEGER",
            ColumnType::Date | ColumnType::DateTime => "TEXT",
        }
    }
}

/// One named column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name:      &'static str,
    pub ty:        ColumnType,
    /// `false` for columns that only exist in the stage file (the next stage
    /// reads them) and are not part of the persisted record.
    pub persisted: bool,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self { name, ty: ColumnType::Text, persisted: true }
    }

    pub const fn real(name: &'static str) -> Self {
        Self { name, ty: ColumnType::Real, persisted: true }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self { name, ty: ColumnType::Integer, persisted: true }
    }

    pub const fn date(name: &'static str) -> Self {
        Self { name, ty: ColumnType::Date, persisted: true }
    }

    pub const fn datetime(name: &'static str) -> Self {
        Self { name, ty: ColumnType::DateTime, persisted: true }
    }

    /// Mark the column as stage-file only.
    pub const fn stage_only(mut self) -> Self {
        self.persisted = false;
        self
    }
}

/// Static description of one stage table.
#[derive(Copy, Clone, Debug)]
pub struct TableSchema {
    /// Persistence name (SQLite table).
    pub table:     &'static str,
    /// File name without extension for the CSV and Parquet backends.
    pub file_stem: &'static str,
    /// Name of the pipeline stage that produces this table.
    pub producer:  &'static str,
    pub columns:   &'static [Column],
}

impl TableSchema {
    pub fn header(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.name)
    }

    /// Columns of the persisted record, with their positions in a row.
    pub fn persisted(&self) -> impl Iterator<Item = (usize, &'static Column)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.persisted)
    }

    pub fn csv_file(&self) -> String {
        format!("{}.csv", self.file_stem)
    }
}

// ── Value ─────────────────────────────────────────────────────────────────────

/// One cell, owned so rows can be collected before a backend borrows them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Real(f64),
    Int(i64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Text as written to a CSV cell.  Dates and timestamps use the
    /// formats the loader parses back.
    pub fn to_cell(&self) -> String {
        match self {
            Value::Text(s)     => s.clone(),
            Value::Real(x)     => x.to_string(),
            Value::Int(n)      => n.to_string(),
            Value::Date(d)     => d.format(DATE_FORMAT).to_string(),
            Value::DateTime(t) => t.format(DATETIME_FORMAT).to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Real(x)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Value::DateTime(t)
    }
}

// ── TableRow ──────────────────────────────────────────────────────────────────

/// A row type of one stage table.
///
/// `values()` must return one `Value` per column of `SCHEMA`, in order.
pub trait TableRow {
    const SCHEMA: TableSchema;

    fn values(&self) -> Vec<Value>;
}
