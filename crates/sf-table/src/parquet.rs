//! Parquet output backend (feature `parquet`).
//!
//! Creates one `<file_stem>.parquet` per table in the output directory with
//! every schema column.  Dates are `Date32`, timestamps `Timestamp(Second)`.
//! Each file is closed (footer written) before `write_table` returns.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Date32Builder, Float64Builder, Int64Builder, StringBuilder,
    TimestampSecondBuilder,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::Datelike;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::TableWriter;
use crate::{ColumnType, TableResult, TableSchema, Value};

/// Days from 0001-01-01 (CE) to 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn data_type(ty: ColumnType) -> DataType {
    match ty {
        ColumnType::Text     => DataType::Utf8,
        ColumnType::Real     => DataType::Float64,
        ColumnType::Integer  => DataType::Int64,
        ColumnType::Date     => DataType::Date32,
        ColumnType::DateTime => DataType::Timestamp(TimeUnit::Second, None),
    }
}

fn arrow_schema(schema: &TableSchema) -> Arc<Schema> {
    Arc::new(Schema::new(
        schema
            .columns
            .iter()
            .map(|c| Field::new(c.name, data_type(c.ty), true))
            .collect::<Vec<_>>(),
    ))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

// ── Column builders ───────────────────────────────────────────────────────────

enum ColumnBuilder {
    Text(StringBuilder),
    Real(Float64Builder),
    Int(Int64Builder),
    Date(Date32Builder),
    DateTime(TimestampSecondBuilder),
}

impl ColumnBuilder {
    fn new(ty: ColumnType) -> Self {
        match ty {
            ColumnType::Text     => ColumnBuilder::Text(StringBuilder::new()),
            ColumnType::Real     => ColumnBuilder::Real(Float64Builder::new()),
            ColumnType::Integer  => ColumnBuilder::Int(Int64Builder::new()),
            ColumnType::Date     => ColumnBuilder::Date(Date32Builder::new()),
            ColumnType::DateTime => ColumnBuilder::DateTime(TimestampSecondBuilder::new()),
        }
    }

    /// Append `value`; a value of the wrong type becomes a null.
    fn append(&mut self, value: &Value) {
        match (self, value) {
            (ColumnBuilder::Text(b), Value::Text(s))         => b.append_value(s),
            (ColumnBuilder::Real(b), Value::Real(x))         => b.append_value(*x),
            (ColumnBuilder::Real(b), Value::Int(n))          => b.append_value(*n as f64),
            (ColumnBuilder::Int(b), Value::Int(n))           => b.append_value(*n),
            (ColumnBuilder::Date(b), Value::Date(d))         => {
                b.append_value(d.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
            }
            (ColumnBuilder::DateTime(b), Value::DateTime(t)) => {
                b.append_value(t.and_utc().timestamp())
            }
            (ColumnBuilder::Text(b), _)     => b.append_null(),
            (ColumnBuilder::Real(b), _)     => b.append_null(),
            (ColumnBuilder::Int(b), _)      => b.append_null(),
            (ColumnBuilder::Date(b), _)     => b.append_null(),
            (ColumnBuilder::DateTime(b), _) => b.append_null(),
        }
    }

    fn finish(self) -> ArrayRef {
        match self {
            ColumnBuilder::Text(mut b)     => Arc::new(b.finish()),
            ColumnBuilder::Real(mut b)     => Arc::new(b.finish()),
            ColumnBuilder::Int(mut b)      => Arc::new(b.finish()),
            ColumnBuilder::Date(mut b)     => Arc::new(b.finish()),
            ColumnBuilder::DateTime(mut b) => Arc::new(b.finish()),
        }
    }
}

// ── ParquetWriter ─────────────────────────────────────────────────────────────

/// Writes each table to its own Parquet file.
pub struct ParquetWriter {
    dir: PathBuf,
}

impl ParquetWriter {
    /// Use `dir` as the output directory, creating it if needed.
    pub fn new(dir: &Path) -> TableResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    pub fn path_for(&self, schema: &TableSchema) -> PathBuf {
        self.dir.join(format!("{}.parquet", schema.file_stem))
    }
}

impl TableWriter for ParquetWriter {
    fn backend(&self) -> &'static str {
        "parquet"
    }

    fn write_table(&mut self, schema: &TableSchema, rows: &[Vec<Value>]) -> TableResult<()> {
        let arrow = arrow_schema(schema);
        let mut builders: Vec<ColumnBuilder> =
            schema.columns.iter().map(|c| ColumnBuilder::new(c.ty)).collect();

        for row in rows {
            for (builder, value) in builders.iter_mut().zip(row) {
                builder.append(value);
            }
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&arrow),
            builders.into_iter().map(ColumnBuilder::finish).collect(),
        )?;

        let file = File::create(self.path_for(schema))?;
        let mut writer = ArrowWriter::try_new(file, arrow, Some(snappy_props()))?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }

    fn finish(&mut self) -> TableResult<()> {
        Ok(())
    }
}
