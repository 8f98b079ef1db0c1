//! Error types for sf-table.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing a stage table or loading one back.
#[derive(Debug, Error)]
pub enum TableError {
    /// The upstream stage file does not exist.
    #[error("missing input {path}: table `{table}` is produced by the `{producer}` stage")]
    MissingInput {
        table:    &'static str,
        producer: &'static str,
        path:     PathBuf,
    },

    /// A required column is absent from the file header.
    #[error("{path}: table `{table}` is missing column `{column}`")]
    MissingColumn {
        table:  &'static str,
        column: &'static str,
        path:   PathBuf,
    },

    /// A record could not be decoded into the row type.
    #[error("{path}, line {line}: {source}")]
    Row {
        path:   PathBuf,
        line:   u64,
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;
