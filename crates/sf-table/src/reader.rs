//! Stage-boundary loader.
//!
//! A stage's input is the CSV file written by the stage before it.  Loading
//! checks, in order:
//!
//! 1. the file exists (else [`TableError::MissingInput`] naming the producer);
//! 2. every schema column appears in the header (else
//!    [`TableError::MissingColumn`]); extra columns are ignored;
//! 3. every record decodes into the row type (else [`TableError::Row`] with
//!    the line number).

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{TableError, TableResult, TableRow};

/// Load and validate a stage table from `path`.
pub fn read_table<R>(path: &Path) -> TableResult<Vec<R>>
where
    R: TableRow + DeserializeOwned,
{
    if !path.exists() {
        return Err(TableError::MissingInput {
            table:    R::SCHEMA.table,
            producer: R::SCHEMA.producer,
            path:     path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path)?;
    let rows = read_table_from::<R, _>(file, path)?;
    tracing::debug!(table = R::SCHEMA.table, rows = rows.len(), path = %path.display(), "table loaded");
    Ok(rows)
}

/// Like [`read_table`] but accepts any `Read` source.  `path` is used only in
/// diagnostics.
pub fn read_table_from<R, S>(source: S, path: &Path) -> TableResult<Vec<R>>
where
    R: TableRow + DeserializeOwned,
    S: Read,
{
    let mut rdr = csv::Reader::from_reader(source);

    let headers = rdr.headers()?.clone();
    for column in R::SCHEMA.columns {
        if !headers.iter().any(|h| h.trim() == column.name) {
            return Err(TableError::MissingColumn {
                table:  R::SCHEMA.table,
                column: column.name,
                path:   path.to_path_buf(),
            });
        }
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<R>().enumerate() {
        let row = result.map_err(|source| TableError::Row {
            path: path.to_path_buf(),
            // Header is line 1.
            line: source.position().map_or(i as u64 + 2, |p| p.line()),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}
