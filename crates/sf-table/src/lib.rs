//! `sf-table`: the typed tables passed between steelflow stages.
//!
//! Every stage materialises one table before the next stage starts.  A table
//! is a `Vec` of one of the row types in [`row`]; each row type carries a
//! static [`TableSchema`] naming its columns, their cell types, and whether a
//! column belongs to the persisted record or only to the stage file.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | `<file_stem>.csv` per table                     |
//! | `sqlite`  | SQLite  | `steelflow.db`, one table per persistence name  |
//! | `parquet` | Parquet | `<file_stem>.parquet` per table                 |
//!
//! All backends implement [`TableWriter`].  CSV files are the stage boundary:
//! [`read_table`] loads them back, checking every schema column is present
//! and reporting the line of any malformed cell.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sf_table::{read_table, write_rows, CsvWriter, PlantLogRow};
//!
//! let mut csv = CsvWriter::new(Path::new("./synDatasets"))?;
//! write_rows(&mut csv, &plant_rows)?;
//! let back: Vec<PlantLogRow> = read_table(&csv.path_for(&PlantLogRow::SCHEMA))?;
//! ```

pub mod csv;
pub mod error;
pub mod reader;
pub mod row;
pub mod schema;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{TableError, TableResult};
pub use reader::{read_table, read_table_from};
pub use row::{
    PlantLogRow, PortLogRow, PortTariffRow, TripRow, VesselContractRow, VesselDelayRow,
};
pub use schema::{Column, ColumnType, TableRow, TableSchema, Value};
pub use writer::{TableWriter, write_rows};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
