//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SfError` as one variant
//! via `From`, so `?` works across crate boundaries.

use thiserror::Error;

use crate::{LocationId, PlantId};

/// The top-level error type for `sf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SfError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("plant {0} not found")]
    PlantNotFound(PlantId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sf-*` crates.
pub type SfResult<T> = Result<T, SfError>;
