use thiserror::Error;

use sf_core::SfError;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("plant log names unknown plant {0:?}")]
    UnknownPlant(String),

    #[error("rake pool is empty")]
    EmptyPool,

    #[error("invalid transport parameters: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Core(#[from] SfError),
}

pub type TransportResult<T> = Result<T, TransportError>;
