use thiserror::Error;

use sf_core::SfError;

#[derive(Debug, Error)]
pub enum VesselError {
    #[error("invalid vessel parameters: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Core(#[from] SfError),
}

pub type VesselResult<T> = Result<T, VesselError>;
