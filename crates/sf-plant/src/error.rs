use thiserror::Error;

use sf_core::SfError;

#[derive(Debug, Error)]
pub enum PlantError {
    #[error("plant simulation needs at least one day")]
    EmptyCalendar,

    #[error("network has no plants")]
    NoPlants,

    #[error("invalid plant parameters: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Core(#[from] SfError),
}

pub type PlantResult<T> = Result<T, PlantError>;
