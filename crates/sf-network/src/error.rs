use thiserror::Error;

use crate::LocationKind;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("duplicate plant {0:?}")]
    DuplicatePlant(String),

    #[error("location {name:?} declared as {existing} and as {requested}")]
    KindConflict {
        name:      String,
        existing:  LocationKind,
        requested: LocationKind,
    },

    #[error("plant {plant:?} has no {what}")]
    NoRoutes {
        plant: String,
        what:  &'static str,
    },

    #[error("plant {plant:?}: {reason}")]
    InvalidPlant {
        plant:  String,
        reason: String,
    },

    #[error("too many locations for a LocationId")]
    TooManyLocations,
}

pub type NetworkResult<T> = Result<T, NetworkError>;
