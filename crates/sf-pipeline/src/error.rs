use std::path::PathBuf;

use thiserror::Error;

use sf_network::NetworkError;
use sf_plant::PlantError;
use sf_port::PortError;
use sf_rake::TransportError;
use sf_table::TableError;
use sf_vessel::VesselError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    ConfigParse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown stage {0:?}")]
    UnknownStage(String),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("plant stage: {0}")]
    Plant(#[from] PlantError),

    #[error("transport stage: {0}")]
    Transport(#[from] TransportError),

    #[error("port stage: {0}")]
    Port(#[from] PortError),

    #[error("vessel stage: {0}")]
    Vessel(#[from] VesselError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
