use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("expected {expected} features, got {got}")]
    FeatureLength { expected: usize, got: usize },

    #[error("model produced a non-finite output")]
    NonFinite,

    #[error("invalid model weights: {0}")]
    Shape(String),

    #[error("cannot read model file {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse model file {path}: {source}")]
    Json {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type PredictResult<T> = Result<T, PredictError>;
