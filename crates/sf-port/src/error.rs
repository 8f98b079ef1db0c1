use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("network has no ports")]
    NoPorts,

    #[error("invalid port policy: {0}")]
    InvalidPolicy(String),
}

pub type PortResult<T> = Result<T, PortError>;
