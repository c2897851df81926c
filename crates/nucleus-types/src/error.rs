use thiserror::Error;

#[derive(Error, Debug)]
pub enum NucleusError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NucleusResult<T> = Result<T, NucleusError>;
