use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawbiasError {
    #[error("Invalid range: cannot pick {requested} unique numbers from {available} candidates")]
    InvalidRange { requested: usize, available: usize },

    #[error("Model returned an empty output vector")]
    EmptyModelOutput,

    #[error("Population is empty")]
    EmptyPopulation,

    #[error("Genome length mismatch for player {player_id}: expected {expected}, got {actual}")]
    GenomeLengthMismatch {
        player_id: u64,
        expected: usize,
        actual: usize,
    },

    #[error("Model error: {0}")]
    Model(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrawbiasError>;
