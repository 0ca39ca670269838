use thiserror::Error;

pub type Result<T> = std::result::Result<T, FipsError>;

#[derive(Error, Debug)]
pub enum FipsError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// Resolution matched zero rows, several rows, or used an invalid column set.
    #[error("{criteria} is not a valid unique key ({matches} rows matched)")]
    InvalidKey { criteria: String, matches: usize },

    #[error("Key {key} not found in index")]
    KeyNotFound { key: String },

    #[error("Key has {found} values but the index has {expected} columns")]
    KeyArity { expected: usize, found: usize },

    #[error("Unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("Invalid format request: {0}")]
    InvalidFormat(String),

    #[error("County {fips} references unknown state '{st}'")]
    OrphanCounty { fips: String, st: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid county data: {0}")]
    InvalidCountyData(String),
}
