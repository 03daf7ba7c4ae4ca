use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnezoneError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Invalid element table: {0}")]
    InvalidTable(String),

    #[error("Series did not converge after {iterations} iterations (last difference {difference:e})")]
    SeriesNotConverged { iterations: usize, difference: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OnezoneResult<T> = Result<T, OnezoneError>;
