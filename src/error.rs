use thiserror::Error;

#[derive(Error, Debug)]
pub enum CocomoError {
    #[error("Invalid Size: {0} KLOC (must be a finite number greater than zero)")]
    InvalidSize(f64),

    #[error("Unknown Mode: '{0}' (expected organic, semi-detached or embedded)")]
    UnknownMode(String),

    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CocomoResult<T> = Result<T, CocomoError>;
