//! Error types for fx_router

use thiserror::Error;

/// Main error type for fx_router
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("cannot compute conversion from {from} to {to}: some rates are missing")]
    MissingRate { from: String, to: String },

    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    #[error("invalid rate: {0}")]
    InvalidRate(String),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fx_router operations
pub type Result<T> = std::result::Result<T, RouterError>;
