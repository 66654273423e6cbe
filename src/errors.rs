// errors.rs
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::item::ItemError;

/// Errors surfaced by the crate's fallible entry points
/// (loading JSON, reading configuration, parsing CLI timestamps).
///
/// The classifier itself never fails; see `domain::logic`.
#[derive(Debug, Error)]
pub enum FridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ItemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

// Type alias commonly used by loaders.
pub type Result<T> = std::result::Result<T, FridgeError>;
