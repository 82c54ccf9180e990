//! Error types for the scan engine

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("marker error: {0}")]
    Marker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
