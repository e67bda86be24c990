//! Error types for ecopulse_app

use thiserror::Error;

/// Errors that can occur in the EcoPulse application
#[derive(Error, Debug)]
pub enum EcoPulseError {
    /// Invalid application configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failed to initialize a scene
    #[error("scene initialization failed: {0}")]
    SceneInit(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for EcoPulseError {
    fn from(err: anyhow::Error) -> Self {
        EcoPulseError::Other(err.to_string())
    }
}

/// Result type for ecopulse_app operations
pub type Result<T> = std::result::Result<T, EcoPulseError>;
