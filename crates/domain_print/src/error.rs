//! Print domain errors

use thiserror::Error;

/// Errors raised while preparing print output
#[derive(Debug, Error)]
pub enum PrintError {
    /// The QR payload could not be serialized
    #[error("QR payload serialization failed: {0}")]
    QrSerialization(#[from] serde_json::Error),

    /// Print configuration could not be loaded
    #[error("Print configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
