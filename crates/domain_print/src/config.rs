//! Print pipeline configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use core_kernel::Timezone;

use crate::layout::PaperSize;

/// Print pipeline configuration
///
/// Serializable so the defaults can seed the config builder before the
/// environment overrides apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Line items per page
    pub page_capacity: usize,
    /// Serialized QR payload limit in characters
    pub qr_payload_limit: usize,
    /// QR request URL limit in characters
    pub qr_url_limit: usize,
    /// External QR rendering endpoint
    pub qr_endpoint: String,
    /// Paper dimensions
    pub paper: PaperSize,
    /// Timezone stamped on printed dates
    pub timezone: Timezone,
    /// Delay before the signature verification re-check, milliseconds
    pub signature_retry_ms: u64,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            page_capacity: 16,
            qr_payload_limit: 2000,
            qr_url_limit: 2048,
            qr_endpoint: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            paper: PaperSize::A4,
            timezone: Timezone::default(),
            signature_retry_ms: 500,
        }
    }
}

impl PrintConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&PrintConfig::default())?)
            .add_source(config::Environment::with_prefix("PRINT"))
            .build()?
            .try_deserialize()
    }

    /// Signature verification retry delay
    pub fn signature_retry(&self) -> Duration {
        Duration::from_millis(self.signature_retry_ms)
    }
}
