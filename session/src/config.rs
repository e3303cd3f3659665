//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use verid_types::VerificationParams;

use crate::error::SessionError;

/// Configuration for the verification service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a production
/// default, so an empty file is a valid configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Minimum true authenticity indicators for a document to pass.
    #[serde(default = "default_min_true_indicators")]
    pub min_true_indicators: u32,

    /// Name-similarity acceptance threshold (strictly-greater comparison).
    #[serde(default = "default_name_similarity_threshold")]
    pub name_similarity_threshold: f64,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl ServiceConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SessionError::Config(format!("read {}: {e}", path.as_ref().display())))?;
        toml::from_str(&raw).map_err(|e| SessionError::Config(e.to_string()))
    }

    /// The pipeline thresholds this configuration selects.
    pub fn params(&self) -> VerificationParams {
        VerificationParams {
            min_true_indicators: self.min_true_indicators,
            name_similarity_threshold: self.name_similarity_threshold,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_true_indicators: default_min_true_indicators(),
            name_similarity_threshold: default_name_similarity_threshold(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_min_true_indicators() -> u32 {
    VerificationParams::default().min_true_indicators
}

fn default_name_similarity_threshold() -> f64 {
    VerificationParams::default().name_similarity_threshold
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}
