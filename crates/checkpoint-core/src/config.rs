//! Configuration for checkpoint-core
//!
//! A single file carries the similarity overrides used for name matching
//! and the residence threshold. Both TOML and JSON are accepted.
//!
//! ```toml
//! [similarity]
//! min_similarity = 70.0
//! require_word_order = true
//!
//! [residence]
//! threshold = 55.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::residence::{ResidenceDetector, DEFAULT_RESIDENCE_THRESHOLD};
use crate::similarity::{SimilarityConfig, SimilarityEngine, SimilarityOverrides};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Overrides merged onto the default similarity parameters
    pub similarity: SimilarityOverrides,
    pub residence: ResidenceConfig,
}

/// Residence detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidenceConfig {
    /// A history match must score strictly above this to be reported
    pub threshold: f64,
}

impl Default for ResidenceConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_RESIDENCE_THRESHOLD,
        }
    }
}

impl CheckpointConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and validate a config file; `.json` files are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        config.validate()?;

        info!(path = %path.display(), "loaded checkpoint config");
        Ok(config)
    }

    /// Load the config at [`CheckpointConfig::default_path`] if it exists,
    /// defaults otherwise.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/checkpoint/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("checkpoint").join("config.toml"))
    }

    /// The similarity parameters these overrides produce
    pub fn similarity_config(&self) -> SimilarityConfig {
        SimilarityConfig::default().merged(&self.similarity)
    }

    pub fn engine(&self) -> SimilarityEngine {
        SimilarityEngine::with_config(self.similarity_config())
    }

    pub fn residence_detector(&self) -> ResidenceDetector {
        ResidenceDetector::new(self.engine(), self.residence.threshold)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.similarity_config().validate()?;

        if !(0.0..=100.0).contains(&self.residence.threshold) {
            return Err(ConfigError::OutOfRange(
                "residence threshold must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }
}
