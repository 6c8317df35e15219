//! Checkpoint Core - repeat-detainee detection for alcohol-checkpoint cases
//!
//! This crate provides:
//!
//! - **Similarity**: fuzzy name matching over arbitrary records (word overlap,
//!   edit distance, positional bonuses, length-adapted thresholds)
//! - **Residence**: finding an earlier case for a newly entered detainee and
//!   linking the new case to it
//! - **Config**: TOML/JSON configuration for both
//!
//! # Example
//!
//! ```
//! use checkpoint_core::similarity::find_most_similar;
//! use checkpoint_domain::CaseRecord;
//!
//! let history = vec![
//!     CaseRecord::new("F-1", "Juan Pérez López"),
//!     CaseRecord::new("F-2", "Rosa Díaz"),
//! ];
//! let best = find_most_similar(&history, "name", "juan perez").unwrap();
//! assert_eq!(best.item.folio, "F-1");
//! ```

pub mod config;
pub mod error;
pub mod residence;
pub mod similarity;

pub use config::{CheckpointConfig, ResidenceConfig};
pub use error::{CheckpointError, ConfigError, Result};
pub use residence::{apply_residence, ResidenceDetector, ResidenceMatch, ResidenceSummary};
pub use similarity::{SimilarityConfig, SimilarityEngine, SimilarityOverrides};

/// Returns the version of checkpoint-core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
