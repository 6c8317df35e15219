//! Tunable parameters for the similarity engine

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalization::char_len;
use crate::error::ConfigError;

/// Parameters controlling how candidate values are scored against a query.
///
/// This is a value object: every `with_*` method and [`SimilarityConfig::merged`]
/// return a new config and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Minimum score (0-100) for a candidate to count as a match
    pub min_similarity: f64,
    /// Only exact whole-word matches count towards the word score
    pub use_strict_mode: bool,
    pub case_sensitive: bool,
    pub ignore_accents: bool,
    pub ignore_punctuation: bool,
    /// Per-word edit-distance ratio (0-1) at which two words are "the same"
    pub match_threshold: f64,
    /// Points added when the first words of both strings match
    pub first_word_bonus: f64,
    /// Points added when the last words of both strings match
    pub last_word_bonus: f64,
    /// Multiplier applied to the final score for queries of five or more chars
    pub length_weight: f64,
    /// Reward matched words that keep their relative order
    pub require_word_order: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            min_similarity: 65.0,
            use_strict_mode: false,
            case_sensitive: false,
            ignore_accents: true,
            ignore_punctuation: true,
            match_threshold: 0.7,
            first_word_bonus: 15.0,
            last_word_bonus: 10.0,
            length_weight: 1.1,
            require_word_order: false,
        }
    }
}

impl SimilarityConfig {
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.use_strict_mode = strict;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_ignore_accents(mut self, ignore_accents: bool) -> Self {
        self.ignore_accents = ignore_accents;
        self
    }

    pub fn with_ignore_punctuation(mut self, ignore_punctuation: bool) -> Self {
        self.ignore_punctuation = ignore_punctuation;
        self
    }

    pub fn with_match_threshold(mut self, match_threshold: f64) -> Self {
        self.match_threshold = match_threshold;
        self
    }

    pub fn with_word_bonuses(mut self, first: f64, last: f64) -> Self {
        self.first_word_bonus = first;
        self.last_word_bonus = last;
        self
    }

    pub fn with_length_weight(mut self, length_weight: f64) -> Self {
        self.length_weight = length_weight;
        self
    }

    pub fn with_word_order(mut self, require_word_order: bool) -> Self {
        self.require_word_order = require_word_order;
        self
    }

    /// Apply `overrides` on top of this config, returning the merged config
    pub fn merged(&self, overrides: &SimilarityOverrides) -> Self {
        Self {
            min_similarity: overrides.min_similarity.unwrap_or(self.min_similarity),
            use_strict_mode: overrides.use_strict_mode.unwrap_or(self.use_strict_mode),
            case_sensitive: overrides.case_sensitive.unwrap_or(self.case_sensitive),
            ignore_accents: overrides.ignore_accents.unwrap_or(self.ignore_accents),
            ignore_punctuation: overrides
                .ignore_punctuation
                .unwrap_or(self.ignore_punctuation),
            match_threshold: overrides.match_threshold.unwrap_or(self.match_threshold),
            first_word_bonus: overrides.first_word_bonus.unwrap_or(self.first_word_bonus),
            last_word_bonus: overrides.last_word_bonus.unwrap_or(self.last_word_bonus),
            length_weight: overrides.length_weight.unwrap_or(self.length_weight),
            require_word_order: overrides
                .require_word_order
                .unwrap_or(self.require_word_order),
        }
    }

    /// Tighten or loosen the config for a normalized query.
    ///
    /// - under 3 chars: near-exact only (min 90, strict, threshold 0.9)
    /// - 3 to 9 chars: min at least 75, threshold +0.1 (at most 0.95)
    /// - a single word: min at least 70, first-word bonus 20, no last-word bonus
    /// - more than 4 words: min -5 (at least 50), threshold -0.1 (at least 0.5)
    pub fn adapted_to(&self, normalized_query: &str) -> Self {
        let mut adapted = self.clone();
        let len = char_len(normalized_query);
        let word_count = normalized_query.split_whitespace().count();

        if len < 3 {
            adapted.min_similarity = 90.0;
            adapted.use_strict_mode = true;
            adapted.match_threshold = 0.9;
        } else if len < 10 {
            adapted.min_similarity = adapted.min_similarity.max(75.0);
            adapted.match_threshold = (adapted.match_threshold + 0.1).min(0.95);
        }

        if word_count == 1 {
            adapted.min_similarity = adapted.min_similarity.max(70.0);
            adapted.first_word_bonus = 20.0;
            adapted.last_word_bonus = 0.0;
        } else if word_count > 4 {
            adapted.min_similarity = (adapted.min_similarity - 5.0).max(50.0);
            adapted.match_threshold = (adapted.match_threshold - 0.1).max(0.5);
        }

        if adapted != *self {
            debug!(
                len,
                word_count,
                min_similarity = adapted.min_similarity,
                match_threshold = adapted.match_threshold,
                strict = adapted.use_strict_mode,
                "adapted similarity config to query"
            );
        }

        adapted
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.min_similarity) {
            return Err(ConfigError::OutOfRange(
                "min_similarity must be between 0 and 100".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ConfigError::OutOfRange(
                "match_threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.first_word_bonus < 0.0 || self.last_word_bonus < 0.0 {
            return Err(ConfigError::OutOfRange(
                "word bonuses must not be negative".to_string(),
            ));
        }

        // Also rejects NaN
        if !(self.length_weight >= 1.0) {
            return Err(ConfigError::OutOfRange(
                "length_weight must be at least 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Partial config; unset fields keep the value of the config it is merged onto
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimilarityOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_strict_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_accents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_punctuation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_word_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_word_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_word_order: Option<bool>,
}

impl SimilarityOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
