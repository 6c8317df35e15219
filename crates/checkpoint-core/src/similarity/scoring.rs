//! Per-candidate scoring
//!
//! Combines the word-level score, an edit-distance score, and positional
//! bonuses and penalties into a single 0-100 similarity.

use serde::{Deserialize, Serialize};

use super::config::SimilarityConfig;
use super::distance::levenshtein_ratio;
use super::normalization::{char_len, significant_words};
use super::words::{are_words_similar, order_preservation, word_score};

/// Maximum points for matched words that keep their relative order
const WORD_ORDER_BONUS: f64 = 10.0;
/// Shorter/longer length ratio under which strings are "wildly" different
const LENGTH_RATIO_FLOOR: f64 = 0.5;
const LENGTH_MISMATCH_PENALTY: f64 = 20.0;
const FIRST_CHAR_PENALTY: f64 = 10.0;

/// Breakdown of how a similarity was reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub word_score: f64,
    /// Zero when the edit distance was not needed
    pub levenshtein_score: f64,
    pub bonuses: f64,
    pub penalties: f64,
}

/// Similarity of one candidate against the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedSimilarity {
    /// Final score in `0.0..=100.0`
    pub similarity: f64,
    /// Query words that found a partner in the candidate
    pub matched_words: Vec<String>,
    pub details: ScoreDetails,
}

impl DetailedSimilarity {
    fn none() -> Self {
        Self {
            similarity: 0.0,
            matched_words: Vec::new(),
            details: ScoreDetails::default(),
        }
    }
}

/// Score a normalized `candidate` against a normalized `query`.
///
/// Both inputs must already have gone through
/// [`normalize_text`](super::normalize_text) with the same config. The
/// length weight depends on the query only, so swapping the arguments can
/// change the result by that factor.
pub fn calculate_detailed_similarity(
    candidate: &str,
    query: &str,
    config: &SimilarityConfig,
) -> DetailedSimilarity {
    if candidate.is_empty() || query.is_empty() {
        return DetailedSimilarity::none();
    }

    let candidate_words = significant_words(candidate);
    let query_words = significant_words(query);

    if candidate == query {
        return DetailedSimilarity {
            similarity: 100.0,
            matched_words: query_words.iter().map(|w| w.to_string()).collect(),
            details: ScoreDetails {
                word_score: 100.0,
                levenshtein_score: 100.0,
                bonuses: 0.0,
                penalties: 0.0,
            },
        };
    }

    let candidate_len = char_len(candidate);
    let query_len = char_len(query);

    let words = word_score(
        &candidate_words,
        &query_words,
        config.match_threshold,
        config.use_strict_mode,
    );

    // Whole-string edit distance only says something for weak word overlap or short strings
    let levenshtein_score = if words.score < 70.0 || candidate_len < 10 || query_len < 10 {
        levenshtein_ratio(candidate, query) * 100.0
    } else {
        0.0
    };

    let mut bonuses = 0.0;

    if let (Some(cf), Some(qf)) = (candidate_words.first(), query_words.first()) {
        if are_words_similar(cf, qf, config.match_threshold) {
            bonuses += config.first_word_bonus;
        }
    }

    if let (Some(cl), Some(ql)) = (candidate_words.last(), query_words.last()) {
        if are_words_similar(cl, ql, config.match_threshold) {
            bonuses += config.last_word_bonus;
        }
    }

    if config.require_word_order {
        if let Some(share) = order_preservation(&words.positions) {
            bonuses += WORD_ORDER_BONUS * share;
        }
    }

    let mut penalties = 0.0;

    let length_ratio = candidate_len.min(query_len) as f64 / candidate_len.max(query_len) as f64;
    if length_ratio < LENGTH_RATIO_FLOOR {
        penalties += LENGTH_MISMATCH_PENALTY;
    }

    if candidate.chars().next() != query.chars().next() {
        penalties += FIRST_CHAR_PENALTY;
    }

    let base = if words.score >= 50.0 {
        words.score
    } else if levenshtein_score >= 60.0 && candidate_len >= 5 && query_len >= 5 {
        levenshtein_score
    } else if words.score == 0.0 {
        levenshtein_score * 0.8
    } else {
        words.score * 0.6 + levenshtein_score * 0.4
    };

    let mut similarity = (base + bonuses - penalties).clamp(0.0, 100.0);
    if query_len >= 5 {
        similarity = (similarity * config.length_weight).clamp(0.0, 100.0);
    }

    DetailedSimilarity {
        similarity,
        matched_words: words.matched,
        details: ScoreDetails {
            word_score: words.score,
            levenshtein_score,
            bonuses,
            penalties,
        },
    }
}
