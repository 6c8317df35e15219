//! Fuzzy name matching for detecting repeat detainees
//!
//! Scores a query string against one text field of each caller record and
//! picks the best match, or ranks all matches. Scoring combines word-level
//! overlap, edit distance, and first/last-word bonuses, with thresholds
//! adapted to the query's length.
//!
//! Everything here is pure: no I/O, no shared state, no errors. Degenerate
//! input (no records, blank query) yields `None` or an empty list.

mod config;
mod distance;
mod engine;
mod field;
mod normalization;
mod quick;
mod scoring;
mod words;

pub use config::{SimilarityConfig, SimilarityOverrides};
pub use distance::optimized_levenshtein;
pub use engine::{
    compare_similarity, filter_by_similarity, find_all_matches, find_best_match, find_match,
    find_most_similar, find_most_similar_with, find_top_matches, get_match_percent, BestMatch,
    MatchEntry, SimilarityEngine, SimilarityResult, DEFAULT_FILTER_PERCENT, DEFAULT_LIMIT,
    DEFAULT_MIN_PERCENT,
};
pub use field::{field_fn, AsText, FieldFn, FieldLookup, TextField};
pub use normalization::normalize_text;
pub use quick::{quick_search, DEFAULT_QUICK_MIN};
pub use scoring::{calculate_detailed_similarity, DetailedSimilarity, ScoreDetails};
pub use words::are_words_similar;
