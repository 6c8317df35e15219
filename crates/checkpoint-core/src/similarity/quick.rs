//! Cheap prefix/substring lookup for latency-sensitive callers
//!
//! No edit distance: a value matches only if it equals, starts with, or
//! contains the query.

use tracing::trace;

use super::config::SimilarityConfig;
use super::field::TextField;
use super::normalization::{char_len, normalize_text};

/// Default minimum score for [`quick_search`]
pub const DEFAULT_QUICK_MIN: f64 = 70.0;

/// Floor and span of the prefix score; a full-length prefix would score 100
const PREFIX_BASE: f64 = 70.0;
const PREFIX_SPAN: f64 = 30.0;

/// Find a record whose field equals, starts with, or contains `query`.
///
/// An exact match is returned immediately. Otherwise the best score at or
/// above `min_similarity` wins, earlier records first on ties:
/// - prefix: `70 + 30 * len(query) / len(value)`
/// - substring: `100 * len(query) / len(value)`
pub fn quick_search<'a, T, F>(
    records: &'a [T],
    field: &F,
    query: &str,
    min_similarity: f64,
) -> Option<&'a T>
where
    F: TextField<T> + ?Sized,
{
    let config = SimilarityConfig::default();
    let query = normalize_text(query, &config);
    if query.is_empty() {
        return None;
    }

    let mut best: Option<(&'a T, f64)> = None;

    for item in records {
        let Some(text) = field.text(item) else {
            continue;
        };
        let candidate = normalize_text(&text, &config);
        let Some(score) = quick_score(&candidate, &query) else {
            continue;
        };

        if score >= 100.0 {
            trace!("quick search exact hit");
            return Some(item);
        }
        if score >= min_similarity && best.map_or(true, |(_, b)| score > b) {
            best = Some((item, score));
        }
    }

    best.map(|(item, _)| item)
}

fn quick_score(candidate: &str, query: &str) -> Option<f64> {
    if candidate.is_empty() {
        return None;
    }
    if candidate == query {
        return Some(100.0);
    }

    let ratio = char_len(query) as f64 / char_len(candidate) as f64;

    if candidate.starts_with(query) {
        Some(PREFIX_BASE + PREFIX_SPAN * ratio)
    } else if candidate.contains(query) {
        Some(100.0 * ratio)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::AsText;

    #[test]
    fn test_quick_score() {
        assert_eq!(quick_score("maria", "maria"), Some(100.0));
        let prefix = quick_score("maria lopez", "maria").unwrap();
        assert!((prefix - (70.0 + 30.0 * 5.0 / 11.0)).abs() < 1e-9);
        let inner = quick_score("maria lopez", "lopez").unwrap();
        assert!((inner - 100.0 * 5.0 / 11.0).abs() < 1e-9);
        assert_eq!(quick_score("maria lopez", "mario"), None);
        assert_eq!(quick_score("", "mario"), None);
    }

    #[test]
    fn test_exact_wins_over_earlier_prefix() {
        let names = ["Maria Lopez", "Maria"];
        assert_eq!(quick_search(&names, &AsText, "MARÍA", DEFAULT_QUICK_MIN), Some(&"Maria"));
    }

    #[test]
    fn test_substring_below_minimum() {
        let names = ["Maria Lopez"];
        assert_eq!(quick_search(&names, &AsText, "lopez", DEFAULT_QUICK_MIN), None);
        assert_eq!(quick_search(&names, &AsText, "lopez", 40.0), Some(&"Maria Lopez"));
    }

    #[test]
    fn test_no_fuzziness() {
        let names = ["Maria Lopez"];
        assert_eq!(quick_search(&names, &AsText, "marai", 0.0), None);
        assert_eq!(quick_search(&names, &AsText, "   ", 0.0), None);
    }
}
