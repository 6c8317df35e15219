//! Word-level matching

use super::distance::levenshtein_ratio;
use super::normalization::char_len;

/// Weight of the character-coverage term in the word score
const COVERAGE_WEIGHT: f64 = 20.0;

/// Whether two normalized words should be treated as the same word.
///
/// Exact matches always count. Words under three characters must match
/// exactly. Otherwise one containing the other counts, and failing that the
/// edit-distance ratio must reach `threshold`.
pub fn are_words_similar(a: &str, b: &str, threshold: f64) -> bool {
    if a == b {
        return true;
    }

    if char_len(a) < 3 || char_len(b) < 3 {
        return false;
    }

    if a.contains(b) || b.contains(a) {
        return true;
    }

    levenshtein_ratio(a, b) >= threshold
}

/// Outcome of matching query words against candidate words
#[derive(Debug, Clone, Default)]
pub(crate) struct WordMatch {
    pub score: f64,
    /// Query words that found a partner, in query order
    pub matched: Vec<String>,
    /// `(query_index, candidate_index)` for each matched word
    pub positions: Vec<(usize, usize)>,
}

/// Score how many query words find a partner among the candidate words.
///
/// `(matched / max_word_count) * 100` plus up to 20 points for the share of
/// characters covered by matched words, capped at 100.
pub(crate) fn word_score(
    candidate_words: &[&str],
    query_words: &[&str],
    threshold: f64,
    strict: bool,
) -> WordMatch {
    if candidate_words.is_empty() || query_words.is_empty() {
        return WordMatch::default();
    }

    let mut matched = Vec::new();
    let mut positions = Vec::new();

    for (qi, query_word) in query_words.iter().enumerate() {
        let partner = if strict {
            candidate_words.iter().position(|cw| cw == query_word)
        } else {
            candidate_words
                .iter()
                .position(|cw| are_words_similar(query_word, cw, threshold))
        };

        if let Some(ci) = partner {
            matched.push(query_word.to_string());
            positions.push((qi, ci));
        }
    }

    if matched.is_empty() {
        return WordMatch::default();
    }

    let max_words = candidate_words.len().max(query_words.len());
    let matched_chars: usize = matched.iter().map(|w| char_len(w)).sum();
    let candidate_chars: usize = candidate_words.iter().map(|w| char_len(w)).sum();
    let query_chars: usize = query_words.iter().map(|w| char_len(w)).sum();
    let longer_chars = candidate_chars.max(query_chars);

    let overlap = matched.len() as f64 / max_words as f64 * 100.0;
    let coverage = matched_chars as f64 / longer_chars as f64 * COVERAGE_WEIGHT;

    WordMatch {
        score: (overlap + coverage).min(100.0),
        matched,
        positions,
    }
}

/// Share (0-1) of consecutive matched pairs whose candidate positions keep
/// the query's order. `None` with fewer than two matched words.
pub(crate) fn order_preservation(positions: &[(usize, usize)]) -> Option<f64> {
    if positions.len() < 2 {
        return None;
    }

    let pairs = positions.len() - 1;
    let ordered = positions.windows(2).filter(|w| w[1].1 > w[0].1).count();

    Some(ordered as f64 / pairs as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_words() {
        assert!(are_words_similar("garcia", "garcia", 0.7));
        assert!(are_words_similar("garcia", "garc", 0.7));
        assert!(are_words_similar("gonzalez", "gonzale", 0.7));
        assert!(are_words_similar("perez", "peres", 0.7));
        assert!(!are_words_similar("lopez", "perez", 0.7));
    }

    #[test]
    fn test_short_words_need_exact_match() {
        assert!(are_words_similar("de", "de", 0.1));
        assert!(!are_words_similar("de", "del", 0.1));
        assert!(!are_words_similar("a", "e", 0.0));
    }

    #[test]
    fn test_word_score_full_overlap() {
        let result = word_score(&["juana", "perez"], &["juan", "perez"], 0.7, false);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched, vec!["juan", "perez"]);
        assert_eq!(result.positions, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_word_score_partial_overlap() {
        let result = word_score(&["juan", "perez", "lopez"], &["juan", "perez"], 0.7, false);
        // 2/3 words plus 9/14 chars of coverage
        let expected = 2.0 / 3.0 * 100.0 + 9.0 / 14.0 * 20.0;
        assert!((result.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_strict_mode_ignores_fuzzy_partners() {
        let result = word_score(&["juana", "perez"], &["juan", "perez"], 0.7, true);
        assert_eq!(result.matched, vec!["perez"]);
        assert!(result.score < 100.0);
    }

    #[test]
    fn test_word_score_empty() {
        assert_eq!(word_score(&[], &["juan"], 0.7, false).score, 0.0);
        assert_eq!(word_score(&["juan"], &[], 0.7, false).score, 0.0);
    }

    #[test]
    fn test_order_preservation() {
        assert_eq!(order_preservation(&[(0, 0)]), None);
        assert_eq!(order_preservation(&[(0, 0), (1, 2), (2, 3)]), Some(1.0));
        assert_eq!(order_preservation(&[(0, 1), (1, 0)]), Some(0.0));
    }
}
