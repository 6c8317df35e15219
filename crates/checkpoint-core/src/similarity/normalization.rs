//! Text normalization applied to queries and candidate values before comparison

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::config::SimilarityConfig;

/// Normalize text according to the toggles in `config`.
///
/// - Lowercases unless `case_sensitive`
/// - Strips diacritics (NFD, drop combining marks) when `ignore_accents`
/// - Replaces punctuation with spaces when `ignore_punctuation`
/// - Collapses whitespace and trims
pub fn normalize_text(text: &str, config: &SimilarityConfig) -> String {
    let cased = if config.case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    };

    let stripped: String = if config.ignore_accents {
        cased
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .nfc()
            .collect()
    } else {
        cased
    };

    let mut result = String::with_capacity(stripped.len());
    // Starts true so leading whitespace is dropped
    let mut prev_was_space = true;

    for c in stripped.chars() {
        let c = if config.ignore_punctuation && is_punctuation(c) {
            ' '
        } else {
            c
        };

        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    if result.ends_with(' ') {
        result.pop();
    }

    result
}

/// Anything that is neither a letter/digit nor whitespace.
/// Combining marks belong to the preceding letter and are kept.
fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !is_combining_mark(c)
}

/// Length in characters, which is what every threshold in the engine counts
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Words of at least two characters; shorter tokens carry no signal
pub(crate) fn significant_words(s: &str) -> Vec<&str> {
    s.split_whitespace().filter(|w| char_len(w) >= 2).collect()
}
