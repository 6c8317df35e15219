//! Edit distance

use super::normalization::char_len;

/// Length gap (as a share of the longer string, in tenths) beyond which the
/// full dynamic program is skipped.
const LENGTH_GAP_TENTHS: usize = 3;

/// Share of the longer length (in tenths) returned as the distance when the
/// length gap shortcut fires.
const SHORTCUT_DISTANCE_TENTHS: usize = 7;

/// Levenshtein distance over chars.
///
/// When the lengths differ by more than 30% of the longer length this returns
/// `ceil(0.7 * longer)` without computing the distance. That value is an
/// approximation, not an edit distance: it can be smaller than the true
/// distance. Callers that need exact distances should not rely on this
/// regime. Otherwise the exact distance comes from [`strsim::levenshtein`].
pub fn optimized_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_len = char_len(a);
    let b_len = char_len(b);
    if a_len == 0 || b_len == 0 {
        return a_len.max(b_len);
    }

    let longer = a_len.max(b_len);
    let gap = a_len.abs_diff(b_len);
    if gap * 10 > longer * LENGTH_GAP_TENTHS {
        return (longer * SHORTCUT_DISTANCE_TENTHS).div_ceil(10);
    }

    strsim::levenshtein(a, b)
}

/// `1 - distance / max_len`, in `0.0..=1.0`. Two empty strings are identical.
pub(crate) fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let max_len = char_len(a).max(char_len(b));
    if max_len == 0 {
        return 1.0;
    }
    let distance = optimized_levenshtein(a, b);
    (1.0 - distance as f64 / max_len as f64).max(0.0)
}
