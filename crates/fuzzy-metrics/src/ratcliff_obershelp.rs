//! Ratcliff/Obershelp (gestalt pattern matching) similarity.

use crate::lcs::longest_common_run;

/// Total number of characters matched by repeatedly anchoring on the longest
/// common run and recursing into the unmatched text on either side of it.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(a, b)];

    while let Some((a, b)) = pending.pop() {
        let (start_a, start_b, len) = longest_common_run(a, b);
        if len == 0 {
            continue;
        }
        matched += len;
        pending.push((&a[..start_a], &b[..start_b]));
        pending.push((&a[start_a + len..], &b[start_b + len..]));
    }

    matched
}

/// Twice the number of matching characters over the combined length.
///
/// Two empty strings score 1.0. The result is not guaranteed to be
/// symmetric: when several common runs share the maximum length, the one
/// found first in `source` anchors the split.
///
/// ```
/// use fuzzy_metrics::ratcliff_obershelp_similarity;
///
/// // WIKIM + IA: 7 matching characters out of 18
/// let sim = ratcliff_obershelp_similarity("WIKIMEDIA", "WIKIMANIA");
/// assert!((sim - 14.0 / 18.0).abs() < 1e-12);
/// ```
pub fn ratcliff_obershelp_similarity(source: &str, target: &str) -> f64 {
    let a: Vec<char> = source.chars().collect();
    let b: Vec<char> = target.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    (2 * matching_characters(&a, &b)) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(ratcliff_obershelp_similarity("gestalt", "gestalt"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ratcliff_obershelp_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn recurses_on_both_sides() {
        // "XX" anchors, then "a" on the left and "d" on the right
        assert_eq!(ratcliff_obershelp_similarity("abXXcd", "aYXXZd"), 8.0 / 12.0);
        // "a" anchors first, then "b" and "c" in the remainder to its right
        assert_eq!(ratcliff_obershelp_similarity("xaybzc", "abc"), 6.0 / 9.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(ratcliff_obershelp_similarity("", ""), 1.0);
        assert_eq!(ratcliff_obershelp_similarity("", "abc"), 0.0);
    }
}
