//! Jaro and Jaro-Winkler similarity and distance.
//!
//! Similarities come from `rapidfuzz`: characters match when equal and
//! within `max(len) / 2 - 1` positions of each other, half the out-of-order
//! matches count as transpositions, and
//! `jaro = (m / |s| + m / |t| + (m - t) / m) / 3`.
//!
//! Jaro-Winkler adds `prefix * 0.1 * (1 - jaro)` for a common prefix of up to
//! four characters, once the Jaro similarity exceeds 0.7.
//!
//! The distances are `1 - similarity`.

use rapidfuzz::distance::{jaro, jaro_winkler};

/// Limiting value for inputs where at least one string is empty.
fn empty_similarity(source: &str, target: &str) -> Option<f64> {
    match (source.is_empty(), target.is_empty()) {
        (true, true) => Some(1.0),
        (true, false) | (false, true) => Some(0.0),
        (false, false) => None,
    }
}

pub fn jaro_similarity(source: &str, target: &str) -> f64 {
    if let Some(similarity) = empty_similarity(source, target) {
        return similarity;
    }
    if source == target {
        return 1.0;
    }
    jaro::similarity(source.chars(), target.chars()).clamp(0.0, 1.0)
}

pub fn jaro_distance(source: &str, target: &str) -> f64 {
    1.0 - jaro_similarity(source, target)
}

pub fn jaro_winkler_similarity(source: &str, target: &str) -> f64 {
    if let Some(similarity) = empty_similarity(source, target) {
        return similarity;
    }
    if source == target {
        return 1.0;
    }
    jaro_winkler::similarity(source.chars(), target.chars()).clamp(0.0, 1.0)
}

pub fn jaro_winkler_distance(source: &str, target: &str) -> f64 {
    1.0 - jaro_winkler_similarity(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn jaro_reference_values() {
        assert_close(jaro_similarity("MARTHA", "MARHTA"), 0.944);
        assert_close(jaro_similarity("DWAYNE", "DUANE"), 0.822);
        assert_close(jaro_similarity("DIXON", "DICKSONX"), 0.767);
    }

    #[test]
    fn jaro_winkler_reference_values() {
        assert_close(jaro_winkler_similarity("MARTHA", "MARHTA"), 0.961);
        assert_close(jaro_winkler_similarity("DWAYNE", "DUANE"), 0.840);
        assert_close(jaro_winkler_similarity("DIXON", "DICKSONX"), 0.813);
    }

    #[test]
    fn reference_pairs_are_symmetric() {
        for (a, b) in [("MARTHA", "MARHTA"), ("DWAYNE", "DUANE"), ("DIXON", "DICKSONX")] {
            assert_close(jaro_similarity(a, b), jaro_similarity(b, a));
            assert_close(jaro_winkler_similarity(a, b), jaro_winkler_similarity(b, a));
        }
    }

    #[test]
    fn winkler_never_lowers_jaro() {
        for (a, b) in [("user_id", "user_name"), ("prefix", "preface"), ("abc", "xyz")] {
            assert!(jaro_winkler_similarity(a, b) >= jaro_similarity(a, b));
        }
    }

    #[test]
    fn distance_is_complement() {
        assert_close(jaro_distance("MARTHA", "MARHTA"), 0.056);
        assert_eq!(jaro_distance("same", "same"), 0.0);
        assert_eq!(jaro_winkler_distance("same", "same"), 0.0);
    }

    #[test]
    fn no_common_characters() {
        assert_eq!(jaro_distance("abc", "xyz"), 1.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(jaro_distance("", ""), 0.0);
        assert_eq!(jaro_distance("", "abc"), 1.0);
        assert_eq!(jaro_winkler_distance("abc", ""), 1.0);
    }
}
