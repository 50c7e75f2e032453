//! Per-metric normalization onto the shared distance scale.
//!
//! | Metric | Contribution |
//! |---|---|
//! | Hamming | `distance / len(target)`, equal lengths only |
//! | Jaccard, Jaro, Jaro-Winkler, Sørensen-Dice | the distance as-is |
//! | Levenshtein | `distance / upper_bound` |
//! | Normalized Levenshtein | `(distance - lower) / (max(len) - lower)` |
//! | LCS, longest common substring | `1 - len(match) / min(len)` |
//! | Overlap, Ratcliff/Obershelp | `1 - similarity` |
//!
//! A zero denominator only occurs when a string is empty or the strings
//! share nothing alignable. It maps to 0.0 when both strings are empty and
//! to 1.0 otherwise.

use fuzzy_metrics::{
    hamming_distance, jaccard_distance, jaro_distance, jaro_winkler_distance,
    levenshtein_distance, levenshtein_distance_lower_bound, levenshtein_distance_upper_bound,
    longest_common_subsequence, longest_common_substring, normalized_levenshtein_distance,
    overlap_coefficient, ratcliff_obershelp_similarity, sorensen_dice_distance,
};
use fuzzy_model::Metric;

struct Lengths {
    source: usize,
    target: usize,
}

impl Lengths {
    fn of(source: &str, target: &str) -> Self {
        Self {
            source: source.chars().count(),
            target: target.chars().count(),
        }
    }

    fn both_empty(&self) -> bool {
        self.source == 0 && self.target == 0
    }

    fn shorter(&self) -> usize {
        self.source.min(self.target)
    }

    fn longer(&self) -> usize {
        self.source.max(self.target)
    }

    /// Distance ratio. A zero denominator means identical when both strings
    /// are empty and unrelated otherwise.
    fn distance(&self, numerator: usize, denominator: usize) -> f64 {
        if denominator == 0 {
            return if self.both_empty() { 0.0 } else { 1.0 };
        }
        numerator as f64 / denominator as f64
    }

    /// Distance derived from a matched length: `1 - matched / min(len)`.
    fn unmatched(&self, matched: usize) -> f64 {
        if self.shorter() == 0 {
            return if self.both_empty() { 0.0 } else { 1.0 };
        }
        1.0 - matched as f64 / self.shorter() as f64
    }
}

/// Normalized contribution of one metric, oriented as a distance.
///
/// Returns `None` when the metric does not apply to the pair, which only
/// happens for Hamming on strings of different lengths. The strings are used
/// exactly as given; case folding happens before this is called.
pub fn normalized_contribution(metric: Metric, source: &str, target: &str) -> Option<f64> {
    let lengths = Lengths::of(source, target);

    let value = match metric {
        Metric::Hamming => {
            let distance = hamming_distance(source, target)?;
            lengths.distance(distance, lengths.target)
        }
        Metric::Jaccard => jaccard_distance(source, target),
        Metric::Jaro => jaro_distance(source, target),
        Metric::JaroWinkler => jaro_winkler_distance(source, target),
        Metric::Levenshtein => lengths.distance(
            levenshtein_distance(source, target),
            levenshtein_distance_upper_bound(source, target),
        ),
        Metric::NormalizedLevenshtein => {
            let lower = levenshtein_distance_lower_bound(source, target);
            lengths.distance(
                normalized_levenshtein_distance(source, target),
                lengths.longer().saturating_sub(lower),
            )
        }
        Metric::LongestCommonSubsequence => {
            let matched = longest_common_subsequence(source, target).chars().count();
            lengths.unmatched(matched)
        }
        Metric::LongestCommonSubstring => {
            let matched = longest_common_substring(source, target).chars().count();
            lengths.unmatched(matched)
        }
        Metric::SorensenDice => sorensen_dice_distance(source, target),
        Metric::OverlapCoefficient => 1.0 - overlap_coefficient(source, target),
        Metric::RatcliffObershelp => 1.0 - ratcliff_obershelp_similarity(source, target),
    };

    Some(value)
}
