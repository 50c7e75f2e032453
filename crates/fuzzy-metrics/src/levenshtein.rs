//! Levenshtein edit distance and its bounds.

use std::collections::HashMap;

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `source` into `target`.
///
/// ```
/// use fuzzy_metrics::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// ```
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    rapidfuzz::distance::levenshtein::distance(source.chars(), target.chars())
}

/// Smallest edit distance the two strings could possibly have.
///
/// Every character of `source` that has no counterpart in the character
/// multiset of `target` needs its own deletion or substitution, and the same
/// holds the other way round, so the larger of the two multiset differences
/// bounds the distance from below. It is never smaller than the length
/// difference.
pub fn levenshtein_distance_lower_bound(source: &str, target: &str) -> usize {
    let mut balance: HashMap<char, isize> = HashMap::new();
    for c in source.chars() {
        *balance.entry(c).or_insert(0) += 1;
    }
    for c in target.chars() {
        *balance.entry(c).or_insert(0) -= 1;
    }

    let only_source: usize = balance
        .values()
        .copied()
        .filter(|count| *count > 0)
        .map(isize::unsigned_abs)
        .sum();
    let only_target: usize = balance
        .values()
        .copied()
        .filter(|count| *count < 0)
        .map(isize::unsigned_abs)
        .sum();

    only_source.max(only_target)
}

/// Largest edit distance the two strings could possibly have: the length of
/// the longer string.
pub fn levenshtein_distance_upper_bound(source: &str, target: &str) -> usize {
    source.chars().count().max(target.chars().count())
}

/// Edit distance with the lower bound subtracted, i.e. the number of edits
/// beyond those the character content already forces.
pub fn normalized_levenshtein_distance(source: &str, target: &str) -> usize {
    levenshtein_distance(source, target)
        .saturating_sub(levenshtein_distance_lower_bound(source, target))
}
