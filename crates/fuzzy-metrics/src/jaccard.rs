//! Jaccard index and distance over character sets.

use std::collections::HashSet;

/// Size of the intersection over the size of the union of the distinct
/// characters of both strings.
///
/// Two empty strings have an index of 1.0.
pub fn jaccard_index(source: &str, target: &str) -> f64 {
    let source_chars: HashSet<char> = source.chars().collect();
    let target_chars: HashSet<char> = target.chars().collect();

    let union = source_chars.union(&target_chars).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = source_chars.intersection(&target_chars).count();

    intersection as f64 / union as f64
}

/// `1 - jaccard_index`, in [0.0, 1.0].
pub fn jaccard_distance(source: &str, target: &str) -> f64 {
    1.0 - jaccard_index(source, target)
}
