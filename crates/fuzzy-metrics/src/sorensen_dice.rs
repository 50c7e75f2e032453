//! Sørensen-Dice coefficient over character bigrams.

use std::collections::HashMap;

fn bigrams(s: &str) -> HashMap<(char, char), usize> {
    let chars: Vec<char> = s.chars().collect();
    let mut counts = HashMap::new();
    for pair in chars.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// Twice the number of shared bigrams over the total number of bigrams.
///
/// Bigrams are counted as a multiset, so a repeated bigram matches at most as
/// many times as it occurs in both strings. Strings too short to contain a
/// bigram score 1.0 when equal and 0.0 otherwise.
pub fn sorensen_dice_index(source: &str, target: &str) -> f64 {
    let source_bigrams = bigrams(source);
    let target_bigrams = bigrams(target);

    let total: usize =
        source_bigrams.values().sum::<usize>() + target_bigrams.values().sum::<usize>();
    if total == 0 {
        return if source == target { 1.0 } else { 0.0 };
    }

    let shared: usize = source_bigrams
        .iter()
        .filter_map(|(bigram, count)| {
            target_bigrams
                .get(bigram)
                .map(|other| (*count).min(*other))
        })
        .sum();

    (2 * shared) as f64 / total as f64
}

/// `1 - sorensen_dice_index`, in [0.0, 1.0].
pub fn sorensen_dice_distance(source: &str, target: &str) -> f64 {
    1.0 - sorensen_dice_index(source, target)
}
