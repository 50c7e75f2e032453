/// Number of positions at which two equal-length strings differ.
///
/// Returns `None` when the strings have a different number of characters,
/// since the distance is undefined there.
///
/// ```
/// use fuzzy_metrics::hamming_distance;
///
/// assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
/// assert_eq!(hamming_distance("abc", "abcd"), None);
/// ```
pub fn hamming_distance(source: &str, target: &str) -> Option<usize> {
    if source.chars().count() != target.chars().count() {
        return None;
    }
    Some(
        source
            .chars()
            .zip(target.chars())
            .filter(|(a, b)| a != b)
            .count(),
    )
}
