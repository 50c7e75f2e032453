use std::collections::HashSet;

/// Overlap (Szymkiewicz-Simpson) coefficient of the distinct characters:
/// shared characters divided by the size of the smaller set.
///
/// Two empty strings score 1.0; an empty string against a non-empty one
/// scores 0.0.
pub fn overlap_coefficient(source: &str, target: &str) -> f64 {
    let source_chars: HashSet<char> = source.chars().collect();
    let target_chars: HashSet<char> = target.chars().collect();

    let smaller = source_chars.len().min(target_chars.len());
    if smaller == 0 {
        return if source_chars.len() == target_chars.len() {
            1.0
        } else {
            0.0
        };
    }
    let intersection = source_chars.intersection(&target_chars).count();

    intersection as f64 / smaller as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_scores_one() {
        assert_eq!(overlap_coefficient("abc", "abcdef"), 1.0);
        assert_eq!(overlap_coefficient("abcdef", "cab"), 1.0);
    }

    #[test]
    fn partial_overlap() {
        // {a,b,c,d} vs {c,d,e,f}: 2 shared, smaller set has 4
        assert_eq!(overlap_coefficient("abcd", "cdef"), 0.5);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(overlap_coefficient("", ""), 1.0);
        assert_eq!(overlap_coefficient("", "a"), 0.0);
        assert_eq!(overlap_coefficient("a", ""), 0.0);
    }
}
