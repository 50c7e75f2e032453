//! String distance and similarity metrics.
//!
//! Every function compares two strings character by character (Unicode
//! scalar values) and is total: empty inputs produce the limiting value of
//! the metric instead of an error. Case folding is the caller's concern.

#![deny(unsafe_code)]

pub mod hamming;
pub mod jaccard;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod overlap;
pub mod ratcliff_obershelp;
pub mod sorensen_dice;

pub use hamming::hamming_distance;
pub use jaccard::{jaccard_distance, jaccard_index};
pub use jaro::{jaro_distance, jaro_similarity, jaro_winkler_distance, jaro_winkler_similarity};
pub use lcs::{longest_common_subsequence, longest_common_substring};
pub use levenshtein::{
    levenshtein_distance, levenshtein_distance_lower_bound, levenshtein_distance_upper_bound,
    normalized_levenshtein_distance,
};
pub use overlap::overlap_coefficient;
pub use ratcliff_obershelp::ratcliff_obershelp_similarity;
pub use sorensen_dice::{sorensen_dice_distance, sorensen_dice_index};
