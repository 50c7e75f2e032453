//! Approximate string comparison.
//!
//! Evaluates the metrics selected in [`ComparisonOptions`], maps each raw
//! value onto a common distance scale (0.0 = identical, 1.0 = unrelated),
//! and averages them into a single tolerance score.
//!
//! ```
//! use fuzzy_compare::{
//!     ComparisonFlag, ComparisonOptions, ToleranceBand, approximately_equals_within,
//! };
//!
//! let options = ComparisonOptions::from_flags([ComparisonFlag::UseLevenshteinDistance]);
//! assert!(approximately_equals_within("kitten", "kitten", ToleranceBand::Normal, &options));
//! ```

#![deny(unsafe_code)]

pub mod engine;
pub mod normalize;

pub use engine::{
    approximately_equals, approximately_equals_named, approximately_equals_within,
    compute_tolerance,
};
pub use fuzzy_model::{
    ApproximateComparisonResult, ComparisonFlag, ComparisonOptions, FuzzyError, Metric,
    MetricContribution, ToleranceBand,
};
pub use normalize::normalized_contribution;
