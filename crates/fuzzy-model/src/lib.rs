#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod result;
pub mod tolerance;

pub use error::{FuzzyError, Result};
pub use options::{ComparisonFlag, ComparisonOptions, Metric};
pub use result::{ApproximateComparisonResult, MetricContribution};
pub use tolerance::ToleranceBand;
