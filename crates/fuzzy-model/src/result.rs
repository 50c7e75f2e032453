//! Outcome of a single approximate comparison.

use serde::{Deserialize, Serialize};

use crate::options::Metric;

/// Normalized score one metric contributed to the average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricContribution {
    pub metric: Metric,
    /// Normalized value, oriented as a distance (0.0 = identical).
    pub value: f64,
}

/// Result of comparing a source string with a target string.
///
/// Holds the strings as they were compared (lowercased unless the comparison
/// was case-sensitive) and the mean of the normalized metric scores. The
/// tolerance is exactly 1.0 when no metric was evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproximateComparisonResult {
    source: String,
    target: String,
    tolerance: f64,
    contributions: Vec<MetricContribution>,
}

impl ApproximateComparisonResult {
    pub fn new(
        source: String,
        target: String,
        tolerance: f64,
        contributions: Vec<MetricContribution>,
    ) -> Self {
        Self {
            source,
            target,
            tolerance,
            contributions,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Per-metric scores that were averaged, in evaluation order.
    pub fn contributions(&self) -> &[MetricContribution] {
        &self.contributions
    }

    pub fn contribution(&self, metric: Metric) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.metric == metric)
            .map(|c| c.value)
    }

    /// Human-readable breakdown of the contributions.
    pub fn explain(&self) -> String {
        self.contributions
            .iter()
            .map(|c| format!("{}: {:.0}%", c.metric, c.value * 100.0))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
