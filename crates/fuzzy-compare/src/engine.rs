//! Aggregation of the selected metrics into one tolerance score.

use fuzzy_model::{
    ApproximateComparisonResult, ComparisonOptions, MetricContribution, ToleranceBand,
};
use tracing::{debug, trace, warn};

use crate::normalize::normalized_contribution;

/// Tolerance reported when no metric contributed.
const NO_EVIDENCE: f64 = 1.0;

/// Compare `source` with `target` using the metrics selected in `options`.
///
/// Both strings are lowercased first unless `options.case_sensitive` is set.
/// Each active metric contributes its normalized distance; metrics that do
/// not apply to the pair (Hamming on unequal lengths) are left out. The
/// tolerance is the mean of the contributions, or exactly 1.0 when there are
/// none.
pub fn compute_tolerance(
    source: &str,
    target: &str,
    options: &ComparisonOptions,
) -> ApproximateComparisonResult {
    let (source, target) = if options.case_sensitive {
        (source.to_string(), target.to_string())
    } else {
        (source.to_lowercase(), target.to_lowercase())
    };

    let mut contributions = Vec::new();
    for metric in options.active_metrics() {
        match normalized_contribution(metric, &source, &target) {
            Some(value) => {
                debug!(metric = metric.name(), value, "metric contribution");
                contributions.push(MetricContribution { metric, value });
            }
            None => {
                trace!(
                    metric = metric.name(),
                    source_len = source.chars().count(),
                    target_len = target.chars().count(),
                    "metric not applicable, skipped"
                );
            }
        }
    }

    let tolerance = if contributions.is_empty() {
        NO_EVIDENCE
    } else {
        contributions.iter().map(|c| c.value).sum::<f64>() / contributions.len() as f64
    };

    debug!(
        tolerance,
        metrics = contributions.len(),
        case_sensitive = options.case_sensitive,
        "computed tolerance"
    );

    ApproximateComparisonResult::new(source, target, tolerance, contributions)
}

/// Same as [`compute_tolerance`].
pub fn approximately_equals(
    source: &str,
    target: &str,
    options: &ComparisonOptions,
) -> ApproximateComparisonResult {
    compute_tolerance(source, target, options)
}

/// Whether the strings are approximately equal under `band`.
pub fn approximately_equals_within(
    source: &str,
    target: &str,
    band: ToleranceBand,
    options: &ComparisonOptions,
) -> bool {
    band.accepts(compute_tolerance(source, target, options).tolerance())
}

/// Like [`approximately_equals_within`], with the band given by name.
///
/// An unrecognized band name yields `false`.
pub fn approximately_equals_named(
    source: &str,
    target: &str,
    band: &str,
    options: &ComparisonOptions,
) -> bool {
    match band.parse::<ToleranceBand>() {
        Ok(band) => approximately_equals_within(source, target, band, options),
        Err(err) => {
            warn!(%err, "rejecting comparison with unrecognized tolerance band");
            false
        }
    }
}
