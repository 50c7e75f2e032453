//! Tests for fuzzy-model types.

use fuzzy_model::{
    ApproximateComparisonResult, ComparisonFlag, ComparisonOptions, FuzzyError, Metric,
    MetricContribution, ToleranceBand,
};

#[test]
fn options_parse_from_flag_names() {
    let options =
        ComparisonOptions::parse_flags(&["UseJaroDistance", "CaseSensitive", "UseHammingDistance"])
            .expect("parse flags");
    assert!(options.case_sensitive);
    assert_eq!(
        options.active_metrics(),
        vec![Metric::Hamming, Metric::Jaro]
    );
}

#[test]
fn options_parse_stops_at_first_unknown_name() {
    let err = ComparisonOptions::parse_flags(&["UseJaroDistance", "UseSoundex"]).unwrap_err();
    assert_eq!(err, FuzzyError::UnknownFlag("UseSoundex".to_string()));
    assert_eq!(err.to_string(), "unknown comparison option: UseSoundex");
}

#[test]
fn empty_options_are_valid() {
    let options = ComparisonOptions::default();
    assert!(options.is_empty());
    assert!(!options.case_sensitive);
    assert!(options.active_metrics().is_empty());
}

#[test]
fn all_options_drop_plain_levenshtein() {
    let active = ComparisonOptions::all().active_metrics();
    assert_eq!(active.len(), Metric::ALL.len() - 1);
    assert!(!active.contains(&Metric::Levenshtein));
    assert!(active.contains(&Metric::NormalizedLevenshtein));
}

#[test]
fn options_serialize_with_snake_case_metrics() {
    let options = ComparisonOptions::new()
        .with_metric(Metric::JaroWinkler)
        .with_metric(Metric::SorensenDice);
    let json = serde_json::to_string(&options).expect("serialize options");
    assert_eq!(
        json,
        r#"{"case_sensitive":false,"metrics":["jaro_winkler","sorensen_dice"]}"#
    );
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ComparisonOptions =
        serde_json::from_str(r#"{"metrics":["levenshtein"]}"#).expect("deserialize options");
    assert!(!options.case_sensitive);
    assert!(options.contains(Metric::Levenshtein));
}

#[test]
fn flags_serialize_by_option_name() {
    let json = serde_json::to_string(&[
        ComparisonFlag::CaseSensitive,
        ComparisonFlag::UseOverlapCoefficient,
    ])
    .expect("serialize flags");
    assert_eq!(json, r#"["CaseSensitive","UseOverlapCoefficient"]"#);
}

#[test]
fn band_cutoffs() {
    let cutoffs: Vec<f64> = ToleranceBand::ALL.iter().map(|b| b.cutoff()).collect();
    assert_eq!(cutoffs, vec![0.25, 0.5, 0.75, 0.6]);
}

#[test]
fn result_round_trips_through_json() {
    let result = ApproximateComparisonResult::new(
        "kitten".to_string(),
        "sitting".to_string(),
        0.5,
        vec![MetricContribution {
            metric: Metric::Jaccard,
            value: 0.5,
        }],
    );
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: ApproximateComparisonResult =
        serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
    assert_eq!(round.source(), "kitten");
}
