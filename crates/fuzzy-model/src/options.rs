//! Comparison options: which metrics to evaluate and how to fold case.
//!
//! Options are read once at the start of a comparison. The selection is a
//! set of [`Metric`] values rather than a bit mask, so any combination is
//! representable and iteration order is fixed by the enum declaration.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// A string metric that can take part in an aggregated comparison.
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Hamming,
    Jaccard,
    Jaro,
    JaroWinkler,
    Levenshtein,
    NormalizedLevenshtein,
    LongestCommonSubsequence,
    LongestCommonSubstring,
    SorensenDice,
    OverlapCoefficient,
    RatcliffObershelp,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::Hamming,
        Metric::Jaccard,
        Metric::Jaro,
        Metric::JaroWinkler,
        Metric::Levenshtein,
        Metric::NormalizedLevenshtein,
        Metric::LongestCommonSubsequence,
        Metric::LongestCommonSubstring,
        Metric::SorensenDice,
        Metric::OverlapCoefficient,
        Metric::RatcliffObershelp,
    ];

    /// Stable snake_case identifier, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::Jaro => "jaro",
            Self::JaroWinkler => "jaro_winkler",
            Self::Levenshtein => "levenshtein",
            Self::NormalizedLevenshtein => "normalized_levenshtein",
            Self::LongestCommonSubsequence => "longest_common_subsequence",
            Self::LongestCommonSubstring => "longest_common_substring",
            Self::SorensenDice => "sorensen_dice",
            Self::OverlapCoefficient => "overlap_coefficient",
            Self::RatcliffObershelp => "ratcliff_obershelp",
        }
    }

    /// True when the raw value grows with similarity and must be inverted
    /// before it can be averaged with the distance metrics.
    pub fn is_similarity(self) -> bool {
        matches!(
            self,
            Self::LongestCommonSubsequence
                | Self::LongestCommonSubstring
                | Self::OverlapCoefficient
                | Self::RatcliffObershelp
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One recognized comparison option.
///
/// Flags combine freely. `CaseSensitive` disables lowercase folding; every
/// other flag enables one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonFlag {
    CaseSensitive,
    UseHammingDistance,
    UseJaccardDistance,
    UseJaroDistance,
    UseJaroWinklerDistance,
    UseLevenshteinDistance,
    UseNormalizedLevenshteinDistance,
    UseLongestCommonSubsequence,
    UseLongestCommonSubstring,
    UseSorensenDiceDistance,
    UseOverlapCoefficient,
    UseRatcliffObershelpSimilarity,
}

impl ComparisonFlag {
    pub const ALL: [ComparisonFlag; 12] = [
        ComparisonFlag::CaseSensitive,
        ComparisonFlag::UseHammingDistance,
        ComparisonFlag::UseJaccardDistance,
        ComparisonFlag::UseJaroDistance,
        ComparisonFlag::UseJaroWinklerDistance,
        ComparisonFlag::UseLevenshteinDistance,
        ComparisonFlag::UseNormalizedLevenshteinDistance,
        ComparisonFlag::UseLongestCommonSubsequence,
        ComparisonFlag::UseLongestCommonSubstring,
        ComparisonFlag::UseSorensenDiceDistance,
        ComparisonFlag::UseOverlapCoefficient,
        ComparisonFlag::UseRatcliffObershelpSimilarity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CaseSensitive => "CaseSensitive",
            Self::UseHammingDistance => "UseHammingDistance",
            Self::UseJaccardDistance => "UseJaccardDistance",
            Self::UseJaroDistance => "UseJaroDistance",
            Self::UseJaroWinklerDistance => "UseJaroWinklerDistance",
            Self::UseLevenshteinDistance => "UseLevenshteinDistance",
            Self::UseNormalizedLevenshteinDistance => "UseNormalizedLevenshteinDistance",
            Self::UseLongestCommonSubsequence => "UseLongestCommonSubsequence",
            Self::UseLongestCommonSubstring => "UseLongestCommonSubstring",
            Self::UseSorensenDiceDistance => "UseSorensenDiceDistance",
            Self::UseOverlapCoefficient => "UseOverlapCoefficient",
            Self::UseRatcliffObershelpSimilarity => "UseRatcliffObershelpSimilarity",
        }
    }

    /// The metric this flag enables, or `None` for `CaseSensitive`.
    pub fn metric(self) -> Option<Metric> {
        match self {
            Self::CaseSensitive => None,
            Self::UseHammingDistance => Some(Metric::Hamming),
            Self::UseJaccardDistance => Some(Metric::Jaccard),
            Self::UseJaroDistance => Some(Metric::Jaro),
            Self::UseJaroWinklerDistance => Some(Metric::JaroWinkler),
            Self::UseLevenshteinDistance => Some(Metric::Levenshtein),
            Self::UseNormalizedLevenshteinDistance => Some(Metric::NormalizedLevenshtein),
            Self::UseLongestCommonSubsequence => Some(Metric::LongestCommonSubsequence),
            Self::UseLongestCommonSubstring => Some(Metric::LongestCommonSubstring),
            Self::UseSorensenDiceDistance => Some(Metric::SorensenDice),
            Self::UseOverlapCoefficient => Some(Metric::OverlapCoefficient),
            Self::UseRatcliffObershelpSimilarity => Some(Metric::RatcliffObershelp),
        }
    }
}

impl fmt::Display for ComparisonFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComparisonFlag {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FuzzyError::UnknownFlag(trimmed.to_string()))
    }
}

/// Selection of metrics plus case handling for one comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOptions {
    /// Compare characters exactly instead of folding both strings to lowercase.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Enabled metrics. Empty is valid and yields a tolerance of 1.0.
    #[serde(default)]
    pub metrics: BTreeSet<Metric>,
}

impl ComparisonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every metric enabled, case-insensitive.
    pub fn all() -> Self {
        Self::new().with_metrics(Metric::ALL)
    }

    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = ComparisonFlag>,
    {
        flags.into_iter().collect()
    }

    /// Build options from option names such as `"UseJaroDistance"`.
    pub fn parse_flags(names: &[&str]) -> Result<Self> {
        let mut options = Self::new();
        for name in names {
            let flag: ComparisonFlag = name.parse()?;
            options.extend([flag]);
        }
        Ok(options)
    }

    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.insert(metric);
        self
    }

    #[must_use]
    pub fn with_metrics<I>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = Metric>,
    {
        self.metrics.extend(metrics);
        self
    }

    #[must_use]
    pub fn case_sensitive(mut self, enable: bool) -> Self {
        self.case_sensitive = enable;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    /// Metrics that will actually be evaluated, in evaluation order.
    ///
    /// Normalized Levenshtein takes precedence: when it is selected the plain
    /// Levenshtein metric is dropped.
    pub fn active_metrics(&self) -> Vec<Metric> {
        let normalized = self.contains(Metric::NormalizedLevenshtein);
        self.metrics
            .iter()
            .copied()
            .filter(|metric| !(normalized && *metric == Metric::Levenshtein))
            .collect()
    }
}

impl FromIterator<ComparisonFlag> for ComparisonOptions {
    fn from_iter<I: IntoIterator<Item = ComparisonFlag>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl Extend<ComparisonFlag> for ComparisonOptions {
    fn extend<I: IntoIterator<Item = ComparisonFlag>>(&mut self, iter: I) {
        for flag in iter {
            match flag.metric() {
                Some(metric) => {
                    self.metrics.insert(metric);
                }
                None => self.case_sensitive = true,
            }
        }
    }
}
