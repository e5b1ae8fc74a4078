use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::MetricValue;
use crate::select::MetricError;

pub type MetricFn = fn(&str, &str) -> MetricValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    Levenshtein,
    Hamming,
    Additions,
    DamerauLevenshtein,
    JaroWinkler,
    Lcs,
    LineDiff,
    WordDiff,
}

/// Range of values a metric can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricSign {
    /// Integer distance, never negative.
    NonNegative,
    /// Integer difference `b - a`, may be negative.
    Signed,
    /// Fraction in `[0, 1]`.
    Unit,
}

impl MetricSign {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricSign::NonNegative => ">=0",
            MetricSign::Signed => "signed",
            MetricSign::Unit => "[0,1]",
        }
    }
}

impl MetricKind {
    pub const DEFAULT: MetricKind = MetricKind::Levenshtein;

    pub const ALL: [MetricKind; 8] = [
        MetricKind::Levenshtein,
        MetricKind::Hamming,
        MetricKind::Additions,
        MetricKind::DamerauLevenshtein,
        MetricKind::JaroWinkler,
        MetricKind::Lcs,
        MetricKind::LineDiff,
        MetricKind::WordDiff,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            MetricKind::Levenshtein => "levenshtein",
            MetricKind::Hamming => "hamming",
            MetricKind::Additions => "additions",
            MetricKind::DamerauLevenshtein => "damerau-levenshtein",
            MetricKind::JaroWinkler => "jaro-winkler",
            MetricKind::Lcs => "lcs",
            MetricKind::LineDiff => "line-diff",
            MetricKind::WordDiff => "word-diff",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MetricKind::Levenshtein => "insert/delete/substitute edit distance",
            MetricKind::Hamming => "differing positions after space-padding the shorter side",
            MetricKind::Additions => "characters added (negative when removed)",
            MetricKind::DamerauLevenshtein => "edit distance counting adjacent swaps as one edit",
            MetricKind::JaroWinkler => "1 - Jaro-Winkler similarity",
            MetricKind::Lcs => "longer length minus longest common subsequence",
            MetricKind::LineDiff => "change in newline-delimited segment count",
            MetricKind::WordDiff => "change in whitespace-separated word count",
        }
    }

    pub fn sign(self) -> MetricSign {
        match self {
            MetricKind::Additions | MetricKind::LineDiff | MetricKind::WordDiff => {
                MetricSign::Signed
            }
            MetricKind::JaroWinkler => MetricSign::Unit,
            MetricKind::Levenshtein
            | MetricKind::Hamming
            | MetricKind::DamerauLevenshtein
            | MetricKind::Lcs => MetricSign::NonNegative,
        }
    }

    pub fn function(self) -> MetricFn {
        match self {
            MetricKind::Levenshtein => levenshtein_value,
            MetricKind::Hamming => hamming_value,
            MetricKind::Additions => additions_value,
            MetricKind::DamerauLevenshtein => damerau_levenshtein_value,
            MetricKind::JaroWinkler => jaro_winkler_value,
            MetricKind::Lcs => lcs_value,
            MetricKind::LineDiff => line_diff_value,
            MetricKind::WordDiff => word_diff_value,
        }
    }

    pub fn evaluate(self, a: &str, b: &str) -> MetricValue {
        (self.function())(a, b)
    }

    /// Additive identity in this metric's value domain.
    pub fn zero(self) -> MetricValue {
        match self.sign() {
            MetricSign::Unit => MetricValue::Ratio(0.0),
            MetricSign::NonNegative | MetricSign::Signed => MetricValue::Count(0),
        }
    }

    pub fn canonical_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.canonical_name()).collect()
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match key.as_str() {
            "levenshtein" => MetricKind::Levenshtein,
            "hamming" => MetricKind::Hamming,
            "additions" => MetricKind::Additions,
            "damerau-levenshtein" | "damerau" => MetricKind::DamerauLevenshtein,
            "jaro-winkler" | "jaro" => MetricKind::JaroWinkler,
            "lcs" => MetricKind::Lcs,
            "line-diff" | "lines" => MetricKind::LineDiff,
            "word-diff" | "words" => MetricKind::WordDiff,
            _ => {
                return Err(MetricError::Unknown {
                    name: s.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

fn levenshtein_value(a: &str, b: &str) -> MetricValue {
    super::levenshtein(a, b).into()
}

fn hamming_value(a: &str, b: &str) -> MetricValue {
    super::hamming(a, b).into()
}

fn additions_value(a: &str, b: &str) -> MetricValue {
    super::additions(a, b).into()
}

fn damerau_levenshtein_value(a: &str, b: &str) -> MetricValue {
    super::damerau_levenshtein(a, b).into()
}

fn jaro_winkler_value(a: &str, b: &str) -> MetricValue {
    super::jaro_winkler_distance(a, b).into()
}

fn lcs_value(a: &str, b: &str) -> MetricValue {
    super::lcs_distance(a, b).into()
}

fn line_diff_value(a: &str, b: &str) -> MetricValue {
    super::line_count_diff(a, b).into()
}

fn word_diff_value(a: &str, b: &str) -> MetricValue {
    super::word_count_diff(a, b).into()
}

#[cfg(test)]
#[path = "../tests/metrics/kind_tests.rs"]
mod tests;
