//! Best-of-metric string similarity.
//!
//! Every metric is symmetric and reflexive and yields a value in `[0, 1]`
//! where `1.0` means identical. [`best_score`] short-circuits exact matches
//! and otherwise keeps the highest of the three metrics.

use rapidfuzz::distance::{hamming, jaro_winkler, levenshtein};
use serde::Serialize;
use std::fmt;

/// Which metric produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Normalized strings were identical
    Direct,
    JaroWinkler,
    Levenshtein,
    Hamming,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Direct => "direct",
            Metric::JaroWinkler => "jaro-winkler",
            Metric::Levenshtein => "levenshtein",
            Metric::Hamming => "hamming",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winning similarity value and the metric that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub value: f64,
    pub metric: Metric,
}

impl Score {
    pub fn new(value: f64, metric: Metric) -> Self {
        Self { value, metric }
    }
}

/// Jaro-Winkler similarity, prefix weight 0.1
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    jaro_winkler::normalized_similarity(a.chars(), b.chars())
}

/// Levenshtein similarity: `1 - distance / max(len)`
pub fn levenshtein(a: &str, b: &str) -> f64 {
    levenshtein::normalized_similarity(a.chars(), b.chars())
}

/// Hamming similarity with the shorter string padded, so every position of
/// the longer string past the end of the shorter one counts as a mismatch.
pub fn hamming(a: &str, b: &str) -> f64 {
    let args = hamming::Args::default().pad(true);
    hamming::normalized_similarity_with_args(a.chars(), b.chars(), &args)
}

/// Pick the winning metric. On ties the priority is
/// Jaro-Winkler, then Levenshtein, then Hamming.
fn pick_best(jw: f64, lev: f64, ham: f64) -> Score {
    let mut best = Score::new(jw, Metric::JaroWinkler);
    if lev > best.value {
        best = Score::new(lev, Metric::Levenshtein);
    }
    if ham > best.value {
        best = Score::new(ham, Metric::Hamming);
    }
    best
}

/// Score two normalized strings with every metric and keep the best.
pub fn best_score(a: &str, b: &str) -> Score {
    if a == b {
        return Score::new(1.0, Metric::Direct);
    }

    let jw = jaro_winkler(a, b);
    let lev = levenshtein(a, b);
    let ham = hamming(a, b);

    let best = pick_best(jw, lev, ham);
    tracing::trace!(
        jaro_winkler = jw,
        levenshtein = lev,
        hamming = ham,
        metric = %best.metric,
        value = best.value,
        "scored pair"
    );
    best
}
