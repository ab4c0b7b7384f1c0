//! Result value objects produced by the analyzers and the reconciler.
//!
//! Everything here is an immutable snapshot built fresh per analysis call.
//! The input text itself is never retained in a report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use duosent_common::AnalyzerKind;

use crate::taxonomy::SentimentLabel;

// ============================================================================
// Distributions
// ============================================================================

/// Probability/intensity mass per canonical label.
///
/// Used in two roles with different norms: lexicon intensities need not sum
/// to 1 (independent lexical contributions), while classifier distributions
/// sum to 1.0 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelDistribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl LabelDistribution {
    /// All mass on a single label.
    pub fn concentrated(label: SentimentLabel) -> Self {
        let mut dist = Self {
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
        };
        *dist.get_mut(label) = 1.0;
        dist
    }

    /// Mass assigned to the given label.
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    fn get_mut(&mut self, label: SentimentLabel) -> &mut f64 {
        match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Neutral => &mut self.neutral,
            SentimentLabel::Negative => &mut self.negative,
        }
    }

    /// Sum of all mass.
    pub fn sum(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// Rescale so the mass sums to 1.0. A zero-mass distribution collapses
    /// to all-neutral rather than dividing by zero.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum <= f64::EPSILON {
            return Self::concentrated(SentimentLabel::Neutral);
        }
        Self {
            positive: self.positive / sum,
            neutral: self.neutral / sum,
            negative: self.negative / sum,
        }
    }

    /// Label with the maximum mass, ties broken by taxonomy order
    /// (Positive > Neutral > Negative).
    pub fn argmax(&self) -> SentimentLabel {
        let mut best = SentimentLabel::ALL[0];
        let mut best_mass = self.get(best);
        for label in &SentimentLabel::ALL[1..] {
            let mass = self.get(*label);
            if mass > best_mass {
                best = *label;
                best_mass = mass;
            }
        }
        best
    }
}

// ============================================================================
// Analyzer Results
// ============================================================================

/// Result of the lexicon/rule-based scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconResult {
    /// Compound polarity score in [-1, 1].
    pub compound: f64,
    /// Per-category intensities in [0, 1]; need not sum to exactly 1.
    pub intensities: LabelDistribution,
    /// Label derived from the compound score.
    pub label: SentimentLabel,
}

/// Result of the machine-learned classifier scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierResult {
    /// Predicted label (argmax of the distribution).
    pub label: SentimentLabel,
    /// Per-class probabilities, summing to 1.0 within tolerance. Binary
    /// model variants carry neutral pinned at 0.0.
    pub distribution: LabelDistribution,
    /// Probability of the predicted label (the distribution maximum).
    pub confidence: f64,
}

// ============================================================================
// Comparison
// ============================================================================

/// Agreement verdict between the two analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonVerdict {
    /// Both analyzers produced the same canonical label.
    Agree,
    /// The lexicon read Neutral while the classifier leaned one way with
    /// low confidence; treated as compatible rather than conflicting.
    WeakDisagreeNeutral,
    /// The analyzers genuinely conflict.
    Disagree,
}

impl std::fmt::Display for ComparisonVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Agree => write!(f, "agree"),
            Self::WeakDisagreeNeutral => write!(f, "weak_disagree_neutral"),
            Self::Disagree => write!(f, "disagree"),
        }
    }
}

/// Outcome of the comparison step.
///
/// A verdict needs both analyzer results; when one side failed, the
/// comparison is reported as incomplete rather than crashing or guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// Both sides present; verdict computed.
    Compared {
        verdict: ComparisonVerdict,
        rationale: String,
    },
    /// One or both sides missing; no verdict possible.
    Incomplete {
        missing: Vec<AnalyzerKind>,
        reason: String,
    },
}

impl ComparisonOutcome {
    /// The verdict, when the comparison completed.
    pub fn verdict(&self) -> Option<ComparisonVerdict> {
        match self {
            Self::Compared { verdict, .. } => Some(*verdict),
            Self::Incomplete { .. } => None,
        }
    }
}

/// A single analyzer's failure, preserved alongside the surviving result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerFailure {
    /// Which analyzer failed.
    pub analyzer: AnalyzerKind,
    /// Human-readable failure description.
    pub message: String,
}

// ============================================================================
// Report
// ============================================================================

/// Aggregated outcome of one analysis call.
///
/// Holds whatever each analyzer managed to produce: a scorer failure leaves
/// its side `None` and adds an entry to `failures` without touching the
/// other side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Lexicon scorer result, if it succeeded.
    pub lexicon: Option<LexiconResult>,
    /// Classifier scorer result, if it succeeded.
    pub classifier: Option<ClassifierResult>,
    /// Per-analyzer failure messages.
    pub failures: Vec<AnalyzerFailure>,
    /// Verdict or incomplete-comparison state.
    pub comparison: ComparisonOutcome,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentrated_distribution() {
        let dist = LabelDistribution::concentrated(SentimentLabel::Neutral);
        assert_eq!(dist.neutral, 1.0);
        assert_eq!(dist.positive, 0.0);
        assert_eq!(dist.negative, 0.0);
        assert!((dist.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_argmax_picks_maximum() {
        let dist = LabelDistribution {
            positive: 0.1,
            neutral: 0.2,
            negative: 0.7,
        };
        assert_eq!(dist.argmax(), SentimentLabel::Negative);
    }

    #[test]
    fn test_argmax_tie_break_follows_taxonomy_order() {
        // Exact three-way tie resolves to Positive
        let dist = LabelDistribution {
            positive: 0.5,
            neutral: 0.5,
            negative: 0.5,
        };
        assert_eq!(dist.argmax(), SentimentLabel::Positive);

        // Neutral/Negative tie resolves to Neutral
        let dist = LabelDistribution {
            positive: 0.0,
            neutral: 0.5,
            negative: 0.5,
        };
        assert_eq!(dist.argmax(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_normalized_sums_to_one() {
        let dist = LabelDistribution {
            positive: 2.0,
            neutral: 1.0,
            negative: 1.0,
        };
        let norm = dist.normalized();
        assert!((norm.sum() - 1.0).abs() < 1e-6);
        assert!((norm.positive - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_zero_mass_collapses_to_neutral() {
        let dist = LabelDistribution {
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
        };
        let norm = dist.normalized();
        assert_eq!(norm.argmax(), SentimentLabel::Neutral);
        assert!((norm.sum() - 1.0).abs() < 1e-6);
    }
}
