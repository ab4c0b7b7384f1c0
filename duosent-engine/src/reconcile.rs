//! Verdict reconciliation between the two analyzers.
//!
//! This is the decision core of the engine: given one lexicon result and one
//! classifier result for the same text, produce an agreement verdict and a
//! human-readable rationale.
//!
//! The weak-disagreement rule exists because binary classifier variants
//! structurally cannot answer Neutral: whenever the lexicon finds a
//! borderline (near-zero compound) text, naive label equality would always
//! flag disagreement. The rule fires only when the lexicon side is Neutral
//! and the classifier's own confidence is below the weak-signal threshold —
//! it is deliberately not reciprocal.

use tracing::debug;

use duosent_common::{AnalyzerKind, ReconcilerConfig};

use crate::report::{
    ClassifierResult, ComparisonOutcome, ComparisonVerdict, LexiconResult,
};
use crate::taxonomy::SentimentLabel;

/// Reconciles the two analyzers' results into a comparison verdict.
///
/// Pure: the same pair of inputs always yields the same verdict and
/// rationale. The weak-signal threshold is a fixed configuration value,
/// never varied per input.
#[derive(Debug, Clone)]
pub struct SentimentReconciler {
    config: ReconcilerConfig,
}

impl Default for SentimentReconciler {
    fn default() -> Self {
        Self::new(ReconcilerConfig::default())
    }
}

impl SentimentReconciler {
    /// Create a reconciler with the given policy.
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    /// The configured weak-signal threshold.
    pub fn weak_signal_threshold(&self) -> f64 {
        self.config.weak_signal_threshold
    }

    /// Compute the verdict for a complete pair of results.
    ///
    /// 1. Equal labels → Agree.
    /// 2. Lexicon Neutral and classifier confidence strictly below the
    ///    threshold → WeakDisagreeNeutral.
    /// 3. Otherwise → Disagree.
    ///
    /// A confidence exactly at the threshold is not weak and falls through
    /// to Disagree.
    pub fn reconcile(
        &self,
        lexicon: &LexiconResult,
        classifier: &ClassifierResult,
    ) -> (ComparisonVerdict, String) {
        let threshold = self.config.weak_signal_threshold;

        let (verdict, rationale) = if lexicon.label == classifier.label {
            (
                ComparisonVerdict::Agree,
                format!("Both analyzers read the text as {}.", lexicon.label),
            )
        } else if lexicon.label == SentimentLabel::Neutral && classifier.confidence < threshold {
            (
                ComparisonVerdict::WeakDisagreeNeutral,
                format!(
                    "The lexicon reads neutral while the classifier leans {} with \
                     confidence {:.2}, below the weak-signal threshold {:.2}; treated \
                     as compatible rather than conflicting.",
                    classifier.label, classifier.confidence, threshold
                ),
            )
        } else {
            (
                ComparisonVerdict::Disagree,
                format!(
                    "The lexicon reads {} (compound {:.3}) but the classifier reads {} \
                     with confidence {:.2}.",
                    lexicon.label, lexicon.compound, classifier.label, classifier.confidence
                ),
            )
        };

        debug!(verdict = %verdict, "Reconciliation complete");
        (verdict, rationale)
    }

    /// Compare possibly-incomplete analyzer outputs.
    ///
    /// A verdict needs both sides; when one (or both) is missing the
    /// comparison is reported as incomplete, naming what is missing.
    pub fn compare(
        &self,
        lexicon: Option<&LexiconResult>,
        classifier: Option<&ClassifierResult>,
    ) -> ComparisonOutcome {
        match (lexicon, classifier) {
            (Some(lex), Some(cls)) => {
                let (verdict, rationale) = self.reconcile(lex, cls);
                ComparisonOutcome::Compared { verdict, rationale }
            }
            (None, Some(_)) => incomplete(vec![AnalyzerKind::Lexicon]),
            (Some(_), None) => incomplete(vec![AnalyzerKind::Classifier]),
            (None, None) => incomplete(vec![AnalyzerKind::Lexicon, AnalyzerKind::Classifier]),
        }
    }
}

fn incomplete(missing: Vec<AnalyzerKind>) -> ComparisonOutcome {
    let names: Vec<String> = missing.iter().map(|a| a.to_string()).collect();
    let reason = format!(
        "No verdict: missing result from the {} analyzer(s).",
        names.join(" and ")
    );
    ComparisonOutcome::Incomplete { missing, reason }
}
