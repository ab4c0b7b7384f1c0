//! Lexicon scorer: wraps the rule engine and derives the canonical label.

use std::sync::Arc;
use tracing::debug;

use duosent_common::Result;

use crate::report::{LabelDistribution, LexiconResult};
use crate::taxonomy::SentimentLabel;

use super::engine::LexiconEngine;

/// Compound thresholds for label derivation. Boundary values belong to
/// their non-neutral class.
const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Derive the canonical label from a compound score.
///
/// compound ≥ 0.05 → Positive; compound ≤ -0.05 → Negative; else Neutral.
pub fn label_from_compound(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Lexicon/rule-based sentiment scorer.
///
/// Holds a shared read-only engine handle; scoring is a pure lookup pass,
/// idempotent across calls. Input is never truncated — lexicon scoring is
/// O(tokens) and stable for arbitrary length.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    engine: Arc<LexiconEngine>,
}

impl LexiconScorer {
    /// Create a scorer over a shared engine handle.
    pub fn new(engine: Arc<LexiconEngine>) -> Self {
        Self { engine }
    }

    /// Score a text.
    ///
    /// Empty or whitespace-only input yields a neutral result rather than
    /// reaching the engine.
    pub fn score(&self, text: &str) -> Result<LexiconResult> {
        if text.trim().is_empty() {
            debug!("Empty input, returning neutral lexicon result");
            return Ok(neutral_result());
        }

        let scores = self.engine.polarity(text);
        let label = label_from_compound(scores.compound);

        debug!(
            compound = scores.compound,
            label = %label,
            "Lexicon scoring complete"
        );

        Ok(LexiconResult {
            compound: scores.compound,
            intensities: scores.intensities,
            label,
        })
    }
}

/// Neutral result used by the empty-input guard.
fn neutral_result() -> LexiconResult {
    LexiconResult {
        compound: 0.0,
        intensities: LabelDistribution::concentrated(SentimentLabel::Neutral),
        label: SentimentLabel::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::new(Arc::new(LexiconEngine::new()))
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(label_from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(label_from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(label_from_compound(0.049), SentimentLabel::Neutral);
        assert_eq!(label_from_compound(-0.049), SentimentLabel::Neutral);
        assert_eq!(label_from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(label_from_compound(1.0), SentimentLabel::Positive);
        assert_eq!(label_from_compound(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_empty_input_guard() {
        let result = scorer().score("").unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.compound, 0.0);
        assert_eq!(result.intensities.neutral, 1.0);
    }

    #[test]
    fn test_whitespace_only_input_guard() {
        let result = scorer().score("   \t\n  ").unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.compound, 0.0);
    }

    #[test]
    fn test_positive_text_labeled_positive() {
        let result = scorer()
            .score("I absolutely love this, it exceeded all my expectations!")
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.compound >= 0.05);
    }

    #[test]
    fn test_negative_text_labeled_negative() {
        let result = scorer()
            .score("This is the worst experience ever. Completely disappointing.")
            .unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.compound <= -0.05);
    }

    #[test]
    fn test_idempotent() {
        let s = scorer();
        let text = "The weather is okay today. Nothing special.";
        assert_eq!(s.score(text).unwrap(), s.score(text).unwrap());
    }

    #[test]
    fn test_long_input_not_truncated() {
        let s = scorer();
        // Sentiment only appears far past the classifier's char budget;
        // the lexicon must still see it.
        let mut text = "the quick brown fox jumps over the lazy dog ".repeat(30);
        text.push_str("this was a terrible awful horrible failure");
        let result = s.score(&text).unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
    }
}
