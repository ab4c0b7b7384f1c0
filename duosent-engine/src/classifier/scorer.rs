//! Classifier scorer: truncation, label normalization, and deterministic
//! argmax over the backend's class scores.

use std::sync::Arc;
use tracing::debug;

use duosent_common::Result;

use crate::report::{ClassifierResult, LabelDistribution};
use crate::taxonomy::{LabelNormalizer, SentimentLabel};

use super::backend::ClassifierBackend;

/// Machine-learned classifier scorer.
///
/// Wraps a shared backend handle. Input beyond the character budget is
/// silently dropped before dispatch; the model's native labels are
/// translated through the normalizer, so a vocabulary change fails loudly
/// instead of misclassifying.
pub struct ClassifierScorer {
    backend: Arc<dyn ClassifierBackend>,
    normalizer: LabelNormalizer,
    max_input_chars: usize,
}

impl ClassifierScorer {
    /// Create a scorer over a shared backend.
    pub fn new(
        backend: Arc<dyn ClassifierBackend>,
        normalizer: LabelNormalizer,
        max_input_chars: usize,
    ) -> Self {
        Self {
            backend,
            normalizer,
            max_input_chars,
        }
    }

    /// Score a text.
    ///
    /// Empty or whitespace-only input returns a neutral result without
    /// reaching the model — a degenerate input would only produce noise.
    /// The returned distribution always sums to 1.0 within tolerance; the
    /// label is the argmax with ties broken by taxonomy order
    /// (Positive > Neutral > Negative). Binary backends (no neutral class)
    /// yield a distribution with neutral pinned at 0.0.
    pub async fn score(&self, text: &str) -> Result<ClassifierResult> {
        if text.trim().is_empty() {
            debug!("Empty input, returning neutral classifier result");
            return Ok(neutral_result());
        }

        let truncated = truncate_chars(text, self.max_input_chars);
        if truncated.len() < text.len() {
            debug!(
                budget = self.max_input_chars,
                original_len = text.len(),
                "Input truncated to classifier budget"
            );
        }

        let scores = self.backend.classify(truncated).await?;

        // Accumulate mass per canonical label; unknown native labels abort
        // the request here.
        let mut distribution = LabelDistribution {
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
        };
        for class in &scores {
            let label = self.normalizer.normalize(&class.label)?;
            match label {
                SentimentLabel::Positive => distribution.positive += class.score,
                SentimentLabel::Neutral => distribution.neutral += class.score,
                SentimentLabel::Negative => distribution.negative += class.score,
            }
        }

        let distribution = distribution.normalized();
        let label = distribution.argmax();
        let confidence = distribution.get(label);

        debug!(label = %label, confidence, "Classifier scoring complete");

        Ok(ClassifierResult {
            label,
            distribution,
            confidence,
        })
    }
}

/// Neutral result used by the empty-input guard.
fn neutral_result() -> ClassifierResult {
    ClassifierResult {
        label: SentimentLabel::Neutral,
        distribution: LabelDistribution::concentrated(SentimentLabel::Neutral),
        confidence: 1.0,
    }
}

/// Slice off everything past `max_chars` characters, on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::backend::{ClassScore, FixedClassifier};
    use async_trait::async_trait;
    use duosent_common::config;
    use duosent_common::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn normalizer() -> LabelNormalizer {
        LabelNormalizer::from_table(&config::Config::default().classifier.labels).unwrap()
    }

    fn scorer_with(pairs: &[(&str, f64)]) -> ClassifierScorer {
        ClassifierScorer::new(Arc::new(FixedClassifier::from_pairs(pairs)), normalizer(), 512)
    }

    #[tokio::test]
    async fn test_ternary_backend() {
        let scorer = scorer_with(&[("LABEL_0", 0.1), ("LABEL_1", 0.2), ("LABEL_2", 0.7)]);
        let result = scorer.score("some text").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!((result.confidence - 0.7).abs() < 1e-6);
        assert!((result.distribution.sum() - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_binary_backend_pins_neutral_to_zero() {
        let scorer = scorer_with(&[("POSITIVE", 0.3), ("NEGATIVE", 0.7)]);
        let result = scorer.score("some text").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.distribution.neutral, 0.0);
        assert!((result.distribution.sum() - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_miscalibrated_backend_is_renormalized() {
        // Scores sum to 1.01; the distribution property must still hold.
        let scorer = scorer_with(&[("POSITIVE", 0.51), ("NEGATIVE", 0.50)]);
        let result = scorer.score("some text").await.unwrap();
        assert!((result.distribution.sum() - 1.0).abs() < 1e-6);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn test_exact_tie_resolves_by_taxonomy_order() {
        let scorer = scorer_with(&[("POSITIVE", 0.5), ("NEGATIVE", 0.5)]);
        let result = scorer.score("some text").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn test_empty_input_guard() {
        let scorer = scorer_with(&[("POSITIVE", 1.0)]);
        let result = scorer.score("   ").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_unknown_label_propagates() {
        let scorer = scorer_with(&[("LABEL_9", 1.0)]);
        let err = scorer.score("some text").await.unwrap_err();
        assert!(matches!(err, Error::UnknownLabel(ref l) if l == "LABEL_9"));
    }

    /// Backend that records how many characters it was handed.
    struct LengthProbe {
        seen: AtomicUsize,
    }

    #[async_trait]
    impl ClassifierBackend for LengthProbe {
        async fn classify(&self, text: &str) -> duosent_common::Result<Vec<ClassScore>> {
            self.seen.store(text.chars().count(), Ordering::SeqCst);
            Ok(vec![
                ClassScore {
                    label: "POSITIVE".to_string(),
                    score: 0.6,
                },
                ClassScore {
                    label: "NEGATIVE".to_string(),
                    score: 0.4,
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_truncation_to_char_budget() {
        let probe = Arc::new(LengthProbe {
            seen: AtomicUsize::new(0),
        });
        let scorer = ClassifierScorer::new(probe.clone(), normalizer(), 10);

        scorer.score(&"x".repeat(100)).await.unwrap();
        assert_eq!(probe.seen.load(Ordering::SeqCst), 10);

        // Short input passes through untouched
        scorer.score("short").await.unwrap();
        assert_eq!(probe.seen.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_truncate_respects_multibyte_boundaries() {
        let text = "héllo wörld";
        let cut = truncate_chars(text, 4);
        assert_eq!(cut, "héll");
    }

    #[tokio::test]
    async fn test_idempotent() {
        let scorer = scorer_with(&[("LABEL_0", 0.2), ("LABEL_1", 0.3), ("LABEL_2", 0.5)]);
        let a = scorer.score("same text").await.unwrap();
        let b = scorer.score("same text").await.unwrap();
        assert_eq!(a, b);
    }
}
