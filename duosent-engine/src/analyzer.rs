//! Analysis orchestration: runs both scorers and reconciles their results.
//!
//! The two scorers share no mutable state and have no ordering dependency,
//! so they run concurrently per request; concurrency here is purely a
//! performance choice. Each invocation is bounded by a configured timeout
//! and a timed-out scorer yields a typed failure, never a partial result.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use duosent_common::{AnalyzerKind, Config, Error, Result};

use crate::classifier::{ClassifierBackend, ClassifierScorer, HttpClassifier};
use crate::lexicon::{LexiconEngine, LexiconScorer};
use crate::reconcile::SentimentReconciler;
use crate::report::{AnalysisReport, AnalyzerFailure};
use crate::taxonomy::LabelNormalizer;

/// Per-scorer invocation timeouts.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerTimeouts {
    pub lexicon: Duration,
    pub classifier: Duration,
}

impl AnalyzerTimeouts {
    fn from_config(config: &Config) -> Self {
        Self {
            lexicon: Duration::from_millis(config.lexicon.timeout_ms),
            classifier: Duration::from_millis(config.classifier.timeout_ms),
        }
    }
}

/// The dual-analyzer pipeline.
///
/// Holds shared read-only handles to both scorers, injected at construction
/// so the pipeline is unit-testable with fake backends. Every analysis call
/// produces a fresh report; no cross-call state is retained.
pub struct SentimentAnalyzer {
    lexicon: LexiconScorer,
    classifier: ClassifierScorer,
    reconciler: SentimentReconciler,
    timeouts: AnalyzerTimeouts,
}

impl SentimentAnalyzer {
    /// Build the full pipeline from configuration with the HTTP classifier
    /// backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = Arc::new(HttpClassifier::new(&config.classifier)?);
        Self::with_backend(config, backend)
    }

    /// Build the pipeline from configuration with an injected classifier
    /// backend.
    pub fn with_backend(config: &Config, backend: Arc<dyn ClassifierBackend>) -> Result<Self> {
        let engine = Arc::new(LexiconEngine::with_custom_words(&config.lexicon.custom_words));
        let normalizer = LabelNormalizer::from_table(&config.classifier.labels)?;

        Ok(Self {
            lexicon: LexiconScorer::new(engine),
            classifier: ClassifierScorer::new(
                backend,
                normalizer,
                config.classifier.max_input_chars,
            ),
            reconciler: SentimentReconciler::new(config.reconciler.clone()),
            timeouts: AnalyzerTimeouts::from_config(config),
        })
    }

    /// Analyze a text with both scorers and reconcile the results.
    ///
    /// Scorer failures are isolated: one analyzer failing (or timing out)
    /// leaves the other's result intact in the report, and the comparison
    /// is marked incomplete instead of erroring.
    pub async fn analyze(&self, text: &str) -> AnalysisReport {
        let lexicon_fut = tokio::time::timeout(self.timeouts.lexicon, async {
            self.lexicon.score(text)
        });
        let classifier_fut =
            tokio::time::timeout(self.timeouts.classifier, self.classifier.score(text));

        let (lexicon_out, classifier_out) = tokio::join!(lexicon_fut, classifier_fut);

        let mut failures = Vec::new();
        let lexicon = flatten(lexicon_out, AnalyzerKind::Lexicon, &mut failures);
        let classifier = flatten(classifier_out, AnalyzerKind::Classifier, &mut failures);

        let comparison = self
            .reconciler
            .compare(lexicon.as_ref(), classifier.as_ref());

        info!(
            lexicon_ok = lexicon.is_some(),
            classifier_ok = classifier.is_some(),
            verdict = ?comparison.verdict(),
            "Analysis complete"
        );

        AnalysisReport {
            lexicon,
            classifier,
            failures,
            comparison,
            analyzed_at: Utc::now(),
        }
    }
}

/// Collapse a timed scorer outcome into an optional result, recording any
/// failure against its analyzer.
fn flatten<T>(
    outcome: std::result::Result<Result<T>, tokio::time::error::Elapsed>,
    analyzer: AnalyzerKind,
    failures: &mut Vec<AnalyzerFailure>,
) -> Option<T> {
    let result = match outcome {
        Ok(inner) => inner,
        Err(_) => Err(Error::scorer_unavailable(analyzer, "invocation timed out")),
    };

    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(analyzer = %analyzer, error = %e, "Scorer failed");
            failures.push(AnalyzerFailure {
                analyzer,
                message: e.to_string(),
            });
            None
        }
    }
}
