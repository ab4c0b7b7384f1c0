//! Classifier backends.
//!
//! The model itself is an external collaborator: the engine only sees the
//! [`ClassifierBackend`] trait, which returns raw native-label scores. The
//! production backend posts to an HF-style text-classification inference
//! endpoint; tests inject [`FixedClassifier`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use duosent_common::{AnalyzerKind, ClassifierConfig, Error, Result};

/// One native class and its probability, exactly as the model reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    /// Native label token (e.g. "LABEL_2", "POSITIVE").
    pub label: String,
    /// Probability mass for this class.
    pub score: f64,
}

/// A source of per-class scores for a text.
///
/// Implementations must be safe to share across requests (`Send + Sync`)
/// and must hold no per-request mutable state.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Score the text, returning all classes the model knows.
    ///
    /// Binary models return two entries, ternary models three. The caller
    /// handles label translation and normalization.
    async fn classify(&self, text: &str) -> Result<Vec<ClassScore>>;
}

// ============================================================================
// HTTP Backend
// ============================================================================

/// Backend calling a remote inference endpoint.
///
/// Sends `{"inputs": text}` to `{endpoint}/models/{model}` and expects the
/// usual text-classification response shape: a list of per-class
/// label/score objects (possibly nested one level per input).
pub struct HttpClassifier {
    client: reqwest::Client,
    url: String,
    api_token: Option<String>,
    max_retries: u32,
    retry_backoff: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    /// One entry per input, each a list of class scores.
    Batched(Vec<Vec<ClassScore>>),
    /// Flat list of class scores for a single input.
    Flat(Vec<ClassScore>),
}

impl HttpClassifier {
    /// Build a backend from configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        let url = format!(
            "{}/models/{}",
            config.endpoint.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            url,
            api_token: config.api_token.clone(),
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    async fn request_once(&self, text: &str) -> Result<Vec<ClassScore>> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "inputs": text }));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            Error::scorer_unavailable(AnalyzerKind::Classifier, format!("request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::scorer_unavailable(
                AnalyzerKind::Classifier,
                format!("inference endpoint returned {status}"),
            ));
        }

        let parsed: InferenceResponse = response.json().await.map_err(|e| {
            Error::scorer_unavailable(
                AnalyzerKind::Classifier,
                format!("malformed inference response: {e}"),
            )
        })?;

        let scores = match parsed {
            InferenceResponse::Batched(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            InferenceResponse::Flat(scores) => scores,
        };

        if scores.is_empty() {
            return Err(Error::scorer_unavailable(
                AnalyzerKind::Classifier,
                "inference endpoint returned no class scores",
            ));
        }

        Ok(scores)
    }
}

#[async_trait]
impl ClassifierBackend for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<ClassScore>> {
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(self.retry_backoff).await;
                debug!(attempt, "Retrying classifier request");
            }

            match self.request_once(text).await {
                Ok(scores) => return Ok(scores),
                Err(e) => {
                    warn!(attempt, error = %e, "Classifier request failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            Error::scorer_unavailable(AnalyzerKind::Classifier, "no attempts made")
        }))
    }
}

// ============================================================================
// Fixed Backend
// ============================================================================

/// Backend returning a preset score list, for tests and offline use.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    scores: Vec<ClassScore>,
}

impl FixedClassifier {
    /// Always answer with the given class scores.
    pub fn new(scores: Vec<ClassScore>) -> Self {
        Self { scores }
    }

    /// Convenience constructor from `(label, score)` pairs.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(label, score)| ClassScore {
                    label: label.to_string(),
                    score: *score,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl ClassifierBackend for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<Vec<ClassScore>> {
        Ok(self.scores.clone())
    }
}
