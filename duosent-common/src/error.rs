//! Error types for the duosent engine.

use thiserror::Error;

/// Result type alias using the duosent error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Which analyzer a failure belongs to.
///
/// Carried inside [`Error::ScorerUnavailable`] so callers can report one
/// analyzer's failure without discarding the other analyzer's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    /// Lexicon/rule-based scorer
    Lexicon,
    /// Machine-learned classifier scorer
    Classifier,
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexicon => write!(f, "lexicon"),
            Self::Classifier => write!(f, "classifier"),
        }
    }
}

/// Unified error type for duosent crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or request.
    ///
    /// Reserved: oversize input is truncated rather than rejected, so the
    /// scoring path never raises this today.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A native model label fell outside the configured label table.
    ///
    /// Fatal to the request. Never silently defaulted, so a changed model
    /// label set surfaces immediately instead of misclassifying.
    #[error("Unknown native label '{0}' (not in the configured label table)")]
    UnknownLabel(String),

    /// The underlying lexicon/classifier resource could not be invoked.
    #[error("{analyzer} analyzer unavailable: {reason}")]
    ScorerUnavailable {
        analyzer: AnalyzerKind,
        reason: String,
    },

    /// Operation timed out
    #[error("Operation timed out")]
    Timeout,

    /// External service error
    #[error("External service error: {0}")]
    External(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a scorer-unavailable error for the given analyzer.
    pub fn scorer_unavailable(analyzer: AnalyzerKind, reason: impl Into<String>) -> Self {
        Self::ScorerUnavailable {
            analyzer,
            reason: reason.into(),
        }
    }

    /// Check if this failure is recoverable at the caller level.
    ///
    /// A scorer outage (or timeout) only loses one side of the comparison;
    /// the caller can still report the other analyzer's result alone.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ScorerUnavailable { .. } | Self::Timeout)
    }

    /// Check if this is a label-table miss.
    pub const fn is_unknown_label(&self) -> bool {
        matches!(self, Self::UnknownLabel(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorer_unavailable_names_analyzer() {
        let err = Error::scorer_unavailable(AnalyzerKind::Classifier, "connection refused");
        assert_eq!(
            err.to_string(),
            "classifier analyzer unavailable: connection refused"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unknown_label_is_not_recoverable() {
        let err = Error::UnknownLabel("LABEL_9".to_string());
        assert!(err.is_unknown_label());
        assert!(!err.is_recoverable());
    }
}
