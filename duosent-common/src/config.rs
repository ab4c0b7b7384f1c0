//! Configuration management for the duosent engine.
//!
//! A single configuration file at `~/.duosent/config.json` covers the HTTP
//! surface, both analyzers, and the reconciliation policy.
//!
//! # Configuration Priority
//!
//! 1. Explicit config file values
//! 2. Environment variables (DUOSENT_* prefix)
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `DUOSENT_BIND_ADDRESS` → network.bind
//! - `DUOSENT_PORT` → network.port
//! - `DUOSENT_CLASSIFIER_ENDPOINT` → classifier.endpoint
//! - `DUOSENT_CLASSIFIER_TOKEN` / `HF_API_TOKEN` → classifier.api_token
//! - `DUOSENT_LOG_LEVEL` → observability.log_level

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".duosent"),
        |dirs| dirs.home_dir().join(".duosent"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Network Configuration
// ============================================================================

/// HTTP surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Bind address. Default: "127.0.0.1" (local only).
    /// Set to "0.0.0.0" for remote access.
    #[serde(default = "default_bind_address")]
    pub bind: String,

    /// Listen port for the analysis API.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    4470
}

// ============================================================================
// Classifier Configuration
// ============================================================================

/// Configuration for the machine-learned classifier scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Inference endpoint for the text-classification model.
    #[serde(default = "default_classifier_endpoint")]
    pub endpoint: String,

    /// Model identifier, appended to the endpoint path.
    #[serde(default = "default_classifier_model")]
    pub model: String,

    /// Optional bearer token for the inference endpoint.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Character budget applied before scoring. Input beyond the budget is
    /// silently dropped, never rejected.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Request timeout in milliseconds.
    #[serde(default = "default_classifier_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum retries for failed requests.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff between retries in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Native label table: model label token → canonical label name
    /// ("positive", "neutral", "negative"). A native label outside this
    /// table fails the request loudly.
    #[serde(default = "default_label_table")]
    pub labels: HashMap<String, String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: default_classifier_endpoint(),
            model: default_classifier_model(),
            api_token: None,
            max_input_chars: default_max_input_chars(),
            timeout_ms: default_classifier_timeout_ms(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            labels: default_label_table(),
        }
    }
}

fn default_classifier_endpoint() -> String {
    "http://127.0.0.1:8080".into()
}

fn default_classifier_model() -> String {
    "cardiffnlp/twitter-roberta-base-sentiment".into()
}

fn default_max_input_chars() -> usize {
    512
}

fn default_classifier_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

/// Default label table covering both known model vocabularies: the ternary
/// RoBERTa head (`LABEL_0/1/2`) and the binary SST-2 head
/// (`POSITIVE`/`NEGATIVE`), plus lowercase variants.
fn default_label_table() -> HashMap<String, String> {
    let entries = [
        ("LABEL_0", "negative"),
        ("LABEL_1", "neutral"),
        ("LABEL_2", "positive"),
        ("POSITIVE", "positive"),
        ("NEGATIVE", "negative"),
        ("NEUTRAL", "neutral"),
        ("positive", "positive"),
        ("negative", "negative"),
        ("neutral", "neutral"),
    ];
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Lexicon Configuration
// ============================================================================

/// Configuration for the lexicon/rule-based scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Per-invocation timeout in milliseconds. Lexicon scoring is local CPU
    /// work, but both scorers share the same boundable-invocation contract.
    #[serde(default = "default_lexicon_timeout_ms")]
    pub timeout_ms: u64,

    /// Custom word valences merged over the embedded lexicon
    /// (word → valence on the -4.0..4.0 scale).
    #[serde(default)]
    pub custom_words: HashMap<String, f64>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_lexicon_timeout_ms(),
            custom_words: HashMap::new(),
        }
    }
}

fn default_lexicon_timeout_ms() -> u64 {
    2_000
}

// ============================================================================
// Reconciler Configuration
// ============================================================================

/// Configuration for the reconciliation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Classifier confidence below which a disagreement against a Neutral
    /// lexicon read counts as weak rather than conflicting. Strict `<`;
    /// a confidence exactly at the threshold is a full disagreement.
    #[serde(default = "default_weak_signal_threshold")]
    pub weak_signal_threshold: f64,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            weak_signal_threshold: default_weak_signal_threshold(),
        }
    }
}

fn default_weak_signal_threshold() -> f64 {
    0.75
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Base log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "json" or "pretty".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Unified duosent configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP surface
    #[serde(default)]
    pub network: NetworkConfig,

    /// Classifier scorer
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Lexicon scorer
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Reconciliation policy
    #[serde(default)]
    pub reconciler: ReconcilerConfig,

    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides applied.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(bind) = std::env::var("DUOSENT_BIND_ADDRESS") {
            self.network.bind = bind;
        }
        if let Ok(port) = std::env::var("DUOSENT_PORT") {
            if let Ok(p) = port.parse() {
                self.network.port = p;
            }
        }

        if let Ok(endpoint) = std::env::var("DUOSENT_CLASSIFIER_ENDPOINT") {
            self.classifier.endpoint = endpoint;
        }

        // Token: explicit variable first, then the conventional HF fallback
        if let Ok(token) = std::env::var("DUOSENT_CLASSIFIER_TOKEN") {
            self.classifier.api_token = Some(token);
        } else if self.classifier.api_token.is_none() {
            if let Ok(token) = std::env::var("HF_API_TOKEN") {
                self.classifier.api_token = Some(token);
            }
        }

        if let Ok(level) = std::env::var("DUOSENT_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }
}
