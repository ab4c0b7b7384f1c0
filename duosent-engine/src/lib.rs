//! Duosent Engine Library
//!
//! Dual-analyzer sentiment analysis: a lexicon/rule-based scorer and a
//! machine-learned classifier score each text independently, and a
//! reconciler folds both reads into one comparable verdict.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   duosent-engine (:4470)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │   input text                                                │
//! │       │            ┌──────────────────┐                     │
//! │       ├──────────▶ │  LexiconScorer   │──┐                  │
//! │       │            └──────────────────┘  │  ┌────────────┐  │
//! │       │            ┌──────────────────┐  ├─▶│ Reconciler │  │
//! │       └──────────▶ │ ClassifierScorer │──┘  └────────────┘  │
//! │                    └──────────────────┘           │         │
//! │                       (remote model)        AnalysisReport  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Rules
//!
//! - Every label passes through the [`taxonomy::LabelNormalizer`]; a native
//!   label outside the fixed table fails the request loudly.
//! - Lexicon label: compound ≥ 0.05 positive, ≤ -0.05 negative, else neutral.
//! - Verdict: equal labels agree; lexicon-neutral vs. a classifier below the
//!   weak-signal threshold is a weak disagreement; everything else disagrees.
//! - Scorer failures are isolated; a half-failed analysis reports an
//!   incomplete comparison instead of erroring.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod analyzer;
pub mod classifier;
pub mod lexicon;
pub mod reconcile;
pub mod report;
pub mod routes;
pub mod taxonomy;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use duosent_common::Config;

pub use analyzer::SentimentAnalyzer;
pub use reconcile::SentimentReconciler;
pub use report::{AnalysisReport, ComparisonOutcome, ComparisonVerdict};
pub use taxonomy::{LabelNormalizer, SentimentLabel};

/// Engine service state.
///
/// The analyzer holds the loaded lexicon and classifier handles; both are
/// built once at startup and shared read-only for the process lifetime.
pub struct EngineState {
    /// Configuration
    pub config: Config,
    /// Dual-analyzer pipeline
    pub analyzer: Arc<SentimentAnalyzer>,
}

impl EngineState {
    /// Create engine state with the production classifier backend.
    pub fn new(config: Config) -> duosent_common::Result<Self> {
        let analyzer = Arc::new(SentimentAnalyzer::from_config(&config)?);
        Ok(Self { config, analyzer })
    }
}

/// Main analysis service.
pub struct EngineService {
    state: Arc<EngineState>,
}

impl EngineService {
    /// Create a new engine service.
    pub fn new(config: Config) -> duosent_common::Result<Self> {
        let state = Arc::new(EngineState::new(config)?);
        Ok(Self { state })
    }

    /// Start the HTTP server.
    pub async fn start(self) -> Result<()> {
        let bind = self.state.config.network.bind.clone();
        let port = self.state.config.network.port;

        let app = Router::new()
            .route("/health", get(routes::health))
            .route("/api/v1/analyze", post(routes::analyze))
            .layer(TimeoutLayer::new(Duration::from_secs(30)))
            .with_state(self.state.clone());

        let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
        tracing::info!(address = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
