//! Duosent Engine - dual-analyzer sentiment analysis service.
//!
//! Scores text with a lexicon rule engine and a remote text classifier,
//! reconciles the two reads, and serves the comparison over HTTP.

use anyhow::Result;
use duosent_common::config::Config;
use duosent_common::logging::init_logging;
use duosent_engine::EngineService;

#[tokio::main]
async fn main() -> Result<()> {
    // Start timing immediately for cold-start measurement
    let startup_start = std::time::Instant::now();

    // Load configuration
    let config = Config::load_with_env()?;

    // Initialize logging
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Duosent Engine v{}", env!("CARGO_PKG_VERSION"));

    // Build the analyzer pipeline (lexicon tables + classifier handle)
    let service = EngineService::new(config)?;

    let startup_duration = startup_start.elapsed();
    tracing::info!(
        duration_ms = startup_duration.as_millis() as u64,
        "Service initialized in {:?}",
        startup_duration
    );

    service.start().await
}
