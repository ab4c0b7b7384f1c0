//! HTTP routes for the analysis service.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::report::AnalysisReport;
use crate::EngineState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

/// Analysis request body.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze. Empty input is valid and yields a neutral report.
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "duosent-engine".to_string(),
    })
}

/// Run both analyzers over the submitted text and return the full report.
///
/// Always answers 200: scorer failures are carried inside the report
/// (`failures` + incomplete comparison), not mapped to HTTP errors, so one
/// analyzer's outage still surfaces the other's result.
pub async fn analyze(
    State(state): State<Arc<EngineState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisReport> {
    let report = state.analyzer.analyze(&request.text).await;
    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let response = health().await;
        assert_eq!(response.0.status, "healthy");
        assert_eq!(response.0.service, "duosent-engine");
    }

    #[test]
    fn test_analyze_request_text_defaults_to_empty() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
    }
}
