//! HTTP API handlers for the prediction service endpoints.
//!
//! This module implements the service's HTTP surface:
//! - **POST /predict**: Return the stub prediction for any request body
//! - **GET /health**: Health check endpoint for liveness/readiness probes
//!
//! Unmatched paths fall through to axum's default 404 handling; a known
//! path hit with the wrong method gets axum's default 405.
//!
//! # Examples
//!
//! ```bash
//! # Request a prediction (the body is accepted but never parsed)
//! curl -X POST http://localhost:8080/predict -d '{}'
//!
//! # Health check
//! curl http://localhost:8080/health
//! ```

use axum::{
    Router,
    response::Json as ResponseJson,
    routing::{get, post},
};
use metrics::counter;

use super::{HealthResponse, PredictionResponse};

// ============================================================================
// Route Handlers
// ============================================================================

/// Serve the stub prediction.
///
/// POST /predict - returns a fixed score and model version
///
/// The request body is accepted and dropped without being read; nothing is
/// parsed until a real model needs features. Because no input is inspected,
/// this handler has no failure path.
///
/// # Returns
///
/// HTTP 200 with `{"prediction_score": 0.85, "model_version": "1.0.2"}`
pub async fn predict_handler() -> ResponseJson<PredictionResponse> {
    counter!("prediction_service.total_requests").increment(1);
    counter!("prediction_service.total_prediction_requests").increment(1);

    ResponseJson(PredictionResponse::stub())
}

/// Health check endpoint used by orchestrators for liveness/readiness probes.
pub async fn health_handler() -> ResponseJson<HealthResponse> {
    counter!("prediction_service.total_requests").increment(1);
    counter!("prediction_service.total_health_requests").increment(1);

    ResponseJson(HealthResponse::ok())
}

// ============================================================================
// Router Creation
// ============================================================================

/// Create the service router mapping the two fixed routes to their handlers.
pub fn create_api_router() -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/health", get(health_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_predict_handler_returns_stub_values() {
        let ResponseJson(response) = predict_handler().await;

        assert_eq!(response.prediction_score, 0.85);
        assert_eq!(response.model_version, "1.0.2");
    }

    #[tokio::test]
    async fn test_predict_handler_is_idempotent() {
        let ResponseJson(first) = predict_handler().await;
        let ResponseJson(second) = predict_handler().await;

        assert_eq!(first.prediction_score, second.prediction_score);
        assert_eq!(first.model_version, second.model_version);
    }

    #[tokio::test]
    async fn test_health_handler_reports_ok() {
        let ResponseJson(response) = health_handler().await;

        assert_eq!(response.status, "ok");
    }

    #[test]
    fn test_create_api_router() {
        // Route registration itself must not panic; the wire behavior is
        // covered by the integration tests.
        let _router = create_api_router();
    }
}
