pub mod api;
pub mod errors;
pub mod start;

pub use start::start_http_server;

use serde::Serialize;

/// Score returned for every prediction until a trained model is wired in.
pub const PREDICTION_SCORE: f64 = 0.85;

/// Version string reported for the stub model.
pub const MODEL_VERSION: &str = "1.0.2";

/// Status string reported by the health probe.
pub const HEALTH_STATUS_OK: &str = "ok";

#[derive(Serialize)]
pub struct PredictionResponse {
    pub prediction_score: f64,
    pub model_version: String,
}

impl PredictionResponse {
    /// Build the canned response served for every prediction request.
    pub fn stub() -> Self {
        Self {
            prediction_score: PREDICTION_SCORE,
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
        }
    }
}
