pub mod cli;
pub mod logs;
pub mod server;

pub use server::{HealthResponse, PredictionResponse};
