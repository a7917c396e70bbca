use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use metrics::counter;

/// Initialize structured logging and metrics collection.
///
/// Sets up a tracing subscriber with environment-based filtering and
/// registers the service's request counters at zero so scrapes start from a
/// known baseline.
///
/// # Arguments
///
/// * `verbose` - Raise the default filter to debug (also enables
///   `tower_http` request/response traces)
///
/// # Environment Variables
///
/// - `RUST_LOG`: Overrides the default filter entirely (e.g., "info", "debug")
pub fn init_logging_and_metrics(verbose: bool) {
    let default_filter = if verbose {
        "prediction_service=debug,tower_http=debug"
    } else {
        "prediction_service=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Use try_init to avoid panic if already initialized (tests call this
    // more than once per process)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    info!("Logging and tracing initialized");

    counter!("prediction_service.total_requests").absolute(0);
    counter!("prediction_service.total_prediction_requests").absolute(0);
    counter!("prediction_service.total_health_requests").absolute(0);
}
