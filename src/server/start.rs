use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::server::api::create_api_router;
use crate::server::errors::AppError;

/// Start the prediction HTTP server.
///
/// Binds `bind_addr` (`host:port`) and serves until the process terminates.
/// Both failure modes here are fatal: an unparseable address and a listener
/// that cannot be bound.
pub async fn start_http_server(bind_addr: &str) -> Result<(), AppError> {
    info!("Starting prediction HTTP server on {}", bind_addr);

    // Parse bind address
    let addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| AppError::InvalidBindAddress(bind_addr.to_string(), format!("{e}")))?;

    // Build the router with middleware layers
    let app = create_api_router().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    // Create TCP listener
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Bind(addr.to_string(), format!("{e}")))?;

    info!("Prediction HTTP server listening on {}", addr);

    // Start the server
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(format!("{e}")))?;

    Ok(())
}
