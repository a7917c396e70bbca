use crate::cli::ServeArgs;
use crate::cli::config::load_config;
use crate::server::start_http_server;
use anyhow::Result as AnyhowResult;
use std::path::PathBuf;
use tracing::info;

pub async fn handle_serve_command(
    args: ServeArgs,
    config_path: Option<PathBuf>,
) -> AnyhowResult<()> {
    let config = load_config(config_path)?;

    // CLI flags win over the config file, which wins over built-in defaults
    let bind = args.bind.unwrap_or(config.server.bind);
    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{bind}:{port}");

    info!("Serving predictions at http://{}", bind_addr);
    info!("  POST /predict");
    info!("  GET  /health");

    start_http_server(&bind_addr).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_rejects_unparseable_bind() {
        let args = ServeArgs {
            port: Some(8080),
            bind: Some("not an address".to_string()),
        };

        let result = handle_serve_command(args, None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_serve_surfaces_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");
        std::fs::write(&config_file, "invalid [toml content").unwrap();

        let args = ServeArgs { port: None, bind: None };
        let result = handle_serve_command(args, Some(config_file)).await;
        assert!(result.is_err());
    }
}
