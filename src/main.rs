#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Run the CLI
    prediction_service::cli::run_cli().await
}
