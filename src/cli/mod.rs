use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod serve;

pub use config::*;
pub use serve::*;

#[derive(Parser)]
#[command(name = "prediction-service")]
#[command(about = "HTTP prediction stub with health checks for orchestration probes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction HTTP server
    Serve(ServeArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to bind the HTTP server (default 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address (default 0.0.0.0)
    #[arg(short, long)]
    pub bind: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Get,
    /// Set a configuration value
    Set(SetConfigArgs),
    /// Reset configuration to defaults
    Reset,
    /// Show configuration file location
    Path,
}

#[derive(Args)]
pub struct SetConfigArgs {
    /// Configuration key (e.g., server.port)
    pub key: String,

    /// Configuration value
    pub value: String,
}

pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    crate::logs::init_logging_and_metrics(cli.verbose);

    match cli.command {
        Commands::Serve(args) => handle_serve_command(args, cli.config).await,
        Commands::Config { action } => handle_config_command(action, cli.config).await,
    }
}
