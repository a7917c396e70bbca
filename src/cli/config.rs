use crate::cli::{ConfigAction, SetConfigArgs};
use crate::server::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub async fn handle_config_command(
    action: ConfigAction,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get => show_config(config_path),
        ConfigAction::Set(args) => set_config(args, config_path),
        ConfigAction::Reset => reset_config(config_path),
        ConfigAction::Path => show_config_path(config_path),
    }
}

fn show_config(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path.clone())?;
    let config_file_path = get_config_path(config_path)?;

    println!("Configuration ({})", config_file_path.display());
    println!("{}", "-".repeat(50));

    println!("\n[server]");
    println!("bind = \"{}\"", config.server.bind);
    println!("port = {}", config.server.port);

    println!("\n[logging]");
    println!("level = \"{}\"", config.logging.level);

    Ok(())
}

fn set_config(args: SetConfigArgs, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = load_config(config_path.clone()).unwrap_or_default();

    // Key paths are "section.field", e.g. "server.port"
    let parts: Vec<&str> = args.key.split('.').collect();
    let value = args.value.clone();

    match parts.as_slice() {
        ["server", "bind"] => {
            config.server.bind = value;
        }
        ["server", "port"] => {
            config.server.port = value
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid port '{value}': {e}")))?;
        }
        ["logging", "level"] => {
            if ["trace", "debug", "info", "warn", "error"].contains(&value.as_str()) {
                config.logging.level = value;
            } else {
                eprintln!("Invalid log level. Use: trace, debug, info, warn, error");
                return Ok(());
            }
        }
        _ => {
            eprintln!("Unknown configuration key: {}", args.key);
            eprintln!("Available keys:");
            eprintln!("  server.bind, server.port");
            eprintln!("  logging.level");
            return Ok(());
        }
    }

    save_config(&config, config_path)?;
    println!("✓ Configuration updated: {} = {}", args.key, args.value);

    Ok(())
}

fn reset_config(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_file_path = get_config_path(config_path)?;

    if config_file_path.exists() {
        print!("Reset configuration to defaults? [y/N]: ");
        use std::io::{self, Write};
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim().to_lowercase().starts_with('y') {
            fs::remove_file(&config_file_path)?;
            println!("✓ Configuration reset to defaults");
        } else {
            println!("Cancelled.");
        }
    } else {
        println!("Configuration file does not exist (already at defaults)");
    }

    Ok(())
}

fn show_config_path(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_file_path = get_config_path(config_path)?;
    println!("{}", config_file_path.display());

    if config_file_path.exists() {
        println!("  Status: ✓ Exists");
    } else {
        println!("  Status: ✗ Not found (using defaults)");
    }

    Ok(())
}

fn get_config_path(config_path: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(path) = config_path {
        return Ok(path);
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| AppError::Config("Could not determine home directory".to_string()))?;

    Ok(PathBuf::from(home)
        .join(".prediction-service")
        .join("config.toml"))
}

/// Load the configuration file, falling back to defaults when it is absent.
pub fn load_config(config_path: Option<PathBuf>) -> Result<Config, AppError> {
    let config_file_path = get_config_path(config_path)?;

    if !config_file_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_file_path).map_err(|e| {
        AppError::Config(format!(
            "Failed to read {}: {e}",
            config_file_path.display()
        ))
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        AppError::Config(format!(
            "Failed to parse {}: {e}",
            config_file_path.display()
        ))
    })?;
    Ok(config)
}

fn save_config(config: &Config, config_path: Option<PathBuf>) -> Result<(), AppError> {
    let config_file_path = get_config_path(config_path)?;

    // Create directory if it doesn't exist
    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::Config(format!("Failed to create {}: {e}", parent.display())))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| AppError::Config(format!("Failed to serialize configuration: {e}")))?;
    fs::write(&config_file_path, content).map_err(|e| {
        AppError::Config(format!(
            "Failed to write {}: {e}",
            config_file_path.display()
        ))
    })?;
    Ok(())
}
