//! Application-level error types for the prediction service.
//!
//! The service has no request-level failure modes (nothing is parsed from
//! incoming requests), so every variant here is a startup-time error: they
//! are fatal and terminate the process with a non-zero exit status.
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// The configured bind address could not be parsed as `host:port`.
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, String),

    /// The TCP listener could not be bound (port in use, permission denied).
    #[error("Failed to bind to {0}: {1}")]
    Bind(String, String),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP server terminated with an error while serving.
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Whether the error occurred before the listener started accepting
    /// connections. All startup errors are fatal with no recovery attempted.
    pub fn is_startup(&self) -> bool {
        match self {
            AppError::InvalidBindAddress(_, _) => true,
            AppError::Bind(_, _) => true,
            AppError::Config(_) => true,
            AppError::Server(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let error = AppError::InvalidBindAddress("bogus".to_string(), "invalid socket address".to_string());
        assert_eq!(error.to_string(), "Invalid bind address 'bogus': invalid socket address");

        let error = AppError::Bind("0.0.0.0:8080".to_string(), "address in use".to_string());
        assert_eq!(error.to_string(), "Failed to bind to 0.0.0.0:8080: address in use");

        let error = AppError::Config("malformed TOML".to_string());
        assert_eq!(error.to_string(), "Configuration error: malformed TOML");
    }

    #[test]
    fn test_app_error_is_startup() {
        assert!(AppError::InvalidBindAddress("x".to_string(), "y".to_string()).is_startup());
        assert!(AppError::Bind("x".to_string(), "y".to_string()).is_startup());
        assert!(AppError::Config("x".to_string()).is_startup());
        assert!(!AppError::Server("x".to_string()).is_startup());
    }
}
