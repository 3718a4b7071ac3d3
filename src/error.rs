//! Error types shared across the app

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing or teardown failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Log file or subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::Config("unsupported language 'fr'".to_string());
        assert_eq!(err.to_string(), "Configuration error: unsupported language 'fr'");

        let io = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err: AppError = io.into();
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }
}
