//! Error types for graphlens operations.
//!
//! Algorithm entry points never return errors: an absent vertex, an
//! unreachable destination or a graph of the wrong kind are ordinary
//! outcomes expressed through `Option` and empty collections. This type only
//! covers the fallible surfaces around the engine, which today means loading
//! and validating an [`EngineConfig`](crate::config::EngineConfig).

use thiserror::Error;

/// Result type for graphlens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for graphlens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML for the expected shape
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration parsed but holds an unusable value
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_includes_message() {
        let error = Error::config("epsilon must be positive");

        assert_eq!(
            error.to_string(),
            "configuration error: epsilon must be positive"
        );
    }

    #[test]
    fn io_error_converts_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.yaml")?)
        }

        let error = read().expect_err("missing file should fail");
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().starts_with("I/O error"));
    }
}
