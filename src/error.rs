//! Error types for the Sellerhub dashboard
//!
//! This module provides error handling using thiserror for structured
//! error definitions and anyhow for propagation at the binary boundary.
//!
//! View-model operations are total functions over in-memory state and never
//! return errors; everything here covers the startup boundary (config file,
//! seed file, terminal, logging).

use thiserror::Error;

/// Main error type for Sellerhub operations
#[derive(Error, Debug)]
pub enum SellerhubError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Product seed file could not be read
    #[error("Failed to read product seed {path}: {source}")]
    SeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Product seed file could not be parsed
    #[error("Failed to parse product seed: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// Terminal or log file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Sellerhub operations
pub type Result<T> = std::result::Result<T, SellerhubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SellerhubError::ConfigRead {
            path: "missing.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_seed_parse_conversion() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: SellerhubError = parse_err.into();
        assert!(matches!(err, SellerhubError::SeedParse(_)));
    }
}
