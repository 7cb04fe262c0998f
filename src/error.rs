//! Error types for PKI certificate operations.

use thiserror::Error;

/// Result type for certificate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing, fetching or parsing certificates.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote Vault call itself failed (transport, auth, API error).
    #[error("Vault request failed: {0}")]
    Transport(#[from] vaultrs::error::ClientError),

    /// The remote call succeeded but the queried path holds no certificates.
    #[error("No certs found at {path}")]
    NotFound { path: String },

    /// Caller-supplied data was absent or malformed. Not a remote failure.
    #[error("{message}")]
    InvalidInput { message: String },

    /// The certificate payload could not be decoded from PEM or DER.
    #[error("{message}")]
    Parse { message: String },

    /// Configuration error while building a client.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a not found error for the given certificate listing path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = Error::not_found("pki/certs/");
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "No certs found at pki/certs/");

        let err = Error::invalid_input("Secret is nil");
        assert!(matches!(err, Error::InvalidInput { .. }));
        assert_eq!(err.to_string(), "Secret is nil");

        let err = Error::parse("failed to parse certificate PEM");
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(err.to_string(), "failed to parse certificate PEM");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("VAULT_ADDR environment variable not set");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("VAULT_ADDR"));
    }
}
