//! Vault connection configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for connecting to a Vault server.
///
/// Construction of the authenticated client handle is the calling
/// application's concern; the certificate operations themselves only ever
/// receive a ready client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vault server address (e.g. "https://vault.example.com:8200").
    pub address: String,

    /// Vault authentication token, if using token auth.
    pub token: Option<String>,

    /// Vault namespace, for Enterprise multi-tenancy.
    pub namespace: Option<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self { address: "http://127.0.0.1:8200".to_string(), token: None, namespace: None }
    }
}

impl VaultConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads:
    /// - `VAULT_ADDR`: Vault server address (required)
    /// - `VAULT_TOKEN`: Authentication token (optional)
    /// - `VAULT_NAMESPACE`: Namespace (optional)
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if `VAULT_ADDR` is not set.
    pub fn from_env() -> Result<Self> {
        let address = std::env::var("VAULT_ADDR")
            .map_err(|_| Error::config("VAULT_ADDR environment variable not set"))?;

        let token = std::env::var("VAULT_TOKEN").ok();
        let namespace = std::env::var("VAULT_NAMESPACE").ok();

        Ok(Self { address, token, namespace })
    }
}
