//! Construction of the Vault client handle.

use tracing::{error, info};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};

use crate::config::VaultConfig;
use crate::error::{Error, Result};

/// Build a Vault client from the given configuration and verify it is
/// reachable.
///
/// The returned handle is what the certificate operations take as their
/// first argument; it is never stored globally by this crate.
///
/// # Errors
///
/// - [`Error::Config`] if the configuration is invalid
/// - [`Error::Transport`] if the Vault health check fails
pub async fn connect(config: &VaultConfig) -> Result<VaultClient> {
    if config.address.is_empty() {
        return Err(Error::config("Vault address cannot be empty"));
    }

    let mut settings_builder = VaultClientSettingsBuilder::default();
    settings_builder.address(&config.address);

    if let Some(ref token) = config.token {
        settings_builder.token(token);
    }

    if let Some(ref namespace) = config.namespace {
        settings_builder.namespace(Some(namespace.clone()));
    }

    let settings = settings_builder
        .build()
        .map_err(|e| Error::config(format!("Invalid Vault configuration: {}", e)))?;

    let client = VaultClient::new(settings)
        .map_err(|e| Error::config(format!("Failed to create Vault client: {}", e)))?;

    match vaultrs::sys::health(&client).await {
        Ok(_) => {
            info!(address = %config.address, "Successfully connected to Vault");
            Ok(client)
        }
        Err(e) => {
            error!(error = %e, address = %config.address, "Failed to connect to Vault");
            Err(Error::Transport(e))
        }
    }
}

/// Build a Vault client from `VAULT_ADDR`/`VAULT_TOKEN`/`VAULT_NAMESPACE`.
pub async fn connect_from_env() -> Result<VaultClient> {
    let config = VaultConfig::from_env()?;
    connect(&config).await
}
