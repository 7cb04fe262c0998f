//! # vault-certs
//!
//! A small helper library for HashiCorp Vault PKI mounts: list the serial
//! numbers of issued certificates, fetch each certificate's PEM encoding,
//! and parse it into an owned, structured certificate value.
//!
//! Control flow is strictly linear. Listing feeds the bulk fetcher, which
//! reads and parses one certificate per identifier in listing order and
//! aborts on the first error. There is no caching, no concurrency and no
//! retry logic; transport, authentication and TLS all belong to the
//! underlying [`vaultrs`] client.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vault_certs::{connect, fetch_all_certificates, list_certificates, VaultConfig};
//!
//! #[tokio::main]
//! async fn main() -> vault_certs::Result<()> {
//!     let client = connect(&VaultConfig::from_env()?).await?;
//!
//!     let listing = list_certificates(&client, "pki").await?;
//!     let certs = fetch_all_certificates(&client, Some(&listing), "pki").await?;
//!
//!     for cert in &certs {
//!         println!("{} (serial {})", cert.subject, cert.serial_number);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod inventory;
pub mod parse;
pub mod types;

// Re-export commonly used types and functions
pub use client::{connect, connect_from_env};
pub use config::VaultConfig;
pub use error::{Error, Result};
pub use inventory::{fetch_all_certificates, list_certificates};
pub use parse::{parse_certificate, parse_certificate_pem};
pub use types::{CertificateList, ParsedCertificate, RawSecret};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
