use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vault_certs::{
    connect, fetch_all_certificates, list_certificates, Result, VaultConfig, APP_NAME, VERSION,
};

#[derive(Parser)]
#[command(name = "vault-certs")]
#[command(about = "List and inspect certificates issued by a Vault PKI mount")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// PKI mount path to query
    #[arg(default_value = "pki")]
    mount: String,

    /// Vault server address (overrides VAULT_ADDR)
    #[arg(long)]
    address: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if it exists (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(app_name = APP_NAME, version = VERSION, mount = %cli.mount, "Querying PKI mount");

    let mut config = VaultConfig::from_env().or_else(|e| {
        // An explicit --address makes VAULT_ADDR optional.
        if cli.address.is_some() {
            Ok(VaultConfig::default())
        } else {
            Err(e)
        }
    })?;
    if let Some(address) = cli.address {
        config.address = address;
    }

    let client = connect(&config).await?;

    let listing = list_certificates(&client, &cli.mount).await?;
    let certs = fetch_all_certificates(&client, Some(&listing), &cli.mount).await?;

    for cert in &certs {
        println!(
            "{}  {}  {} -> {}",
            cert.serial_number,
            cert.common_name.as_deref().unwrap_or("<no common name>"),
            cert.not_before,
            cert.not_after,
        );
    }

    Ok(())
}
