//! Listing and bulk retrieval of issued certificates from a PKI mount.

use tracing::{debug, info};
use vaultrs::client::VaultClient;
use vaultrs::error::ClientError;
use vaultrs::pki::cert;

use crate::error::{Error, Result};
use crate::parse::parse_certificate_pem;
use crate::types::{CertificateList, ParsedCertificate};

/// List the identifiers of all certificates issued by a PKI mount.
///
/// Issues a single list operation against `{mount}/certs/` and returns the
/// identifiers in the order the backend reported them.
///
/// # Errors
///
/// - [`Error::Transport`] if the remote call fails
/// - [`Error::NotFound`] if the call succeeds but the mount holds no
///   certificates (Vault reports an empty listing as a 404)
pub async fn list_certificates(client: &VaultClient, mount: &str) -> Result<CertificateList> {
    let path = format!("{}/certs/", mount);
    debug!(path = %path, "Listing issued certificates");

    let keys = match cert::list(client, mount).await {
        Ok(keys) => keys,
        Err(ClientError::APIError { code: 404, .. }) => {
            return Err(Error::not_found(path));
        }
        Err(e) => return Err(Error::Transport(e)),
    };

    if keys.is_empty() {
        return Err(Error::not_found(path));
    }

    info!(path = %path, count = keys.len(), "Listed issued certificates");
    Ok(CertificateList { keys })
}

/// Fetch and parse every certificate named by a listing, in listing order.
///
/// Performs one read of `{mount}/cert/{identifier}` per identifier,
/// strictly sequentially. The first failing read or parse aborts the whole
/// batch; no partial results are returned.
///
/// # Errors
///
/// - [`Error::InvalidInput`] `Secret given was nil` if `list` is `None`
/// - [`Error::Transport`] if any remote read fails
/// - [`Error::Parse`] if any fetched payload is not a valid certificate
pub async fn fetch_all_certificates(
    client: &VaultClient,
    list: Option<&CertificateList>,
    mount: &str,
) -> Result<Vec<ParsedCertificate>> {
    let list = list.ok_or_else(|| Error::invalid_input("Secret given was nil"))?;

    let mut certs = Vec::with_capacity(list.len());
    for identifier in &list.keys {
        debug!(mount = %mount, identifier = %identifier, "Reading certificate");
        let response = cert::read(client, mount, identifier).await?;
        certs.push(parse_certificate_pem(&response.certificate)?);
    }

    info!(mount = %mount, count = certs.len(), "Fetched and parsed certificates");
    Ok(certs)
}
