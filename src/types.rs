//! Data types exchanged with the Vault PKI backend.
//!
//! Vault's logical responses are untyped JSON. [`RawSecret`] mirrors that
//! shape for payloads captured outside the typed client path (fixtures,
//! recorded responses), while [`CertificateList`] is the typed contract for
//! the certificate listing endpoint, validated once at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Payload of a Vault logical response whose shape is not known up front.
///
/// Mirrors the `data` envelope of a raw Vault response body, so a captured
/// response can be deserialized directly:
///
/// ```rust,ignore
/// let secret: RawSecret = serde_json::from_str(&recorded_response)?;
/// let cert = parse_certificate(Some(&secret))?;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSecret {
    /// The `data` object of the response. Absent data is an empty map.
    #[serde(default)]
    pub data: serde_json::Map<String, Value>,
}

/// Ordered certificate identifiers returned by a PKI listing.
///
/// Identifiers are opaque strings naming one issued certificate each
/// (observed as dash-separated hex serial numbers). Listing order is
/// preserved; no uniqueness is enforced at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateList {
    /// Identifiers in the order the backend returned them.
    pub keys: Vec<String>,
}

impl CertificateList {
    /// Validate an untyped secret into a typed certificate listing.
    ///
    /// This is the single boundary check for the listing shape: the secret
    /// must be present and its `keys` field must be a sequence of strings.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] `Secret given was nil` if `secret` is `None`
    /// - [`Error::InvalidInput`] `No keys data found in secret` if `keys` is
    ///   missing or not a sequence of strings
    pub fn from_secret(secret: Option<&RawSecret>) -> Result<Self> {
        let secret = secret.ok_or_else(|| Error::invalid_input("Secret given was nil"))?;

        let keys = secret
            .data
            .get("keys")
            .and_then(Value::as_array)
            .and_then(|values| {
                values
                    .iter()
                    .map(|v| v.as_str().map(str::to_string))
                    .collect::<Option<Vec<String>>>()
            })
            .ok_or_else(|| Error::invalid_input("No keys data found in secret"))?;

        Ok(Self { keys })
    }

    /// Number of certificates in the listing.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the listing holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Owned, structured view of one issued X.509 certificate.
///
/// Produced only by a successful PEM decode + DER parse. The raw DER bytes
/// are retained for callers that need X.509 fields beyond the extracted
/// ones.
#[derive(Clone, PartialEq, Eq)]
pub struct ParsedCertificate {
    /// Subject distinguished name, e.g. `CN=example.com`.
    pub subject: String,

    /// Issuer distinguished name.
    pub issuer: String,

    /// Subject common name, if the subject carries one.
    pub common_name: Option<String>,

    /// Serial number as a decimal string.
    pub serial_number: String,

    /// Start of the validity window.
    pub not_before: DateTime<Utc>,

    /// End of the validity window.
    pub not_after: DateTime<Utc>,

    /// Raw DER encoding of the certificate.
    pub der: Vec<u8>,
}

impl std::fmt::Debug for ParsedCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedCertificate")
            .field("subject", &self.subject)
            .field("issuer", &self.issuer)
            .field("common_name", &self.common_name)
            .field("serial_number", &self.serial_number)
            .field("not_before", &self.not_before)
            .field("not_after", &self.not_after)
            .field("der", &format!("[{} bytes DER]", self.der.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn secret_from(value: serde_json::Value) -> RawSecret {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_certificate_list_from_nil_secret() {
        let err = CertificateList::from_secret(None).unwrap_err();
        assert_eq!(err.to_string(), "Secret given was nil");
    }

    #[test]
    fn test_certificate_list_from_secret_without_keys() {
        let fixture = include_str!("../tests/fixtures/secret_no_cert.json");
        let secret: RawSecret = serde_json::from_str(fixture).unwrap();

        let err = CertificateList::from_secret(Some(&secret)).unwrap_err();
        assert_eq!(err.to_string(), "No keys data found in secret");
    }

    #[test]
    fn test_certificate_list_rejects_non_string_keys() {
        let secret = secret_from(json!({ "data": { "keys": ["ok", 42] } }));

        let err = CertificateList::from_secret(Some(&secret)).unwrap_err();
        assert_eq!(err.to_string(), "No keys data found in secret");
    }

    #[test]
    fn test_certificate_list_preserves_order() {
        let secret = secret_from(json!({
            "data": {
                "keys": [
                    "17-8d-25-c3-66-37-81-eb-64-c6-84-5c-46-5b-42-8b-fd-12-bf-1d",
                    "2e-88-a1-89-5a-df-e1-e6-dd-57-e9-47-78-e1-74-24-73-a3-38-c2"
                ]
            }
        }));

        let list = CertificateList::from_secret(Some(&secret)).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.keys[0].starts_with("17-8d"));
        assert!(list.keys[1].starts_with("2e-88"));
    }

    #[test]
    fn test_raw_secret_deserializes_full_response_body() {
        let fixture = include_str!("../tests/fixtures/cert_secret.json");
        let secret: RawSecret = serde_json::from_str(fixture).unwrap();

        assert!(secret.data.contains_key("certificate"));
    }

    #[test]
    fn test_parsed_certificate_debug_summarizes_der() {
        let cert = ParsedCertificate {
            subject: "CN=example.com".to_string(),
            issuer: "CN=example.com Intermediate Authority".to_string(),
            common_name: Some("example.com".to_string()),
            serial_number: "1234567890".to_string(),
            not_before: Utc::now(),
            not_after: Utc::now(),
            der: vec![0x30, 0x82, 0x01, 0x0a],
        };

        let debug_output = format!("{:?}", cert);
        assert!(debug_output.contains("[4 bytes DER]"));
        assert!(debug_output.contains("CN=example.com"));
    }
}
