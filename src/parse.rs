//! PEM decoding and X.509 parsing of fetched certificate payloads.

use chrono::DateTime;
use x509_parser::prelude::*;

use crate::error::{Error, Result};
use crate::types::{ParsedCertificate, RawSecret};

/// Parse the `certificate` field of a fetched secret into a certificate.
///
/// # Errors
///
/// Checked in order:
///
/// 1. [`Error::InvalidInput`] `Secret is nil` if the input is absent
/// 2. [`Error::InvalidInput`] `No certificate data found in secret` if the
///    `certificate` field is missing or not a string
/// 3. [`Error::Parse`] `failed to parse certificate PEM` if PEM decoding
///    yields no block
/// 4. [`Error::Parse`] `failed to parse certificate from bytes` if DER
///    parsing of the decoded block fails
pub fn parse_certificate(secret: Option<&RawSecret>) -> Result<ParsedCertificate> {
    let secret = secret.ok_or_else(|| Error::invalid_input("Secret is nil"))?;

    let pem = secret
        .data
        .get("certificate")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::invalid_input("No certificate data found in secret"))?;

    parse_certificate_pem(pem)
}

/// Parse a PEM-encoded certificate string into a [`ParsedCertificate`].
///
/// This is the path the bulk fetcher takes once the typed read response
/// has already yielded the PEM text.
pub fn parse_certificate_pem(pem: &str) -> Result<ParsedCertificate> {
    let (_, block) = parse_x509_pem(pem.as_bytes())
        .map_err(|_| Error::parse("failed to parse certificate PEM"))?;

    let (_, cert) = X509Certificate::from_der(&block.contents)
        .map_err(|_| Error::parse("failed to parse certificate from bytes"))?;

    let parsed = extract_certificate_fields(&cert, &block.contents)?;
    Ok(parsed)
}

/// Copy the fields this crate exposes out of the borrowed parser view.
fn extract_certificate_fields(
    cert: &X509Certificate<'_>,
    der: &[u8],
) -> Result<ParsedCertificate> {
    let common_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_string);

    let not_before = asn1_time_to_utc(&cert.validity().not_before)?;
    let not_after = asn1_time_to_utc(&cert.validity().not_after)?;

    Ok(ParsedCertificate {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        common_name,
        serial_number: cert.serial.to_string(),
        not_before,
        not_after,
        der: der.to_vec(),
    })
}

fn asn1_time_to_utc(time: &ASN1Time) -> Result<chrono::DateTime<chrono::Utc>> {
    DateTime::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| Error::parse("certificate validity is outside the representable range"))
}
