use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use ring::digest;
use tracing::debug;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::*;

use super::errors::{CertificateError, InvalidListEntry};
use crate::crlset::{CrlSetHeader, PolicyList, SPKI_HASH_LEN};

/// Decode the raw fingerprints of all three policy lists in the header.
///
/// Lists are visited in [`PolicyList::ALL`] order. A malformed base64 entry
/// is produced as an error item carrying the offending string and iteration
/// continues; it never aborts the rest of the list.
pub fn policy_spkis(
    header: &CrlSetHeader,
) -> impl Iterator<Item = Result<Vec<u8>, InvalidListEntry>> + '_ {
    PolicyList::ALL.into_iter().flat_map(move |list| {
        header.policy_list(list).iter().map(move |value| {
            BASE64.decode(value).map_err(|source| InvalidListEntry {
                list,
                value: value.clone(),
                source,
            })
        })
    })
}

/// SHA-256 fingerprint of a certificate's subject-public-key-info.
///
/// Accepts a PEM certificate, or raw DER when the input is not PEM. The
/// result is the filter value for serial lookups.
pub fn spki_hash(cert_bytes: &[u8]) -> Result<[u8; SPKI_HASH_LEN], CertificateError> {
    let decoded;
    let der = match parse_x509_pem(cert_bytes) {
        Ok((_, pem)) => {
            decoded = pem.contents;
            decoded.as_slice()
        }
        Err(_) => cert_bytes,
    };

    let (_, cert) = X509Certificate::from_der(der).map_err(X509Error::from)?;
    let spki = cert.tbs_certificate.subject_pki.raw;
    debug!(spki_len = spki.len(), "hashing subject public key info");

    let digest = digest::digest(&digest::SHA256, spki);
    Ok(digest
        .as_ref()
        .try_into()
        .expect("SHA-256 digest is 32 bytes"))
}
