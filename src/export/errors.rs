use thiserror::Error;
use x509_parser::prelude::X509Error;

use crate::crlset::PolicyList;

/// One policy-list entry failed base64 decoding.
///
/// Local to the entry: the caller reports it and keeps going with the rest
/// of the list.
#[derive(Debug, Error)]
#[error("{value} is not a valid SPKI")]
pub struct InvalidListEntry {
    pub list: PolicyList,
    pub value: String,
    pub source: base64::DecodeError,
}

/// The caller-supplied certificate could not be parsed.
#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("failed to parse certificate: {0}")]
    Parse(#[from] X509Error),
}
