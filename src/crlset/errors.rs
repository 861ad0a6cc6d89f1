use thiserror::Error;

use crate::cursor::Truncated;

/// Errors from decoding a CRLSet file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Truncated(#[from] Truncated),

    /// The header bytes were present but did not decode as the expected
    /// JSON structure. Fatal for the whole file, unlike a malformed entry
    /// inside one of the header's SPKI lists.
    #[error("malformed CRLSet header: {0}")]
    HeaderMalformed(#[from] serde_json::Error),
}
