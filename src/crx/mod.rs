//! CRX delivery-container decoding.
//!
//! CRLSets are shipped inside a CRX archive: a fixed magic, a version word,
//! a length-prefixed signed header (opaque here, the signature is not
//! checked) and a ZIP archive holding the `crl-set` entry.

mod errors;
mod parser;
mod source;

pub use errors::CrxError;
pub use parser::{CRL_SET_ENTRY, CRX_MAGIC, CrxHeader, extract_crl_set};
pub use source::ArchiveSource;
