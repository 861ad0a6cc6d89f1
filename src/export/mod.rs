//! Read-only queries over a decoded CRLSet: revoked-serial enumeration,
//! policy-list export and SPKI fingerprinting of caller certificates.

mod errors;
mod serials;
mod spki;

pub use errors::{CertificateError, InvalidListEntry};
pub use serials::{RevokedSerial, Serials, revoked_serials};
pub use spki::{policy_spkis, spki_hash};
