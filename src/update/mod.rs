//! Omaha update client: version check and CRLSet download.
//!
//! The update service answers a `gupdate` XML document naming, per app id,
//! the URL and version of the current release. The CRLSet payload itself is
//! shipped as a CRX container handed to [`crate::crx`].

mod errors;
mod fetcher;
mod types;

pub use errors::UpdateError;
pub use fetcher::UpdateClient;
pub use types::{AppUpdate, CrlSetVersion, UpdateCheck, UpdateResponse};
