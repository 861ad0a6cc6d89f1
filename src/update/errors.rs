use thiserror::Error;

use crate::crx::CrxError;

/// Errors from checking for and downloading the current CRLSet.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("update server answered {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse update response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("update response carries no CRLSet download")]
    MissingUpdate,

    #[error("invalid update URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Crx(#[from] CrxError),
}
