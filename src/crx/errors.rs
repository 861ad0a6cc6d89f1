use thiserror::Error;

use crate::cursor::Truncated;

/// Errors from decoding the CRX delivery container.
#[derive(Debug, Error)]
pub enum CrxError {
    #[error("input does not look like a CRX container")]
    NotACrx,

    #[error(transparent)]
    Truncated(#[from] Truncated),

    #[error("CRX archive is corrupt: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("CRX archive has no {0:?} entry")]
    EntryNotFound(&'static str),

    #[error("failed to read archive entry: {0}")]
    Io(#[from] std::io::Error),
}
