use std::io::Read;

use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

use super::errors::CrxError;
use super::source::ArchiveSource;
use crate::cursor::{ByteCursor, Stage};

/// Magic bytes opening every CRX container.
pub const CRX_MAGIC: [u8; 4] = *b"Cr24";

/// Name of the archive entry holding the CRLSet payload.
pub const CRL_SET_ENTRY: &str = "crl-set";

/// Fixed-size header opening a CRX container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrxHeader {
    /// Format version. Accepted as-is, newer versions only grow the signed
    /// header, which is skipped anyway.
    pub version: u32,
    /// Length of the signed header blob that follows.
    pub header_len: u32,
}

/// Extract the decompressed `crl-set` entry from raw CRX container bytes.
pub fn extract_crl_set(crx: &[u8]) -> Result<Vec<u8>, CrxError> {
    let (header, archive) = split_archive(crx)?;
    debug!(
        version = header.version,
        header_len = header.header_len,
        archive_len = archive.len(),
        "parsed CRX header"
    );
    read_entry(archive, CRL_SET_ENTRY)
}

/// Validate the CRX header and return it along with the trailing ZIP bytes.
fn split_archive(crx: &[u8]) -> Result<(CrxHeader, &[u8]), CrxError> {
    let mut cursor = ByteCursor::new(crx);

    let magic = cursor
        .take_array::<4>(Stage::CrxMagic)
        .map_err(|_| CrxError::NotACrx)?;
    if *magic != CRX_MAGIC {
        return Err(CrxError::NotACrx);
    }

    let version = cursor.read_u32_le(Stage::CrxVersion)?;
    let header_len = cursor.read_u32_le(Stage::SignedHeaderLen)?;
    // The signature inside is not verified, only skipped.
    cursor.take(header_len as usize, Stage::SignedHeader)?;

    Ok((
        CrxHeader {
            version,
            header_len,
        },
        cursor.rest(),
    ))
}

/// Decompress one named entry of the trailing ZIP archive into memory.
fn read_entry(archive_bytes: &[u8], name: &'static str) -> Result<Vec<u8>, CrxError> {
    let mut archive = ZipArchive::new(ArchiveSource::new(archive_bytes))?;

    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(CrxError::EntryNotFound(name)),
        Err(err) => return Err(err.into()),
    };

    // The declared uncompressed size is untrusted, so no preallocation.
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    debug!(entry = name, len = bytes.len(), "extracted archive entry");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use zip::CompressionMethod;
    use zip::write::{SimpleFileOptions, ZipWriter};

    use super::*;

    fn zip_with_entry(name: &str, content: &[u8]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(name, options).unwrap();
        writer.write_all(content).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn crx_around(zip_bytes: &[u8], signed_header: &[u8]) -> Vec<u8> {
        let mut crx = Vec::new();
        crx.extend_from_slice(&CRX_MAGIC);
        crx.extend_from_slice(&3u32.to_le_bytes());
        crx.extend_from_slice(&(signed_header.len() as u32).to_le_bytes());
        crx.extend_from_slice(signed_header);
        crx.extend_from_slice(zip_bytes);
        crx
    }

    #[test]
    fn test_extract_crl_set() {
        let zip_bytes = zip_with_entry(CRL_SET_ENTRY, b"payload");
        let crx = crx_around(&zip_bytes, &[0xAA; 16]);

        assert_eq!(extract_crl_set(&crx).unwrap(), b"payload");
    }

    #[test]
    fn test_bad_magic() {
        let zip_bytes = zip_with_entry(CRL_SET_ENTRY, b"payload");
        let mut crx = crx_around(&zip_bytes, &[]);
        crx[0] = b'X';

        assert!(matches!(extract_crl_set(&crx), Err(CrxError::NotACrx)));
        // Shorter than the magic itself is also not a CRX.
        assert!(matches!(extract_crl_set(b"Cr"), Err(CrxError::NotACrx)));
    }

    #[test]
    fn test_truncated_fixed_header() {
        let mut crx = Vec::new();
        crx.extend_from_slice(&CRX_MAGIC);
        crx.extend_from_slice(&3u32.to_le_bytes());
        crx.extend_from_slice(&[0x10]); // header length cut short

        let err = extract_crl_set(&crx).unwrap_err();
        match err {
            CrxError::Truncated(t) => assert_eq!(t.stage, Stage::SignedHeaderLen),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_signed_header_longer_than_input() {
        let mut crx = Vec::new();
        crx.extend_from_slice(&CRX_MAGIC);
        crx.extend_from_slice(&3u32.to_le_bytes());
        crx.extend_from_slice(&1000u32.to_le_bytes());
        crx.extend_from_slice(&[0u8; 8]);

        let err = extract_crl_set(&crx).unwrap_err();
        match err {
            CrxError::Truncated(t) => assert_eq!(t.stage, Stage::SignedHeader),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_not_found() {
        let zip_bytes = zip_with_entry("something-else", b"payload");
        let crx = crx_around(&zip_bytes, &[]);

        assert!(matches!(
            extract_crl_set(&crx),
            Err(CrxError::EntryNotFound(CRL_SET_ENTRY))
        ));
    }

    #[test]
    fn test_corrupt_archive() {
        let crx = crx_around(&[0xDE, 0xAD, 0xBE, 0xEF], &[]);

        assert!(matches!(extract_crl_set(&crx), Err(CrxError::Archive(_))));
    }
}
