#![allow(dead_code)]

use std::path::PathBuf;

/// Assemble a CRLSet file from a header JSON string and pre-built blocks.
/// An empty header string produces a zero-length (absent) header.
pub fn crl_set(header_json: &str, blocks: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&(header_json.len() as u16).to_le_bytes());
    buf.extend_from_slice(header_json.as_bytes());
    for block in blocks {
        buf.extend_from_slice(block);
    }
    buf
}

pub fn block(spki: [u8; 32], serials: &[&[u8]]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&spki);
    buf.extend_from_slice(&(serials.len() as u32).to_le_bytes());
    for serial in serials {
        buf.push(serial.len() as u8);
        buf.extend_from_slice(serial);
    }
    buf
}

/// Write `bytes` to a uniquely named file under the system temp directory.
pub fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("crlset-tools-{}-{name}", std::process::id()));
    std::fs::write(&path, bytes).expect("write temp file");
    path
}
