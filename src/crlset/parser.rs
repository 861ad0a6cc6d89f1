use tracing::debug;

use super::errors::ParseError;
use super::types::{CrlSetHeader, SPKI_HASH_LEN, SpkiBlock};
use crate::cursor::{ByteCursor, Stage, Truncated};

/// A decoded CRLSet: the materialized header plus the undecoded body.
///
/// Borrows the caller's buffer; body blocks are only decoded when iterated.
#[derive(Debug, Clone)]
pub struct CrlSet<'a> {
    header: CrlSetHeader,
    body: &'a [u8],
}

impl<'a> CrlSet<'a> {
    /// Decode the length-prefixed JSON header and validate that it fits.
    ///
    /// The body is not touched yet; its blocks decode lazily via
    /// [`CrlSet::blocks`].
    pub fn parse(buf: &'a [u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(buf);

        let header_len = cursor.read_u16_le(Stage::HeaderLen)?;
        let header_bytes = cursor.take(header_len as usize, Stage::Header)?;
        // A zero-length header is an absent header, not malformed JSON.
        let header: CrlSetHeader = if header_bytes.is_empty() {
            CrlSetHeader::default()
        } else {
            serde_json::from_slice(header_bytes)?
        };
        debug!(
            sequence = header.sequence,
            body_len = cursor.remaining(),
            "parsed CRLSet header"
        );

        Ok(Self {
            header,
            body: cursor.rest(),
        })
    }

    pub fn header(&self) -> &CrlSetHeader {
        &self.header
    }

    /// A fresh iterator over the body blocks. Each call restarts from the
    /// first block; an iterator cannot be rewound in place.
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks {
            cursor: ByteCursor::new(self.body),
            failed: false,
        }
    }

    /// The block covering the given issuing key, if any.
    ///
    /// The preceding blocks are decoded (and validated) along the way, so a
    /// truncated body still reports its error even when the fingerprint
    /// would have matched an earlier block.
    pub fn find_by_spki(&self, spki: &[u8; SPKI_HASH_LEN]) -> Result<Option<SpkiBlock<'a>>, ParseError> {
        for block in self.blocks() {
            let block = block?;
            if block.spki == spki {
                return Ok(Some(block));
            }
        }
        Ok(None)
    }
}

/// Lazy iterator over the body's blocks.
///
/// Yields each fully decoded block, or the first decode error; after an
/// error the iterator is fused. End of the buffer ends iteration — the
/// format has no terminator.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    cursor: ByteCursor<'a>,
    failed: bool,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Result<SpkiBlock<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_empty() {
            return None;
        }
        match read_block(&mut self.cursor) {
            Ok(block) => Some(Ok(block)),
            Err(err) => {
                self.failed = true;
                Some(Err(err.into()))
            }
        }
    }
}

fn read_block<'a>(cursor: &mut ByteCursor<'a>) -> Result<SpkiBlock<'a>, Truncated> {
    let spki = cursor.take_array::<SPKI_HASH_LEN>(Stage::SpkiHash)?;
    let count = cursor.read_u32_le(Stage::SerialCount)?;

    // The count is attacker-controlled, so no preallocation from it.
    let mut serials = Vec::new();
    for _ in 0..count {
        let len = cursor.read_u8(Stage::SerialLen)?;
        serials.push(cursor.take(len as usize, Stage::Serial)?);
    }

    Ok(SpkiBlock { spki, serials })
}
