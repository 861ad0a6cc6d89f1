use crate::crlset::{Blocks, CrlSet, ParseError, SPKI_HASH_LEN};

/// One revoked certificate: its issuing key's fingerprint and its serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevokedSerial<'a> {
    pub spki: &'a [u8; SPKI_HASH_LEN],
    pub serial: &'a [u8],
}

/// Enumerate revoked serials, optionally restricted to one issuing key.
///
/// Without a filter every serial of every block is produced, in file order.
/// With a filter only serials whose block fingerprint equals it byte-for-byte
/// are produced; a fingerprint matching no block yields an empty sequence,
/// not an error. The whole body is decoded either way, so a truncation after
/// the matching block is still reported.
pub fn revoked_serials<'a>(
    set: &CrlSet<'a>,
    filter: Option<[u8; SPKI_HASH_LEN]>,
) -> Serials<'a> {
    Serials {
        blocks: set.blocks(),
        filter,
        current: None,
    }
}

/// Lazy iterator produced by [`revoked_serials`].
#[derive(Debug)]
pub struct Serials<'a> {
    blocks: Blocks<'a>,
    filter: Option<[u8; SPKI_HASH_LEN]>,
    current: Option<(&'a [u8; SPKI_HASH_LEN], std::vec::IntoIter<&'a [u8]>)>,
}

impl<'a> Iterator for Serials<'a> {
    type Item = Result<RevokedSerial<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((spki, serials)) = &mut self.current {
                if let Some(serial) = serials.next() {
                    return Some(Ok(RevokedSerial { spki, serial }));
                }
                self.current = None;
            }

            match self.blocks.next()? {
                Ok(block) => {
                    if self.filter.is_none_or(|f| f == *block.spki) {
                        self.current = Some((block.spki, block.serials.into_iter()));
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
