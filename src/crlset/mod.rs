//! CRLSet codec.
//!
//! A CRLSet file is a 2-byte little-endian length, a JSON header of that
//! length, then a sequence of blocks until end of file. Each block is a
//! 32-byte SPKI fingerprint, a u32 serial count and that many
//! length-prefixed serial numbers. The two-byte header length is narrower
//! than the u32 fields used everywhere else in the format; that asymmetry is
//! part of the wire format.
//!
//! # Decoding
//! - The header is materialized into an owned [`CrlSetHeader`]; malformed
//!   header JSON fails the whole file.
//! - The body is decoded lazily: [`CrlSet::blocks`] yields one
//!   [`SpkiBlock`] at a time and any truncation aborts iteration with the
//!   exact stage that ran short. Blocks already yielded stay valid; callers
//!   needing all-or-nothing semantics must collect first.

mod errors;
mod parser;
mod types;

pub use errors::ParseError;
pub use parser::{Blocks, CrlSet};
pub use types::{CrlSetHeader, PolicyList, SPKI_HASH_LEN, SpkiBlock};
