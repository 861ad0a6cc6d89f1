use std::fmt;

use serde::Deserialize;

/// Length of a SPKI fingerprint: the SHA-256 digest of a certificate's
/// subject-public-key-info field.
pub const SPKI_HASH_LEN: usize = 32;

/// The JSON header found at the start of every CRLSet file.
///
/// All fields default when absent so that older sets without the
/// interception lists still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrlSetHeader {
    /// Release sequence number, increasing across published sets. Carried,
    /// not enforced.
    #[serde(rename = "Sequence", default)]
    pub sequence: u64,

    #[serde(rename = "NumParents", default)]
    pub num_parents: u64,

    /// Base64 SPKI hashes of keys that are blocked outright.
    #[serde(rename = "BlockedSPKIs", default)]
    pub blocked_spkis: Vec<String>,

    /// Base64 SPKI hashes of keys known to be used for TLS interception.
    #[serde(rename = "KnownInterceptionSPKIs", default)]
    pub known_interception_spkis: Vec<String>,

    /// Base64 SPKI hashes of interception keys that are also blocked.
    #[serde(rename = "BlockedInterceptionSPKIs", default)]
    pub blocked_interception_spkis: Vec<String>,
}

impl CrlSetHeader {
    /// The entries of one policy list.
    pub fn policy_list(&self, list: PolicyList) -> &[String] {
        match list {
            PolicyList::Blocked => &self.blocked_spkis,
            PolicyList::KnownInterception => &self.known_interception_spkis,
            PolicyList::BlockedInterception => &self.blocked_interception_spkis,
        }
    }
}

/// The fixed set of SPKI policy lists a CRLSet header carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyList {
    Blocked,
    KnownInterception,
    BlockedInterception,
}

impl PolicyList {
    pub const ALL: [PolicyList; 3] = [
        PolicyList::Blocked,
        PolicyList::KnownInterception,
        PolicyList::BlockedInterception,
    ];

    /// The header field the list is stored under.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Blocked => "BlockedSPKIs",
            Self::KnownInterception => "KnownInterceptionSPKIs",
            Self::BlockedInterception => "BlockedInterceptionSPKIs",
        }
    }
}

impl fmt::Display for PolicyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One body block: every revoked serial issued under a single key.
///
/// Both the fingerprint and the serials borrow from the decoded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpkiBlock<'a> {
    /// SHA-256 fingerprint of the issuing key's subject-public-key-info.
    pub spki: &'a [u8; SPKI_HASH_LEN],
    /// Revoked serial numbers, as opaque byte strings in file order.
    pub serials: Vec<&'a [u8]>,
}
