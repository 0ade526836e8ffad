//! Base58Check payload types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The first four bytes of `SHA256(SHA256(version || payload))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum4(pub [u8; 4]);

impl Checksum4 {
    pub const LEN: usize = 4;

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for Checksum4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A version byte and the payload it tags, before checksumming.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedPayload {
    pub version: u8,
    pub payload: Vec<u8>,
}

impl VersionedPayload {
    pub fn new(version: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            payload: payload.into(),
        }
    }

    /// `version || payload`, the bytes the checksum covers.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.payload.len());
        bytes.push(self.version);
        bytes.extend_from_slice(&self.payload);
        bytes
    }
}

/// The three parts of a decoded Base58Check string.
///
/// `checksum` is the value found in the string. It has not been compared
/// with a freshly computed one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPayload {
    pub version: u8,
    pub payload: Vec<u8>,
    pub checksum: Checksum4,
}

impl DecodedPayload {
    /// Drop the claimed checksum.
    pub fn into_versioned(self) -> VersionedPayload {
        VersionedPayload {
            version: self.version,
            payload: self.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_bytes_prefix_version() {
        let vp = VersionedPayload::new(0x80, vec![1, 2, 3]);
        assert_eq!(vp.to_bytes(), vec![0x80, 1, 2, 3]);
    }

    #[test]
    fn empty_payload_is_just_version() {
        let vp = VersionedPayload::new(5, Vec::new());
        assert_eq!(vp.to_bytes(), vec![5]);
    }

    #[test]
    fn checksum_displays_as_hex() {
        assert_eq!(Checksum4([0xde, 0xad, 0xbe, 0xef]).to_string(), "deadbeef");
    }

    #[test]
    fn into_versioned_keeps_version_and_payload() {
        let decoded = DecodedPayload {
            version: 111,
            payload: vec![9, 9],
            checksum: Checksum4([0; 4]),
        };
        assert_eq!(decoded.into_versioned(), VersionedPayload::new(111, vec![9, 9]));
    }
}
