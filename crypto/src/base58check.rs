//! Base58Check: versioned, checksummed Base58.
//!
//! Wire layout: `base58(version || payload || checksum)` where
//! `checksum = SHA256(SHA256(version || payload))[0..4]`. This is the
//! layout of Bitcoin addresses and WIF keys (version `0x00` gives
//! addresses starting with `'1'`).
//!
//! Decoding and verification are separate steps: [`decode`] only splits the
//! string into its parts, [`verify`] recomputes the checksum. Use
//! [`decode_verified`] to run both.

use seedkit_types::{Checksum4, DecodedPayload, VersionedPayload};

use crate::base58::{self, Base58Error};
use crate::hash::sha256d;

/// Version byte plus checksum.
pub const MIN_DECODED_LEN: usize = 1 + Checksum4::LEN;

/// Checksum of the bytes produced by [`VersionedPayload::to_bytes`].
fn checksum_of(body: &[u8]) -> Checksum4 {
    let digest = sha256d(body);
    Checksum4([digest[0], digest[1], digest[2], digest[3]])
}

/// Compute the checksum over `version || payload`.
pub fn checksum(version: u8, payload: &[u8]) -> Checksum4 {
    checksum_of(&VersionedPayload::new(version, payload.to_vec()).to_bytes())
}

/// Encode `payload` under `version`.
pub fn encode(version: u8, payload: &[u8]) -> String {
    encode_payload(&VersionedPayload::new(version, payload.to_vec()))
}

/// Encode a [`VersionedPayload`].
pub fn encode_payload(vp: &VersionedPayload) -> String {
    let mut bytes = vp.to_bytes();
    let check = checksum_of(&bytes);
    bytes.extend_from_slice(check.as_bytes());
    base58::encode(&bytes)
}

/// Split a Base58Check string into version, payload and claimed checksum.
///
/// The checksum is NOT verified here; see [`verify`].
pub fn decode(text: &str) -> Result<DecodedPayload, Base58Error> {
    let bytes = base58::decode(text)?;
    if bytes.len() < MIN_DECODED_LEN {
        return Err(Base58Error::TooShort { len: bytes.len() });
    }

    let (body, check) = bytes.split_at(bytes.len() - Checksum4::LEN);
    let mut claimed = [0u8; 4];
    claimed.copy_from_slice(check);

    Ok(DecodedPayload {
        version: body[0],
        payload: body[1..].to_vec(),
        checksum: Checksum4(claimed),
    })
}

/// Recompute the checksum of a decoded payload and compare it with the one
/// carried in the string.
pub fn verify(decoded: &DecodedPayload) -> Result<(), Base58Error> {
    let expected = checksum(decoded.version, &decoded.payload);
    if expected != decoded.checksum {
        tracing::debug!(
            version = decoded.version,
            payload_len = decoded.payload.len(),
            "base58check checksum mismatch"
        );
        return Err(Base58Error::ChecksumMismatch {
            expected,
            actual: decoded.checksum,
        });
    }
    Ok(())
}

/// [`decode`] followed by [`verify`].
pub fn decode_verified(text: &str) -> Result<VersionedPayload, Base58Error> {
    let decoded = decode(text)?;
    verify(&decoded)?;
    Ok(decoded.into_versioned())
}
