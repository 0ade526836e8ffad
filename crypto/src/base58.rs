//! Base58 encoding with Bitcoin's alphabet.
//!
//! The input is treated as a big-endian base-256 integer and converted by
//! long division into a fixed scratch buffer. Leading zero bytes carry no
//! magnitude, so they are counted separately and emitted as leading `'1'`
//! characters (and decoded back the same way).

use seedkit_types::Checksum4;
use thiserror::Error;

/// Bitcoin's Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

/// Reverse lookup table: byte → digit value (0xFF = invalid).
const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 58 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Errors from Base58 and Base58Check decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("decoded data too short: {len} bytes, need at least 5")]
    TooShort { len: usize },

    #[error("checksum mismatch: computed {expected}, found {actual}")]
    ChecksumMismatch {
        expected: Checksum4,
        actual: Checksum4,
    },
}

/// Encode bytes as Base58.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // log(256) / log(58) ~= 1.37, rounded up.
    let size = (data.len() - zeros) * 138 / 100 + 1;
    let mut buf = vec![0u8; size];
    let mut length = 0;

    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        let mut i = 0;
        for digit in buf.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
            i += 1;
        }
        debug_assert_eq!(carry, 0, "base58 scratch buffer overflow");
        length = i;
    }

    let skip = buf.iter().take_while(|&&d| d == 0).count();
    let mut out = String::with_capacity(zeros + size - skip);
    out.extend(std::iter::repeat('1').take(zeros));
    out.extend(buf[skip..].iter().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Decode a Base58 string.
///
/// Fails with [`Base58Error::InvalidCharacter`] at the first byte outside
/// the alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let input = text.as_bytes();
    let zeros = input.iter().take_while(|&&c| c == b'1').count();

    // log(58) / log(256) ~= 0.732, rounded up.
    let size = (input.len() - zeros) * 733 / 1000 + 1;
    let mut buf = vec![0u8; size];
    let mut length = 0;

    for (index, &c) in input.iter().enumerate().skip(zeros) {
        let value = DECODE_TABLE[c as usize];
        if value == INVALID {
            // Everything before `index` was ASCII, so it is a char boundary.
            let character = text[index..].chars().next().unwrap_or(c as char);
            return Err(Base58Error::InvalidCharacter { character, index });
        }

        let mut carry = value as u32;
        let mut i = 0;
        for byte in buf.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
            i += 1;
        }
        debug_assert_eq!(carry, 0, "base256 scratch buffer overflow");
        length = i;
    }

    let skip = buf.iter().take_while(|&&b| b == 0).count();
    let mut out = Vec::with_capacity(zeros + size - skip);
    out.resize(zeros, 0);
    out.extend_from_slice(&buf[skip..]);
    Ok(out)
}

/// Whether every character of `text` is in the Base58 alphabet.
pub fn is_valid(text: &str) -> bool {
    text.bytes().all(|c| DECODE_TABLE[c as usize] != INVALID)
}
