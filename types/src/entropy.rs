//! Entropy strengths and the buffers carried through the mnemonic pipeline.
//!
//! BIP39 allows five entropy sizes. Each size fixes the number of checksum
//! bits (`bits / 32`) and therefore the number of mnemonic words
//! (`(bits + bits / 32) / 11`):
//!
//! | bits | checksum bits | words |
//! |------|---------------|-------|
//! | 128  | 4             | 12    |
//! | 160  | 5             | 15    |
//! | 192  | 6             | 18    |
//! | 224  | 7             | 21    |
//! | 256  | 8             | 24    |

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::TypeError;

/// One of the five entropy strengths accepted by BIP39.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum EntropyBits {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    #[default]
    Bits256,
}

impl EntropyBits {
    /// All strengths, weakest first.
    pub const ALL: [Self; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    /// Entropy size in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Number of SHA-256 bits appended as checksum.
    pub fn checksum_bits(&self) -> u32 {
        self.bits() / 32
    }

    /// Total length of entropy plus checksum, always a multiple of 11.
    pub fn total_bits(&self) -> u32 {
        self.bits() + self.checksum_bits()
    }

    /// Number of words in a mnemonic of this strength.
    pub fn word_count(&self) -> usize {
        (self.total_bits() / 11) as usize
    }

    /// Look up the strength producing a mnemonic of `words` words.
    pub fn from_word_count(words: usize) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|s| s.word_count() == words)
            .ok_or(TypeError::UnsupportedWordCount(words))
    }

    /// Look up the strength whose entropy is `len` bytes long.
    pub fn from_byte_len(len: usize) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|s| s.byte_len() == len)
            .ok_or(TypeError::InvalidEntropyLength(len))
    }
}

impl TryFrom<u32> for EntropyBits {
    type Error = TypeError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.bits() == bits)
            .ok_or(TypeError::UnsupportedLength(bits))
    }
}

impl From<EntropyBits> for u32 {
    fn from(strength: EntropyBits) -> Self {
        strength.bits()
    }
}

impl fmt::Display for EntropyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// Raw entropy whose length is one of the BIP39 sizes.
///
/// Bytes are zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    strength: EntropyBits,
}

impl Entropy {
    /// Wrap existing entropy bytes, rejecting lengths BIP39 does not define.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        let strength = EntropyBits::from_byte_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            strength,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn strength(&self) -> EntropyBits {
        self.strength
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy({})", self.strength)
    }
}

/// Entropy followed by its checksum bits, packed most significant bit first.
///
/// Read as an unsigned integer of `total_bits()` width this is
/// `(entropy << checksum_bits) | checksum`. The buffer holds one byte more
/// than the entropy; only the top `checksum_bits` of that byte are used and
/// the rest are zero.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ChecksummedEntropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    strength: EntropyBits,
}

impl ChecksummedEntropy {
    /// Append the top `checksum_bits` of `digest_head` to `entropy`.
    ///
    /// `digest_head` is the first byte of `SHA256(entropy)`; every allowed
    /// strength needs at most 8 checksum bits, so one byte is enough.
    pub fn new(entropy: &Entropy, digest_head: u8) -> Self {
        let strength = entropy.strength();
        let mask = 0xFFu8 << (8 - strength.checksum_bits());
        let mut bytes = Vec::with_capacity(strength.byte_len() + 1);
        bytes.extend_from_slice(entropy.as_bytes());
        bytes.push(digest_head & mask);
        Self { bytes, strength }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn strength(&self) -> EntropyBits {
        self.strength
    }

    /// Number of meaningful bits in the buffer.
    pub fn total_bits(&self) -> usize {
        self.strength.total_bits() as usize
    }

    /// The checksum bits, right-aligned.
    pub fn checksum(&self) -> u8 {
        let cs = self.strength.checksum_bits();
        self.bytes[self.strength.byte_len()] >> (8 - cs)
    }
}

impl fmt::Debug for ChecksummedEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChecksummedEntropy({})", self.strength)
    }
}
