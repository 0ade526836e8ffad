//! Word indices, mnemonic phrases and the seeds derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::EntropyBits;
use crate::error::TypeError;

/// An 11-bit index into a 2048-word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordIndex(u16);

impl WordIndex {
    pub const MAX: u16 = 2047;
    pub const BITS: u32 = 11;

    pub fn new(index: u16) -> Result<Self, TypeError> {
        if index > Self::MAX {
            return Err(TypeError::WordIndexOutOfRange(index));
        }
        Ok(Self(index))
    }

    /// Keep the low 11 bits of `value`.
    pub fn from_masked(value: u32) -> Self {
        Self((value & Self::MAX as u32) as u16)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of mnemonic words.
///
/// The words are secret material: they are zeroized on drop and `Debug`
/// only reports the word count. `Display` prints the space-joined phrase.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Split a phrase on whitespace. Runs of whitespace collapse, so the
    /// result re-joins with single spaces.
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            words: phrase.split_whitespace().map(str::to_owned).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined by a single ASCII space.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// The entropy strength implied by the word count.
    pub fn strength(&self) -> Result<EntropyBits, TypeError> {
        EntropyBits::from_word_count(self.words.len())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic({} words)", self.words.len())
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

/// A 64-byte BIP39 seed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    pub const LEN: usize = 64;

    pub fn new(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_index_bounds() {
        assert_eq!(WordIndex::new(0).unwrap().value(), 0);
        assert_eq!(WordIndex::new(2047).unwrap().value(), 2047);
        assert_eq!(WordIndex::new(2048), Err(TypeError::WordIndexOutOfRange(2048)));
    }

    #[test]
    fn word_index_masks_to_eleven_bits() {
        assert_eq!(WordIndex::from_masked(0x0FFF).value(), 0x07FF);
        assert_eq!(WordIndex::from_masked(0x0800).value(), 0);
        assert_eq!(WordIndex::from_masked(5).as_usize(), 5);
    }

    #[test]
    fn phrase_joins_with_single_space() {
        let m = Mnemonic::from_phrase("  abandon   ability\table ");
        assert_eq!(m.len(), 3);
        assert_eq!(m.phrase(), "abandon ability able");
        assert_eq!(m.to_string(), "abandon ability able");
    }

    #[test]
    fn mnemonic_debug_hides_words() {
        let m = Mnemonic::from_words(vec!["secret".into(), "words".into()]);
        assert_eq!(format!("{m:?}"), "Mnemonic(2 words)");
    }

    #[test]
    fn mnemonic_strength_from_word_count() {
        let words = vec!["abandon".to_string(); 18];
        let m = Mnemonic::from_words(words);
        assert_eq!(m.strength().unwrap(), EntropyBits::Bits192);
        assert!(Mnemonic::from_phrase("one two three").strength().is_err());
    }

    #[test]
    fn seed_hex() {
        let seed = Seed::new([0xAB; 64]);
        assert_eq!(seed.to_hex().len(), 128);
        assert!(seed.to_hex().starts_with("abab"));
        assert_eq!(format!("{seed:?}"), "Seed(..)");
    }
}
