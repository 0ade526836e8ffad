//! BIP39 mnemonic generation and seed derivation.
//!
//! Pipeline:
//! 1. Draw `bits / 8` bytes of entropy from an [`EntropySource`]
//! 2. Append the top `bits / 32` bits of `SHA256(entropy)` as checksum
//! 3. Slice the result into 11-bit word indices, most significant first
//! 4. Look each index up in a 2048-word [`Wordlist`]
//! 5. Stretch the space-joined phrase with PBKDF2-HMAC-SHA512
//!    (salt `"mnemonic" + passphrase`, 2048 rounds) into a 64-byte seed
//!
//! No Unicode normalization is applied to words or passphrase.

use hmac::Hmac;
use seedkit_types::{ChecksummedEntropy, Entropy, EntropyBits, Mnemonic, Seed, TypeError, WordIndex};
use sha2::Sha512;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::hash::sha256;
use crate::random::{EntropySource, OsEntropy, RandomSourceError};
use crate::wordlist::Wordlist;

/// PBKDF2 iteration count fixed by BIP39.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Prefix of the PBKDF2 salt.
pub const SALT_PREFIX: &str = "mnemonic";

/// Errors arising from mnemonic operations.
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("unsupported entropy length: {0} bits (expected 128, 160, 192, 224 or 256)")]
    UnsupportedLength(u32),

    #[error("random source failure: {0}")]
    RandomSourceFailure(#[from] RandomSourceError),

    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),

    #[error("seed derivation failed: {0}")]
    SeedDerivation(String),

    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Draw fresh entropy of the given strength.
///
/// A failing source is reported as [`MnemonicError::RandomSourceFailure`];
/// nothing is retried.
pub fn generate_entropy(
    strength: EntropyBits,
    source: &dyn EntropySource,
) -> Result<Entropy, MnemonicError> {
    let mut bytes = Zeroizing::new(vec![0u8; strength.byte_len()]);
    source.fill_bytes(&mut bytes)?;
    tracing::debug!(bits = strength.bits(), source = source.name(), "generated entropy");
    Ok(Entropy::from_bytes(&bytes)?)
}

/// [`generate_entropy`] for a raw bit count.
pub fn generate_entropy_bits(
    bits: u32,
    source: &dyn EntropySource,
) -> Result<Entropy, MnemonicError> {
    let strength =
        EntropyBits::try_from(bits).map_err(|_| MnemonicError::UnsupportedLength(bits))?;
    generate_entropy(strength, source)
}

/// Append the SHA-256 checksum bits to `entropy`.
pub fn append_checksum(entropy: &Entropy) -> ChecksummedEntropy {
    let digest = sha256(entropy.as_bytes());
    ChecksummedEntropy::new(entropy, digest[0])
}

/// Slice checksummed entropy into consecutive 11-bit word indices.
pub fn word_indices(checksummed: &ChecksummedEntropy) -> Vec<WordIndex> {
    let count = checksummed.strength().word_count();
    let mut indices = Vec::with_capacity(count);

    let mut buffer: u32 = 0;
    let mut bits_in_buffer = 0;

    for &byte in checksummed.as_bytes() {
        buffer = (buffer << 8) | byte as u32;
        bits_in_buffer += 8;
        if bits_in_buffer >= WordIndex::BITS {
            bits_in_buffer -= WordIndex::BITS;
            indices.push(WordIndex::from_masked(buffer >> bits_in_buffer));
            buffer &= (1 << bits_in_buffer) - 1;
            if indices.len() == count {
                break;
            }
        }
    }

    indices
}

/// Map checksummed entropy onto words from `wordlist`.
pub fn to_mnemonic(checksummed: &ChecksummedEntropy, wordlist: &Wordlist) -> Mnemonic {
    let words = word_indices(checksummed)
        .into_iter()
        .map(|index| wordlist.word(index).to_owned())
        .collect();
    Mnemonic::from_words(words)
}

/// [`append_checksum`] followed by [`to_mnemonic`].
pub fn mnemonic_from_entropy(entropy: &Entropy, wordlist: &Wordlist) -> Mnemonic {
    to_mnemonic(&append_checksum(entropy), wordlist)
}

/// Derive the 64-byte seed for `mnemonic` and `passphrase`.
pub fn to_seed(mnemonic: &Mnemonic, passphrase: &str) -> Result<Seed, MnemonicError> {
    let password = Zeroizing::new(mnemonic.phrase());
    let salt = Zeroizing::new(format!("{SALT_PREFIX}{passphrase}"));

    let mut seed = [0u8; Seed::LEN];
    pbkdf2::pbkdf2::<Hmac<Sha512>>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    )
    .map_err(|e| MnemonicError::SeedDerivation(e.to_string()))?;

    tracing::trace!(words = mnemonic.len(), "derived seed");
    Ok(Seed::new(seed))
}

/// Generate entropy, turn it into a mnemonic and derive its seed.
pub fn random_mnemonic_and_seed(
    strength: EntropyBits,
    wordlist: &Wordlist,
    passphrase: &str,
    source: &dyn EntropySource,
) -> Result<(Seed, Mnemonic), MnemonicError> {
    let entropy = generate_entropy(strength, source)?;
    let mnemonic = mnemonic_from_entropy(&entropy, wordlist);
    let seed = to_seed(&mnemonic, passphrase)?;
    Ok((seed, mnemonic))
}

/// A wordlist paired with an entropy source.
pub struct MnemonicEngine {
    wordlist: Wordlist,
    source: Box<dyn EntropySource>,
}

impl MnemonicEngine {
    pub fn new(wordlist: Wordlist, source: Box<dyn EntropySource>) -> Self {
        Self { wordlist, source }
    }

    /// English words, OS randomness.
    pub fn english() -> Self {
        Self::new(Wordlist::english(), Box::new(OsEntropy))
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn generate_entropy(&self, strength: EntropyBits) -> Result<Entropy, MnemonicError> {
        generate_entropy(strength, self.source.as_ref())
    }

    pub fn mnemonic(&self, entropy: &Entropy) -> Mnemonic {
        mnemonic_from_entropy(entropy, &self.wordlist)
    }

    pub fn generate(
        &self,
        strength: EntropyBits,
        passphrase: &str,
    ) -> Result<(Seed, Mnemonic), MnemonicError> {
        random_mnemonic_and_seed(strength, &self.wordlist, passphrase, self.source.as_ref())
    }
}
