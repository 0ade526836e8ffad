//! Encoding primitives for wallet software.
//!
//! - **Base58** with Bitcoin's alphabet and leading-zero preservation
//! - **Base58Check**: version byte + payload + 4-byte double-SHA-256 checksum
//! - **BIP39** mnemonics: entropy → checksum → 11-bit word indices → words,
//!   and PBKDF2-HMAC-SHA512 seed derivation

pub mod base58;
pub mod base58check;
pub mod hash;
pub mod mnemonic;
pub mod random;
pub mod wordlist;

pub use base58::Base58Error;
pub use hash::{sha256, sha256d};
pub use mnemonic::{
    append_checksum, generate_entropy, generate_entropy_bits, mnemonic_from_entropy,
    random_mnemonic_and_seed, to_mnemonic, to_seed, word_indices, MnemonicEngine, MnemonicError,
};
pub use random::{EntropySource, OsEntropy, RandomSourceError};
pub use wordlist::{Wordlist, WORDLIST_LEN};
