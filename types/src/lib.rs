//! Value types shared across the seedkit workspace.
//!
//! Entropy strengths and buffers, word indices, mnemonics and seeds for the
//! BIP39 pipeline, and the versioned payload / checksum types used by
//! Base58Check. Secret-bearing types are zeroized on drop.

pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod payload;

pub use entropy::{ChecksummedEntropy, Entropy, EntropyBits};
pub use error::TypeError;
pub use mnemonic::{Mnemonic, Seed, WordIndex};
pub use payload::{Checksum4, DecodedPayload, VersionedPayload};
