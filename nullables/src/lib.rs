//! Nullable infrastructure for deterministic testing.
//!
//! Randomness is the only external dependency of the seedkit core. This
//! crate provides an [`EntropySource`](seedkit_crypto::EntropySource) that
//! returns controlled bytes, or fails on demand, so the mnemonic pipeline
//! can be tested against fixed vectors.

pub mod random;

pub use random::NullEntropy;
