//! Sources of entropy for mnemonic generation.
//!
//! [`OsEntropy`] reads the operating system CSPRNG on every call and holds
//! no state, so it is safe to share between threads. Deterministic sources
//! for tests live in `seedkit-nullables`.

use thiserror::Error;

/// The random source could not produce bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RandomSourceError(pub String);

/// A cryptographically secure source of random bytes.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` completely, or fail without partial success.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError>;

    /// Short identifier used in log output.
    fn name(&self) -> &str;
}

/// The operating system's CSPRNG via `getrandom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        getrandom::getrandom(dest).map_err(|e| RandomSourceError(e.to_string()))
    }

    fn name(&self) -> &str {
        "os"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill_bytes(&mut a).unwrap();
        OsEntropy.fill_bytes(&mut b).unwrap();
        assert_ne!(a, [0u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn os_entropy_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OsEntropy>();
        let source: &dyn EntropySource = &OsEntropy;
        assert_eq!(source.name(), "os");
    }
}
