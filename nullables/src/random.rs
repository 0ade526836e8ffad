//! Nullable entropy: deterministic random bytes for testing.

use seedkit_crypto::{EntropySource, RandomSourceError};
use std::sync::Mutex;

/// A deterministic entropy source for testing.
///
/// Returns pre-configured byte patterns in order, wrapping around when the
/// sequence is exhausted. Each pattern is repeated to fill the requested
/// buffer. A source built with [`NullEntropy::failing`] always errors.
pub struct NullEntropy {
    outputs: Vec<Vec<u8>>,
    failure: Option<String>,
    index: Mutex<usize>,
}

impl NullEntropy {
    /// Create with a sequence of byte patterns.
    pub fn new(outputs: Vec<Vec<u8>>) -> Self {
        Self {
            outputs,
            failure: None,
            index: Mutex::new(0),
        }
    }

    /// Every call yields exactly `bytes` (repeated if the request is longer).
    pub fn fixed(bytes: &[u8]) -> Self {
        Self::new(vec![bytes.to_vec()])
    }

    /// Every byte of every call is `value`.
    pub fn constant(value: u8) -> Self {
        Self::fixed(&[value])
    }

    /// A source that reports `reason` on every call.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outputs: Vec::new(),
            failure: Some(reason.into()),
            index: Mutex::new(0),
        }
    }

    /// Number of successful fills so far.
    pub fn calls(&self) -> usize {
        self.index.lock().map(|idx| *idx).unwrap_or(0)
    }
}

impl EntropySource for NullEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        if let Some(reason) = &self.failure {
            return Err(RandomSourceError(reason.clone()));
        }
        if self.outputs.is_empty() || self.outputs.iter().any(Vec::is_empty) {
            return Err(RandomSourceError("null entropy has no output configured".into()));
        }

        let mut idx = self
            .index
            .lock()
            .map_err(|_| RandomSourceError("null entropy lock poisoned".into()))?;
        let pattern = &self.outputs[*idx % self.outputs.len()];
        *idx += 1;

        for (byte, value) in dest.iter_mut().zip(pattern.iter().cycle()) {
            *byte = *value;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "null-entropy"
    }
}
