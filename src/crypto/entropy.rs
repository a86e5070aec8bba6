//! Randomness providers
//!
//! Signing and passphrase generation draw randomness through [`EntropySource`]
//! so callers (and tests) decide where it comes from. A source that cannot
//! deliver reports `false` instead of blocking or panicking.

use rand::rngs::OsRng;
use rand::RngCore;

/// A synchronous provider of cryptographically secure random bytes
pub trait EntropySource: Send + Sync {
    /// Fill `buf` completely. Returns `false` when no randomness is available.
    fn fill(&self, buf: &mut [u8]) -> bool;
}

/// Operating system randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> bool {
        OsRng.try_fill_bytes(buf).is_ok()
    }
}

/// A source that is never available; forces deterministic signing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntropy;

impl EntropySource for NoEntropy {
    fn fill(&self, _buf: &mut [u8]) -> bool {
        false
    }
}

/// Repeats a fixed byte pattern. Only for reproducible tests and vectors.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
}

impl FixedEntropy {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        for (dst, src) in buf.iter_mut().zip(self.pattern.iter().cycle()) {
            *dst = *src;
        }
        true
    }
}

/// Draw `N` little-endian 32-bit words from a source
pub fn random_words<const N: usize>(source: &dyn EntropySource) -> Option<[u32; N]> {
    let mut bytes = vec![0u8; N * 4];
    if !source.fill(&mut bytes) {
        return None;
    }

    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Some(words)
}
