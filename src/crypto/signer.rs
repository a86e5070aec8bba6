//! Base58-facing signer
//!
//! Wraps [`Curve25519Scheme`] for callers that hold base58 key strings.
//! Signatures are randomized whenever the injected entropy source delivers
//! and fall back to the deterministic nonce otherwise.

use std::fmt;
use std::sync::Arc;

use zeroize::Zeroizing;

use super::curve25519::{Curve25519Scheme, RANDOM_LENGTH};
use super::entropy::{EntropySource, NoEntropy, OsEntropy};
use super::traits::SignatureScheme;
use crate::encoding::base58;
use crate::error::{WavesError, WavesResult};
use crate::log_debug;

#[derive(Clone)]
pub struct Signer {
    entropy: Arc<dyn EntropySource>,
}

impl Signer {
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// A signer whose signatures depend only on key and message
    pub fn deterministic() -> Self {
        Self::new(Arc::new(NoEntropy))
    }

    pub fn entropy(&self) -> &dyn EntropySource {
        self.entropy.as_ref()
    }

    /// Sign `data` with a base58 private key, returning a base58 signature
    pub fn sign(&self, private_key: &str, data: &[u8]) -> WavesResult<String> {
        let key = Zeroizing::new(base58::decode(private_key)?);

        let mut buffer = Zeroizing::new([0u8; RANDOM_LENGTH]);
        let random = if self.entropy.fill(&mut buffer[..]) {
            Some(&buffer[..])
        } else {
            log_debug!("crypto::signer", "Entropy unavailable, using deterministic signature");
            None
        };

        sign_with(&key, data, random)
    }

    /// Deterministic signature regardless of the entropy source
    pub fn sign_deterministic(&self, private_key: &str, data: &[u8]) -> WavesResult<String> {
        let key = Zeroizing::new(base58::decode(private_key)?);
        sign_with(&key, data, None)
    }

    /// Verify a base58 signature. Malformed inputs verify as `false`.
    pub fn verify(&self, public_key: &str, data: &[u8], signature: &str) -> bool {
        verify(public_key, data, signature)
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::new(Arc::new(OsEntropy))
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer").finish_non_exhaustive()
    }
}

fn sign_with(private_key: &[u8], data: &[u8], random: Option<&[u8]>) -> WavesResult<String> {
    let signature = Curve25519Scheme::sign(private_key, data, random)
        .map_err(|e| WavesError::signing_failed(e.to_string()))?;
    Ok(base58::encode(&signature))
}

/// Verify a base58 signature against a base58 public key
pub fn verify(public_key: &str, data: &[u8], signature: &str) -> bool {
    match (base58::decode(public_key), base58::decode(signature)) {
        (Ok(public), Ok(signature)) => {
            Curve25519Scheme::verify(&public, data, &signature).unwrap_or(false)
        }
        _ => false,
    }
}
