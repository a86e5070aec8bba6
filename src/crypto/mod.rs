//! Cryptography
//!
//! Composition of hash primitives and curve25519 signatures into the key
//! derivation and signing pipeline:
//!
//! - `hash`: BLAKE2b-256, Keccak-256, SHA-256 and the hash chain
//! - `curve25519`: signatures over Montgomery public keys
//! - `entropy`: injectable randomness providers
//! - `signer`: base58-facing sign/verify with deterministic fallback
//! - `keys`: passphrase → seed → key pair

pub mod curve25519;
pub mod entropy;
pub mod hash;
pub mod keys;
pub mod signer;
pub mod traits;

pub use curve25519::Curve25519Scheme;
pub use entropy::{EntropySource, FixedEntropy, NoEntropy, OsEntropy};
pub use hash::{blake2b256, hash_chain, keccak256, seed_checksum, sha256};
pub use keys::{key_pair_from_passphrase, key_pair_with_nonce, public_key_from_private};
pub use signer::Signer;
pub use traits::SignatureScheme;

use thiserror::Error;

/// Errors from the byte-level signature interface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("invalid private key length: expected 32 bytes, got {0}")]
    InvalidPrivateKeyLength(usize),

    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidPublicKeyLength(usize),

    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("invalid randomness length: expected 64 bytes, got {0}")]
    InvalidRandomLength(usize),
}
