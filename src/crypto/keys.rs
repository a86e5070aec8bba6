//! Passphrase → key pair derivation
//!
//! `seed = sha256(hash_chain(be32(nonce) ‖ utf8(passphrase)))`, then the
//! curve25519 key pair of that seed. The nonce lets one passphrase derive
//! several accounts; the configured initial nonce selects the primary one.

use zeroize::Zeroizing;

use super::curve25519::{self, Curve25519Scheme};
use super::hash::{hash_chain, sha256};
use super::traits::SignatureScheme;
use crate::encoding::{base58, int_to_bytes};
use crate::error::WavesResult;
use crate::types::KeyPair;
use crate::utils::network_config::NetworkConfig;

/// `be32(nonce) ‖ utf8(passphrase)`
pub fn build_seed_bytes(passphrase: &str, nonce: u32) -> Zeroizing<Vec<u8>> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(4 + passphrase.len()));
    bytes.extend_from_slice(&int_to_bytes(nonce));
    bytes.extend_from_slice(passphrase.as_bytes());
    bytes
}

/// The 32-byte account seed the key pair is derived from
pub fn account_seed_hash(passphrase: &str, nonce: u32) -> Zeroizing<[u8; 32]> {
    let seed = build_seed_bytes(passphrase, nonce);
    let chained = Zeroizing::new(hash_chain(&seed));
    Zeroizing::new(sha256(&chained[..]))
}

/// Key pair for an explicit nonce
pub fn key_pair_with_nonce(passphrase: &str, nonce: u32) -> KeyPair {
    let seed = account_seed_hash(passphrase, nonce);
    let private = Zeroizing::new(curve25519::clamp(&seed));
    let public = curve25519::public_key(&private);

    KeyPair {
        public_key: base58::encode(&public),
        private_key: base58::encode(&private[..]),
    }
}

/// Key pair of the primary account for `config`
pub fn key_pair_from_passphrase(passphrase: &str, config: &NetworkConfig) -> KeyPair {
    key_pair_with_nonce(passphrase, config.initial_nonce)
}

/// Base58 public key of a base58 private key
pub fn public_key_from_private(private_key: &str) -> WavesResult<String> {
    let private = Zeroizing::new(base58::decode(private_key)?);
    Ok(base58::encode(&Curve25519Scheme::public_key_from_private(&private)?))
}

/// First 20 bytes of the hash chain of a public key
pub fn public_key_hash(public_key: &[u8]) -> [u8; 20] {
    let digest = hash_chain(public_key);
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[..20]);
    out
}
