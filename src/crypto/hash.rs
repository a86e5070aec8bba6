//! Hash primitives and the two-stage hash chain used by key derivation

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use sha2::Sha256;
use tiny_keccak::{Hasher, Keccak};

type Blake2b256 = Blake2b<U32>;

/// BLAKE2b with a 32-byte digest
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2b256::digest(data));
    out
}

/// Keccak-256 (the pre-standard padding, not SHA3-256)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(data));
    out
}

/// `keccak256(blake2b256(data))`
pub fn hash_chain(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}

/// Hex SHA-256 of a passphrase; identifies a seed without revealing it
pub fn seed_checksum(passphrase: &str) -> String {
    hex::encode(sha256(passphrase.as_bytes()))
}
