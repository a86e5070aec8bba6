//! Curve25519 signatures over Montgomery public keys
//!
//! Accounts publish the X25519 (Montgomery u) form of their public key, but
//! sign with the twisted Edwards form of the same scalar. The sign bit of the
//! Edwards x-coordinate is lost in the Montgomery encoding, so it travels in
//! the top bit of the last signature byte instead.
//!
//! Signing:
//! - `a = clamp(sk)`, `A = a·B` (compressed Edwards)
//! - `r = H(a ‖ m)` or, with 64 random bytes `z`, `r = H(0xFE ‖ 0xFF×31 ‖ a ‖ m ‖ z)`
//! - `R = r·B`, `S = r + H(R ‖ A ‖ m)·a`
//! - signature = `R ‖ S` with `sign(A)` stored in bit 7 of byte 63
//!
//! `H` is SHA-512 reduced modulo the group order.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::traits::SignatureScheme;
use super::SignatureError;

pub const PRIVATE_KEY_LENGTH: usize = 32;
pub const PUBLIC_KEY_LENGTH: usize = 32;
pub const SIGNATURE_LENGTH: usize = 64;
pub const RANDOM_LENGTH: usize = 64;

/// Clear the low three bits and the top bit, set bit 254.
pub fn clamp(seed: &[u8; 32]) -> [u8; 32] {
    let mut key = *seed;
    key[0] &= 248;
    key[31] &= 127;
    key[31] |= 64;
    key
}

fn hash_to_scalar(parts: &[&[u8]]) -> Scalar {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hasher.finalize());
    Scalar::from_bytes_mod_order_wide(&wide)
}

fn randomized_prefix() -> [u8; 32] {
    let mut prefix = [0xFF; 32];
    prefix[0] = 0xFE;
    prefix
}

/// Montgomery public key of a private key
pub fn public_key(private_key: &[u8; 32]) -> [u8; 32] {
    let clamped = Zeroizing::new(clamp(private_key));
    let a = Scalar::from_bytes_mod_order(*clamped);
    EdwardsPoint::mul_base(&a).to_montgomery().to_bytes()
}

/// Sign `message`. Passing `random` selects the randomized nonce; `None` is deterministic.
pub fn sign(private_key: &[u8; 32], message: &[u8], random: Option<&[u8; RANDOM_LENGTH]>) -> [u8; 64] {
    let clamped = Zeroizing::new(clamp(private_key));
    let a = Scalar::from_bytes_mod_order(*clamped);
    let public = EdwardsPoint::mul_base(&a).compress();
    let sign_bit = public.as_bytes()[31] & 0x80;

    let r = match random {
        Some(random) => hash_to_scalar(&[&randomized_prefix(), &clamped[..], message, &random[..]]),
        None => hash_to_scalar(&[&clamped[..], message]),
    };
    let big_r = EdwardsPoint::mul_base(&r).compress();
    let h = hash_to_scalar(&[big_r.as_bytes(), public.as_bytes(), message]);
    let s = r + h * a;

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(big_r.as_bytes());
    signature[32..].copy_from_slice(s.as_bytes());
    signature[63] |= sign_bit;
    signature
}

/// Verify a signature against a Montgomery public key. Never panics.
pub fn verify(public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> bool {
    let sign = signature[63] >> 7;
    let edwards = match MontgomeryPoint(*public_key).to_edwards(sign) {
        Some(point) => point,
        None => return false,
    };
    let public = edwards.compress();

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);
    s_bytes[31] &= 0x7F;

    let s = match Option::<Scalar>::from(Scalar::from_canonical_bytes(s_bytes)) {
        Some(s) => s,
        None => return false,
    };

    let h = hash_to_scalar(&[&r_bytes, public.as_bytes(), message]);
    let expected: CompressedEdwardsY =
        EdwardsPoint::vartime_double_scalar_mul_basepoint(&h, &(-edwards), &s).compress();

    expected.as_bytes()[..].ct_eq(&r_bytes[..]).into()
}

// MARK: - Scheme

/// Byte-slice interface over the functions above
pub struct Curve25519Scheme;

fn to_array<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    bytes.try_into().ok()
}

impl SignatureScheme for Curve25519Scheme {
    type PrivateKey = [u8; PRIVATE_KEY_LENGTH];
    type PublicKey = [u8; PUBLIC_KEY_LENGTH];
    type Signature = [u8; SIGNATURE_LENGTH];

    fn keypair_from_seed(seed: &[u8]) -> Result<(Self::PrivateKey, Self::PublicKey), SignatureError> {
        let seed: [u8; 32] =
            to_array(seed).ok_or(SignatureError::InvalidPrivateKeyLength(seed.len()))?;
        let private = clamp(&seed);
        let public = public_key(&private);
        Ok((private, public))
    }

    fn public_key_from_private(private_key: &[u8]) -> Result<Self::PublicKey, SignatureError> {
        let key = Zeroizing::new(
            to_array::<32>(private_key)
                .ok_or(SignatureError::InvalidPrivateKeyLength(private_key.len()))?,
        );
        Ok(public_key(&key))
    }

    fn sign(
        private_key: &[u8],
        message: &[u8],
        random: Option<&[u8]>,
    ) -> Result<Self::Signature, SignatureError> {
        let key = Zeroizing::new(
            to_array::<32>(private_key)
                .ok_or(SignatureError::InvalidPrivateKeyLength(private_key.len()))?,
        );
        match random {
            Some(random) => {
                let random: [u8; RANDOM_LENGTH] =
                    to_array(random).ok_or(SignatureError::InvalidRandomLength(random.len()))?;
                Ok(sign(&key, message, Some(&random)))
            }
            None => Ok(sign(&key, message, None)),
        }
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool, SignatureError> {
        let public: [u8; 32] =
            to_array(public_key).ok_or(SignatureError::InvalidPublicKeyLength(public_key.len()))?;
        let signature: [u8; 64] =
            to_array(signature).ok_or(SignatureError::InvalidSignatureLength(signature.len()))?;
        Ok(verify(&public, message, &signature))
    }
}
