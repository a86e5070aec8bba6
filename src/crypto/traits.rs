//! Signature Scheme Trait
//!
//! Common byte-slice interface for signature schemes, so callers holding
//! decoded key material do not depend on a concrete curve module.

use super::SignatureError;

/// Core trait for signature scheme operations
pub trait SignatureScheme {
    /// The private key type
    type PrivateKey: AsRef<[u8]>;
    /// The public key type
    type PublicKey: AsRef<[u8]>;
    /// The signature type
    type Signature: AsRef<[u8]>;

    /// Derive a key pair from a 32-byte seed
    fn keypair_from_seed(seed: &[u8]) -> Result<(Self::PrivateKey, Self::PublicKey), SignatureError>;

    /// Derive the public key from a private key
    fn public_key_from_private(private_key: &[u8]) -> Result<Self::PublicKey, SignatureError>;

    /// Sign a message, optionally mixing in caller-supplied randomness
    fn sign(
        private_key: &[u8],
        message: &[u8],
        random: Option<&[u8]>,
    ) -> Result<Self::Signature, SignatureError>;

    /// Verify a signature
    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool, SignatureError>;
}
