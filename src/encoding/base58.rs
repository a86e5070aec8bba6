//! Base58 codec (Bitcoin alphabet)

use crate::error::{WavesError, WavesResult};

/// The 58-symbol alphabet; `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a base58 string. Fails on any character outside [`ALPHABET`].
pub fn decode(input: &str) -> WavesResult<Vec<u8>> {
    bs58::decode(input)
        .into_vec()
        .map_err(|e| WavesError::invalid_base58(format!("Invalid base58 string: {}", e)))
}

/// Decode into a fixed-size array, failing if the decoded length differs.
pub fn decode_array<const N: usize>(input: &str, what: &str) -> WavesResult<[u8; N]> {
    let bytes = decode(input)?;
    bytes.as_slice().try_into().map_err(|_| {
        WavesError::invalid_base58(format!(
            "{} must decode to {} bytes, got {}",
            what,
            N,
            bytes.len()
        ))
    })
}

/// True when every character belongs to the alphabet. The empty string is valid.
pub fn is_valid(input: &str) -> bool {
    input.chars().all(|c| ALPHABET.contains(c))
}
