//! Address and alias validation
//!
//! `validate_address` is the cheap format check used on user input: the
//! cleaned address must be exactly `raw_address_length` base58 characters.
//! `verify_address` additionally decodes it and checks the version, network
//! byte and checksum.

use crate::crypto::hash::hash_chain;
use crate::encoding::base58;
use crate::error::{WavesError, WavesResult};
use crate::utils::network_config::NetworkConfig;

use super::address::ADDRESS_BYTES;

/// Characters allowed in an alias name
pub const ALIAS_ALPHABET: &str = "-.0123456789@_abcdefghijklmnopqrstuvwxyz";
pub const ALIAS_MIN_LENGTH: usize = 4;
pub const ALIAS_MAX_LENGTH: usize = 30;

/// Strip the display prefix if present. Idempotent.
pub fn cleanup_optional_prefix<'a>(address: &'a str, config: &NetworkConfig) -> &'a str {
    if config.address_prefix.is_empty() {
        return address;
    }
    address.trim_start_matches(config.address_prefix.as_str())
}

/// Format check: right length, base58 alphabet only
pub fn validate_address(address: &str, config: &NetworkConfig) -> bool {
    let clean = cleanup_optional_prefix(address, config);
    clean.len() == config.raw_address_length
        && clean.chars().all(|c| base58::ALPHABET.contains(c))
}

/// Full check: format, decoded length, version, network and checksum
pub fn verify_address(address: &str, config: &NetworkConfig) -> bool {
    if !validate_address(address, config) {
        return false;
    }
    let bytes = match base58::decode(cleanup_optional_prefix(address, config)) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    if bytes.len() != ADDRESS_BYTES
        || bytes[0] != config.address_version
        || bytes[1] != config.network_byte()
    {
        return false;
    }

    let checksum = hash_chain(&bytes[..22]);
    checksum[..4] == bytes[22..]
}

/// The cleaned address if it passes [`verify_address`], `InvalidAddress` otherwise
pub fn checked_address<'a>(address: &'a str, config: &NetworkConfig) -> WavesResult<&'a str> {
    let clean = cleanup_optional_prefix(address, config);
    if clean.len() != config.raw_address_length {
        return Err(WavesError::invalid_address(format!(
            "Malformed address length: expected {} characters, got {}",
            config.raw_address_length,
            clean.len()
        )));
    }
    if !verify_address(clean, config) {
        return Err(WavesError::invalid_address(format!(
            "{:?} is not a valid address for network '{}'",
            clean, config.network_code
        )));
    }
    Ok(clean)
}

pub fn is_valid_alias_name(alias: &str) -> bool {
    (ALIAS_MIN_LENGTH..=ALIAS_MAX_LENGTH).contains(&alias.len())
        && alias.chars().all(|c| ALIAS_ALPHABET.contains(c))
}
