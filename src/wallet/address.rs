//! Address derivation
//!
//! ```text
//! body     = [address_version, network_byte] ‖ hash_chain(public_key)[..20]
//! checksum = hash_chain(body)[..4]
//! address  = base58(body ‖ checksum)
//! ```

use zeroize::Zeroizing;

use crate::crypto::hash::hash_chain;
use crate::crypto::keys::{key_pair_with_nonce, public_key_hash};
use crate::encoding::base58;
use crate::error::WavesResult;
use crate::types::KeyPair;
use crate::utils::network_config::NetworkConfig;

/// Decoded length of an address
pub const ADDRESS_BYTES: usize = 26;
const CHECKSUM_LENGTH: usize = 4;

/// Address bytes of a raw 32-byte public key
pub fn address_bytes(public_key: &[u8; 32], config: &NetworkConfig) -> [u8; ADDRESS_BYTES] {
    let mut out = [0u8; ADDRESS_BYTES];
    out[0] = config.address_version;
    out[1] = config.network_byte();
    out[2..22].copy_from_slice(&public_key_hash(public_key));

    let checksum = hash_chain(&out[..22]);
    out[22..].copy_from_slice(&checksum[..CHECKSUM_LENGTH]);
    out
}

/// Raw (unprefixed) address of a base58 public key
pub fn build_raw_address(public_key: &str, config: &NetworkConfig) -> WavesResult<String> {
    let key = base58::decode_array::<32>(public_key, "Public key")?;
    Ok(base58::encode(&address_bytes(&key, config)))
}

/// Keys and address derived from a passphrase
#[derive(Debug, Clone)]
pub struct DerivedAccount {
    pub keys: KeyPair,
    pub address: String,
    pub nonce: u32,
}

/// Primary account of a passphrase on the configured network
pub fn address_from_passphrase(passphrase: &str, config: &NetworkConfig) -> WavesResult<DerivedAccount> {
    derive_account(passphrase, config.initial_nonce, config)
}

/// Account for an explicit nonce
pub fn derive_account(passphrase: &str, nonce: u32, config: &NetworkConfig) -> WavesResult<DerivedAccount> {
    let phrase = Zeroizing::new(passphrase.to_string());
    let keys = key_pair_with_nonce(&phrase, nonce);
    let address = build_raw_address(&keys.public_key, config)?;
    Ok(DerivedAccount {
        keys,
        address,
        nonce,
    })
}

/// Raw address with the display prefix, e.g. `1W3P...`
pub fn to_display_address(raw_address: &str, config: &NetworkConfig) -> String {
    if raw_address.starts_with(&config.address_prefix) {
        raw_address.to_string()
    } else {
        format!("{}{}", config.address_prefix, raw_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str =
        "manage manual recall harvest series desert melt police rose hollow moral pledge kitten position add";

    #[test]
    fn test_mainnet_address() {
        let account = address_from_passphrase(PHRASE, &NetworkConfig::mainnet()).unwrap();
        assert_eq!(account.address, "3PPbMwqLtwBGcJrTA5whqJfY95GqnNnFMDX");
        assert_eq!(account.keys.public_key, "HBqhfdFASRQ5eBBpu2y6c6KKi1az6bMx8v1JxX4iW1Q8");
        assert_eq!(account.nonce, 0);
    }

    #[test]
    fn test_testnet_address() {
        let raw = build_raw_address(
            "HBqhfdFASRQ5eBBpu2y6c6KKi1az6bMx8v1JxX4iW1Q8",
            &NetworkConfig::testnet(),
        )
        .unwrap();
        assert_eq!(raw, "3NBaYzWT2odsyrZ2u1ghsrHinBm4xFRAgLX");
    }

    #[test]
    fn test_address_is_deterministic() {
        let config = NetworkConfig::testnet();
        let a = address_from_passphrase(PHRASE, &config).unwrap();
        let b = address_from_passphrase(PHRASE, &config).unwrap();
        assert_eq!(a.address, b.address);
        assert_ne!(derive_account(PHRASE, 1, &config).unwrap().address, a.address);
    }

    #[test]
    fn test_display_prefix() {
        let config = NetworkConfig::mainnet();
        let display = to_display_address("3PPbMwqLtwBGcJrTA5whqJfY95GqnNnFMDX", &config);
        assert_eq!(display, "1W3PPbMwqLtwBGcJrTA5whqJfY95GqnNnFMDX");
        assert_eq!(to_display_address(&display, &config), display);
    }

    #[test]
    fn test_bad_public_key() {
        assert!(build_raw_address("abc", &NetworkConfig::mainnet()).is_err());
        assert!(build_raw_address("0OIl", &NetworkConfig::mainnet()).is_err());
    }
}
