//! Recipients: a raw address or an alias
//!
//! Aliases are written as `alias:<network code>:<name>` in request objects.
//! A bare string short enough to be an alias name is taken as one on the
//! configured network; anything longer is an address. Both are checked
//! here, so a recipient that parses always has valid wire bytes.

use crate::encoding::{base58, byte_array_with_size, string_to_bytes_with_size};
use crate::error::{WavesError, WavesResult};
use crate::utils::network_config::NetworkConfig;
use crate::wallet::address_validation::{checked_address, is_valid_alias_name, ALIAS_MAX_LENGTH};

const ALIAS_MARKER: &str = "alias:";
/// `alias:` plus the network code and its separator
const ALIAS_HEADER_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Address(String),
    Alias { network: char, name: String },
}

impl Recipient {
    pub fn parse(input: &str, config: &NetworkConfig) -> WavesResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(WavesError::missing_field("Recipient account hasn't been set"));
        }

        if let Some(rest) = input.strip_prefix(ALIAS_MARKER) {
            let network = rest.chars().next().unwrap_or(config.network_code);
            let name = input.get(ALIAS_HEADER_LENGTH..).unwrap_or_default();
            if name.is_empty() {
                return Err(WavesError::invalid_input(format!("Alias name is missing in {:?}", input)));
            }
            return Self::alias(network, name);
        }

        if input.chars().count() <= ALIAS_MAX_LENGTH {
            return Self::alias(config.network_code, input);
        }

        Ok(Recipient::Address(checked_address(input, config)?.to_string()))
    }

    fn alias(network: char, name: &str) -> WavesResult<Self> {
        if !is_valid_alias_name(name) {
            return Err(WavesError::invalid_address(format!(
                "Invalid recipient alias {:?}: 4 to 30 characters of lowercase letters, digits and -.@_",
                name
            )));
        }
        Ok(Recipient::Alias {
            network,
            name: name.to_string(),
        })
    }

    /// Form used in request objects
    pub fn to_request_string(&self) -> String {
        match self {
            Recipient::Address(address) => address.clone(),
            Recipient::Alias { network, name } => format!("{}{}:{}", ALIAS_MARKER, network, name),
        }
    }

    /// Wire bytes: the decoded address, or `[alias_version, net] ‖ sized(name)`
    pub fn to_bytes(&self, config: &NetworkConfig) -> WavesResult<Vec<u8>> {
        match self {
            Recipient::Address(address) => base58::decode(address),
            Recipient::Alias { name, .. } => alias_bytes(name, config),
        }
    }
}

/// `[alias_version, network_byte] ‖ sized(name)`
pub(crate) fn alias_bytes(name: &str, config: &NetworkConfig) -> WavesResult<Vec<u8>> {
    let mut bytes = vec![config.alias_version, config.network_byte()];
    bytes.extend(string_to_bytes_with_size(name)?);
    Ok(bytes)
}

/// Alias bytes wrapped in their own length prefix, as carried by alias creation
pub(crate) fn sized_alias_bytes(name: &str, config: &NetworkConfig) -> WavesResult<Vec<u8>> {
    byte_array_with_size(&alias_bytes(name, config)?)
}
