//! Network Configuration
//!
//! Everything that differs between mainnet, testnet and devnet lives here and
//! is injected into the builders and address helpers:
//! - network code character (its low byte is the on-wire network id)
//! - address version and alias version bytes
//! - raw address length and display prefix
//! - initial key-derivation nonce
//! - node and matcher base URLs (validated, never contacted by this crate)

use crate::error::{WavesError, WavesResult};
use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_ADDRESS_VERSION: u8 = 1;
const DEFAULT_ALIAS_VERSION: u8 = 2;
const DEFAULT_RAW_ADDRESS_LENGTH: usize = 35;
const DEFAULT_ADDRESS_PREFIX: &str = "1W";
const DEFAULT_INITIAL_NONCE: u32 = 0;

/// Per-network parameters consumed by key derivation, addresses and builders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub network_code: char,
    #[serde(default = "default_address_version")]
    pub address_version: u8,
    #[serde(default = "default_alias_version")]
    pub alias_version: u8,
    #[serde(default = "default_raw_address_length")]
    pub raw_address_length: usize,
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,
    #[serde(default = "default_initial_nonce")]
    pub initial_nonce: u32,
    #[serde(default)]
    pub node_url: String,
    #[serde(default)]
    pub matcher_url: String,
}

fn default_address_version() -> u8 {
    DEFAULT_ADDRESS_VERSION
}

fn default_alias_version() -> u8 {
    DEFAULT_ALIAS_VERSION
}

fn default_raw_address_length() -> usize {
    DEFAULT_RAW_ADDRESS_LENGTH
}

fn default_address_prefix() -> String {
    DEFAULT_ADDRESS_PREFIX.to_string()
}

fn default_initial_nonce() -> u32 {
    DEFAULT_INITIAL_NONCE
}

impl NetworkConfig {
    fn preset(network_code: char, node_url: &str, matcher_url: &str) -> Self {
        Self {
            network_code,
            address_version: DEFAULT_ADDRESS_VERSION,
            alias_version: DEFAULT_ALIAS_VERSION,
            raw_address_length: DEFAULT_RAW_ADDRESS_LENGTH,
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            initial_nonce: DEFAULT_INITIAL_NONCE,
            node_url: node_url.to_string(),
            matcher_url: matcher_url.to_string(),
        }
    }

    /// Production network ('W')
    pub fn mainnet() -> Self {
        Self::preset('W', "https://nodes.wavesnodes.com", "https://matcher.wavesnodes.com")
    }

    /// Public test network ('T')
    pub fn testnet() -> Self {
        Self::preset(
            'T',
            "https://testnode1.wavesnodes.com",
            "https://matcher-testnet.wavesnodes.com",
        )
    }

    /// Development network ('T', single devel node)
    pub fn devnet() -> Self {
        Self::preset('T', "http://52.30.47.67:6869", "http://52.30.47.67:6886")
    }

    /// Pick a preset by name or network code ("mainnet", "W", "testnet", "T", "devnet")
    pub fn by_name(name: &str) -> WavesResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "w" => Ok(Self::mainnet()),
            "testnet" | "t" => Ok(Self::testnet()),
            "devnet" | "devel" => Ok(Self::devnet()),
            other => Err(WavesError::invalid_input(format!("Unknown network: {}", other))),
        }
    }

    /// Parse a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> WavesResult<Self> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// On-wire network id byte: the low byte of the network code character
    pub fn network_byte(&self) -> u8 {
        crate::encoding::network_byte(self.network_code)
    }

    /// Validate settings, returning every problem found
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.network_code.is_ascii() {
            problems.push(format!(
                "Network code must be an ASCII character, got {:?}",
                self.network_code
            ));
        }
        if self.raw_address_length == 0 {
            problems.push("Raw address length must be positive".to_string());
        }
        if self.address_prefix.is_empty() {
            problems.push("Address prefix must not be empty".to_string());
        }

        for (name, value) in [("node", &self.node_url), ("matcher", &self.matcher_url)] {
            if value.is_empty() {
                continue;
            }
            match Url::parse(value) {
                Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
                Ok(url) => problems.push(format!(
                    "{} URL must use http or https, got {}",
                    name,
                    url.scheme()
                )),
                Err(e) => problems.push(format!("Invalid {} URL: {}", name, e)),
            }
        }

        problems
    }

    /// Like [`validate`](Self::validate) but fails on the first problem set
    pub fn ensure_valid(&self) -> WavesResult<()> {
        let problems = self.validate();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(WavesError::invalid_input("Invalid network configuration")
                .with_details(problems.join("; ")))
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
