//! Waves Core Library
//!
//! Client-side core of a Waves wallet: exact money arithmetic, passphrase
//! based key derivation, address handling and signed request objects for the
//! node and matcher REST APIs. Nothing here performs network I/O; every
//! operation is an in-memory computation.
//!
//! # Architecture
//!
//! This crate provides:
//! - **money**: currencies, the currency registry, `Money` and order prices
//! - **encoding**: wire encoders and base58
//! - **crypto**: hash chain, curve25519 signatures, entropy, key derivation
//! - **wallet**: passphrases, addresses, alias names and the account list
//! - **tx**: transaction and matcher request builders
//! - **utils**: structured logging, network configuration, clock
//!
//! # Security
//!
//! Seeds, private keys and passphrases are held in `zeroize` wrappers and
//! are redacted from `Debug` output and log lines.
//!
//! # Example
//!
//! ```rust,ignore
//! use waves_core::{NetworkConfig, TransactionBuilder, Signer};
//! use waves_core::tx::Lease;
//!
//! let config = NetworkConfig::testnet();
//! let account = waves_core::wallet::address_from_passphrase(&phrase, &config)?;
//! let builder = TransactionBuilder::new(config, Signer::default());
//! let request = builder.create_lease(&lease, &account.keys.to_sender())?;
//! println!("{}", serde_json::to_string(&request)?);
//! ```

pub mod crypto;
pub mod encoding;
pub mod error;
pub mod money;
pub mod tx;
pub mod types;
pub mod utils;
pub mod wallet;

// Re-export key types for convenience
pub use crypto::Signer;
pub use error::{ErrorCode, WavesError, WavesResult};
pub use money::{AssetPair, Currency, CurrencyData, CurrencyRegistry, Money, OrderPrice};
pub use tx::TransactionBuilder;
pub use types::{KeyPair, OrderSide, Sender, TransactionType};
pub use utils::network_config::NetworkConfig;
