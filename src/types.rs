//! Shared types for the Waves core
//!
//! Data structures that cross module boundaries: transaction type tags,
//! sender key material, derived key pairs and order sides.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// Transaction Types
// =============================================================================

/// Transaction type tags as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Payment,
    Issue,
    Transfer,
    Reissue,
    StartLeasing,
    CancelLeasing,
    CreateAlias,
    MakeAssetNameUnique,
}

impl TransactionType {
    /// The type byte written at the start of the signed payload
    pub fn type_byte(&self) -> u8 {
        match self {
            TransactionType::Payment => 2,
            TransactionType::Issue => 3,
            TransactionType::Transfer => 4,
            TransactionType::Reissue => 5,
            TransactionType::StartLeasing => 8,
            TransactionType::CancelLeasing => 9,
            TransactionType::CreateAlias => 10,
            TransactionType::MakeAssetNameUnique => 11,
        }
    }

    /// Node REST path that accepts the signed request object
    pub fn broadcast_path(&self) -> &'static str {
        match self {
            TransactionType::Payment => "/waves/broadcast-signed-payment",
            TransactionType::Issue => "/assets/broadcast/issue",
            TransactionType::Transfer => "/assets/broadcast/transfer",
            TransactionType::Reissue => "/assets/broadcast/reissue",
            TransactionType::StartLeasing => "/leasing/broadcast/lease",
            TransactionType::CancelLeasing => "/leasing/broadcast/cancel",
            TransactionType::CreateAlias => "/alias/broadcast/create",
            TransactionType::MakeAssetNameUnique => "/assets/broadcast/make-asset-name-unique",
        }
    }

    pub fn from_type_byte(byte: u8) -> Option<Self> {
        match byte {
            2 => Some(TransactionType::Payment),
            3 => Some(TransactionType::Issue),
            4 => Some(TransactionType::Transfer),
            5 => Some(TransactionType::Reissue),
            8 => Some(TransactionType::StartLeasing),
            9 => Some(TransactionType::CancelLeasing),
            10 => Some(TransactionType::CreateAlias),
            11 => Some(TransactionType::MakeAssetNameUnique),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Payment => "payment",
            TransactionType::Issue => "issue",
            TransactionType::Transfer => "transfer",
            TransactionType::Reissue => "reissue",
            TransactionType::StartLeasing => "start-leasing",
            TransactionType::CancelLeasing => "cancel-leasing",
            TransactionType::CreateAlias => "create-alias",
            TransactionType::MakeAssetNameUnique => "make-asset-name-unique",
        };
        f.write_str(name)
    }
}

/// Matcher REST paths for exchange requests
pub mod matcher_paths {
    pub const ORDER_BOOK: &str = "/matcher/orderbook";

    /// Path for cancelling an order on the given pair
    pub fn cancel_order(amount_asset: &str, price_asset: &str) -> String {
        format!("/matcher/orderbook/{}/{}/cancel", amount_asset, price_asset)
    }

    /// Path for listing a sender's orders on the given pair
    pub fn user_orders(amount_asset: &str, price_asset: &str, public_key: &str) -> String {
        format!(
            "/matcher/orderbook/{}/{}/publicKey/{}",
            amount_asset, price_asset, public_key
        )
    }
}

// =============================================================================
// Key Material
// =============================================================================

/// Key material of the account signing a request (base58 strings)
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub public_key: String,
    pub private_key: String,
    /// Raw address; only payments carry it in the request object
    #[serde(default)]
    pub address: Option<String>,
}

impl Sender {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl fmt::Debug for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("address", &self.address)
            .finish()
    }
}

/// A derived key pair, base58 encoded
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

impl KeyPair {
    /// A sender using this key pair
    pub fn to_sender(&self) -> Sender {
        Sender::new(self.public_key.clone(), self.private_key.clone())
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Exchange
// =============================================================================

/// Side of an exchange order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Wire flag: `true` for sell orders
    pub fn is_sell(&self) -> bool {
        matches!(self, OrderSide::Sell)
    }
}

impl std::str::FromStr for OrderSide {
    type Err = crate::error::WavesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            other => Err(crate::error::WavesError::invalid_input(format!(
                "Unknown order type: {}",
                other
            ))),
        }
    }
}
