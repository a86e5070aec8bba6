//! Transaction builders
//!
//! Every builder follows the same pipeline: validate the inputs, default the
//! timestamp, serialize the fields in the wire order of the transaction type,
//! sign the bytes, derive the id where the type has one, and return a
//! request object ready to be posted by a REST client.

pub mod alias;
pub mod asset;
pub mod leasing;
pub mod matcher;
pub mod payment;
pub mod recipient;
pub mod unique_asset;

pub use alias::{AliasRequest, CreateAlias};
pub use asset::{AssetIssue, AssetReissue, AssetTransfer, IssueRequest, ReissueRequest, TransferRequest};
pub use leasing::{CancelLease, CancelLeaseRequest, Lease, LeaseRequest};
pub use matcher::{
    denormalize_asset_id, normalize_asset_id, AssetPairRequest, CancelOrderRequest, LegacyOrder,
    LegacyOrderRequest, Order, OrderRequest, UserOrdersSignature,
};
pub use payment::{Payment, PaymentRequest};
pub use recipient::Recipient;
pub use unique_asset::{MakeAssetNameUnique, MakeAssetNameUniqueRequest};

use crate::crypto::hash::blake2b256;
use crate::crypto::signer::Signer;
use crate::encoding::base58;
use crate::error::{WavesError, WavesResult};
use crate::log_debug;
use crate::money::Money;
use crate::types::{Sender, TransactionType};
use crate::utils::clock;
use crate::utils::network_config::NetworkConfig;

/// Builds and signs request objects for one network
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    config: NetworkConfig,
    signer: Signer,
}

impl TransactionBuilder {
    pub fn new(config: NetworkConfig, signer: Signer) -> Self {
        Self { config, signer }
    }

    /// Builder producing deterministic signatures
    pub fn deterministic(config: NetworkConfig) -> Self {
        Self::new(config, Signer::deterministic())
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    pub(crate) fn sign(&self, kind: &str, sender: &Sender, bytes: &[u8], timestamp: i64) -> WavesResult<String> {
        let signature = self.signer.sign(&sender.private_key, bytes)?;
        log_debug!(
            "tx",
            "Signed request",
            kind = kind,
            timestamp = timestamp,
            bytes = bytes.len(),
            sender = sender.public_key
        );
        Ok(signature)
    }
}

/// Both sender keys must be present
pub(crate) fn validate_sender(sender: &Sender) -> WavesResult<()> {
    if sender.public_key.is_empty() {
        return Err(WavesError::missing_field("Sender account public key hasn't been set"));
    }
    if sender.private_key.is_empty() {
        return Err(WavesError::missing_field("Sender account private key hasn't been set"));
    }
    Ok(())
}

pub(crate) fn require_native_fee(fee: &Money) -> WavesResult<()> {
    if !fee.currency().is_native() {
        return Err(WavesError::wrong_fee_currency(format!(
            "Transaction fee must be nominated in Waves, got {}",
            fee.currency().label()
        )));
    }
    Ok(())
}

pub(crate) fn timestamp_or_now(time: Option<i64>) -> i64 {
    time.unwrap_or_else(clock::now_millis)
}

/// Sender public key bytes
pub(crate) fn public_key_bytes(sender: &Sender) -> WavesResult<[u8; 32]> {
    base58::decode_array::<32>(&sender.public_key, "Sender public key")
}

/// `base58(blake2b256(bytes))`
pub(crate) fn transaction_id(bytes: &[u8]) -> String {
    base58::encode(&blake2b256(bytes))
}

pub(crate) fn type_tag(kind: TransactionType) -> [u8; 1] {
    [kind.type_byte()]
}
