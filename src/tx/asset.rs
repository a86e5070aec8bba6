//! Asset issue, transfer and reissue
//!
//! All three carry an id: the base58 BLAKE2b-256 hash of the signed bytes.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use super::recipient::Recipient;
use super::{
    public_key_bytes, require_native_fee, timestamp_or_now, transaction_id, type_tag, validate_sender,
    TransactionBuilder,
};
use crate::encoding::{
    base58, boolean_to_bytes, byte_array_with_size, currency_to_bytes, long_to_bytes,
    string_to_bytes_with_size,
};
use crate::error::{WavesError, WavesResult};
use crate::money::{CurrencyData, Money};
use crate::types::{Sender, TransactionType};

/// Most decimal places an issued asset may have
pub const MAX_ASSET_DECIMALS: u8 = 8;
/// Longest transfer attachment the node accepts
pub const MAX_ATTACHMENT_SIZE: usize = 140;

fn non_native_id(money: &Money) -> Option<&str> {
    let id = money.currency().id.as_str();
    (!id.is_empty()).then_some(id)
}

// MARK: - Issue

#[derive(Debug, Clone)]
pub struct AssetIssue {
    pub name: String,
    pub description: String,
    /// Total supply in tokens
    pub total_tokens: Decimal,
    pub decimals: u8,
    pub reissuable: bool,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRequest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub decimals: u8,
    pub reissuable: bool,
    pub timestamp: i64,
    pub fee: i64,
    pub sender_public_key: String,
    pub signature: String,
}

// MARK: - Transfer

#[derive(Debug, Clone)]
pub struct AssetTransfer {
    /// Address, `alias:<net>:<name>` or a bare alias
    pub recipient: String,
    pub amount: Money,
    /// May be nominated in any asset
    pub fee: Money,
    pub attachment: Vec<u8>,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub id: String,
    pub recipient: String,
    pub timestamp: i64,
    pub asset_id: String,
    pub amount: i64,
    pub fee: i64,
    pub fee_asset_id: String,
    pub sender_public_key: String,
    pub signature: String,
    /// Base58 of the attachment bytes
    pub attachment: String,
}

// MARK: - Reissue

#[derive(Debug, Clone)]
pub struct AssetReissue {
    /// Additional supply, in the asset being reissued
    pub total_tokens: Money,
    pub reissuable: bool,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReissueRequest {
    pub id: String,
    pub asset_id: String,
    pub quantity: i64,
    pub reissuable: bool,
    pub timestamp: i64,
    pub fee: i64,
    pub sender_public_key: String,
    pub signature: String,
}

impl TransactionBuilder {
    pub fn create_asset_issue(&self, issue: &AssetIssue, sender: &Sender) -> WavesResult<IssueRequest> {
        if issue.name.is_empty() {
            return Err(WavesError::missing_field("Asset name hasn't been set"));
        }
        if issue.decimals > MAX_ASSET_DECIMALS {
            return Err(WavesError::invalid_input(format!(
                "Token decimal places must be between 0 and {}, got {}",
                MAX_ASSET_DECIMALS, issue.decimals
            )));
        }
        require_native_fee(&issue.fee)?;
        validate_sender(sender)?;

        let timestamp = timestamp_or_now(issue.time);
        let currency = Arc::new(
            CurrencyData::temporary(issue.name.clone(), u32::from(issue.decimals)).build(),
        );
        let quantity = Money::new(issue.total_tokens, currency)?.to_coins()?;
        let fee = issue.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::Issue));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(string_to_bytes_with_size(&issue.name)?);
        bytes.extend(string_to_bytes_with_size(&issue.description)?);
        bytes.extend_from_slice(&long_to_bytes(quantity));
        bytes.push(issue.decimals);
        bytes.extend_from_slice(&boolean_to_bytes(issue.reissuable));
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend_from_slice(&long_to_bytes(timestamp));

        let signature = self.sign("issue", sender, &bytes, timestamp)?;

        Ok(IssueRequest {
            id: transaction_id(&bytes),
            name: issue.name.clone(),
            description: issue.description.clone(),
            quantity,
            decimals: issue.decimals,
            reissuable: issue.reissuable,
            timestamp,
            fee,
            sender_public_key: sender.public_key.clone(),
            signature,
        })
    }

    pub fn create_asset_transfer(
        &self,
        transfer: &AssetTransfer,
        sender: &Sender,
    ) -> WavesResult<TransferRequest> {
        if transfer.attachment.len() > MAX_ATTACHMENT_SIZE {
            return Err(WavesError::invalid_input(format!(
                "Attachment is {} bytes, the limit is {}",
                transfer.attachment.len(),
                MAX_ATTACHMENT_SIZE
            )));
        }
        let recipient = Recipient::parse(&transfer.recipient, self.config())?;
        validate_sender(sender)?;

        let timestamp = timestamp_or_now(transfer.time);
        let amount = transfer.amount.to_coins()?;
        let fee = transfer.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::Transfer));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(currency_to_bytes(non_native_id(&transfer.amount), false)?);
        bytes.extend(currency_to_bytes(non_native_id(&transfer.fee), false)?);
        bytes.extend_from_slice(&long_to_bytes(timestamp));
        bytes.extend_from_slice(&long_to_bytes(amount));
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend(recipient.to_bytes(self.config())?);
        bytes.extend(byte_array_with_size(&transfer.attachment)?);

        let signature = self.sign("transfer", sender, &bytes, timestamp)?;

        Ok(TransferRequest {
            id: transaction_id(&bytes),
            recipient: recipient.to_request_string(),
            timestamp,
            asset_id: transfer.amount.currency().id.clone(),
            amount,
            fee,
            fee_asset_id: transfer.fee.currency().id.clone(),
            sender_public_key: sender.public_key.clone(),
            signature,
            attachment: base58::encode(&transfer.attachment),
        })
    }

    pub fn create_asset_reissue(
        &self,
        reissue: &AssetReissue,
        sender: &Sender,
    ) -> WavesResult<ReissueRequest> {
        let asset_id = non_native_id(&reissue.total_tokens)
            .ok_or_else(|| WavesError::invalid_input("Reissuing Waves is not allowed."))?
            .to_string();
        require_native_fee(&reissue.fee)?;
        validate_sender(sender)?;

        let timestamp = timestamp_or_now(reissue.time);
        let quantity = reissue.total_tokens.to_coins()?;
        let fee = reissue.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::Reissue));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(currency_to_bytes(Some(&asset_id), true)?);
        bytes.extend_from_slice(&long_to_bytes(quantity));
        bytes.extend_from_slice(&boolean_to_bytes(reissue.reissuable));
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend_from_slice(&long_to_bytes(timestamp));

        let signature = self.sign("reissue", sender, &bytes, timestamp)?;

        Ok(ReissueRequest {
            id: transaction_id(&bytes),
            asset_id,
            quantity,
            reissuable: reissue.reissuable,
            timestamp,
            fee,
            sender_public_key: sender.public_key.clone(),
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::tx::test_support::*;
    use rust_decimal_macros::dec;

    fn issue() -> AssetIssue {
        AssetIssue {
            name: "Test Asset".to_string(),
            description: "Some description".to_string(),
            total_tokens: dec!(10000),
            decimals: 2,
            reissuable: true,
            fee: coins(100_000_000, waves()),
            time: Some(1478704158292),
        }
    }

    fn transfer() -> AssetTransfer {
        AssetTransfer {
            recipient: "3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAeq".to_string(),
            amount: coins(1050, asset(ASSET_ID, 2)),
            fee: coins(100_000, waves()),
            attachment: b"hello".to_vec(),
            time: Some(1478864678621),
        }
    }

    #[test]
    fn test_issue() {
        let request = testnet_builder().create_asset_issue(&issue(), &sender()).unwrap();
        assert_eq!(request.quantity, 1_000_000);
        assert_eq!(
            request.signature,
            "3rnSzafqi3DWry8zVCGSmUGmAMopaT46v9bL3WpEun6XqvNBG455c1KjFjjG8nGipYCBYfjtS55xCyJzsnAsmP7v"
        );
        assert_eq!(request.id, "14ANH7ymxYvRqcFFy8ktytS3oGLfYE7n2xnyz2uQmQY1");

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.starts_with(r#"{"id":"14ANH7ymxYvRqcFFy8ktytS3oGLfYE7n2xnyz2uQmQY1","name":"Test Asset","description":"Some description","quantity":1000000,"decimals":2,"reissuable":true,"timestamp":1478704158292,"fee":100000000,"senderPublicKey":"#));
    }

    #[test]
    fn test_issue_validation() {
        let mut i = issue();
        i.name.clear();
        let err = testnet_builder().create_asset_issue(&i, &sender()).unwrap_err();
        assert_eq!(err.message, "Asset name hasn't been set");

        let mut i = issue();
        i.fee = coins(100_000_000, asset(ASSET_ID, 8));
        let err = testnet_builder().create_asset_issue(&i, &sender()).unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongFeeCurrency);

        let mut i = issue();
        i.decimals = 9;
        assert!(testnet_builder().create_asset_issue(&i, &sender()).is_err());
    }

    #[test]
    fn test_transfer() {
        let request = testnet_builder().create_asset_transfer(&transfer(), &sender()).unwrap();
        assert_eq!(
            request.signature,
            "2CZvTC9q92ZVgNNoCgESHcw6JYSzRK5KQPdgCRnPbPAAtV5JB9w8oetzzEuJo4iPQqwcQR5LHxRWXGBUR74JUF4x"
        );
        assert_eq!(request.id, "9jDNAj7cFZR5RkVDDBFb4y68XW9SVKZQbr74x1o4H62Z");
        assert_eq!(request.attachment, "Cn8eVZg");
        assert_eq!(request.asset_id, ASSET_ID);
        assert_eq!(request.fee_asset_id, "");
    }

    #[test]
    fn test_transfer_to_alias() {
        let t = AssetTransfer {
            recipient: "alias:T:wavesuser".to_string(),
            amount: coins(100_000_000, waves()),
            fee: coins(100_000, waves()),
            attachment: Vec::new(),
            time: Some(1478864678621),
        };
        let request = testnet_builder().create_asset_transfer(&t, &sender()).unwrap();
        assert_eq!(request.recipient, "alias:T:wavesuser");
        assert_eq!(
            request.signature,
            "3jvPcTt2B17wdRVef1yM4SKm57f9M79tiC1fp4WhHwN8B6dVJAdtxWCrNvpMEUKQk2LuJfmwZJA21yaKKDZpVGhC"
        );
        assert_eq!(request.id, "A7qG8Kd8mYPV2nCUTrTWHNd997eC6spHfFMa4GbeFaww");
        assert_eq!(request.attachment, "");
    }

    #[test]
    fn test_transfer_to_malformed_recipient() {
        for recipient in ["3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAe", "Not A Valid Alias!", "alias:T:abc"] {
            let mut t = transfer();
            t.recipient = recipient.to_string();
            let err = testnet_builder().create_asset_transfer(&t, &sender()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidAddress, "{}", recipient);
        }
    }

    #[test]
    fn test_transfer_fee_in_asset_is_allowed() {
        let mut t = transfer();
        t.fee = coins(10, asset(ASSET_ID, 2));
        let request = testnet_builder().create_asset_transfer(&t, &sender()).unwrap();
        assert_eq!(request.fee_asset_id, ASSET_ID);
    }

    #[test]
    fn test_transfer_attachment_limit() {
        let mut t = transfer();
        t.attachment = vec![0; MAX_ATTACHMENT_SIZE + 1];
        let err = testnet_builder().create_asset_transfer(&t, &sender()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_reissue() {
        let reissue = AssetReissue {
            total_tokens: coins(10_000, asset(ASSET_ID, 2)),
            reissuable: false,
            fee: coins(100_000_000, waves()),
            time: Some(1478704158292),
        };
        let request = testnet_builder().create_asset_reissue(&reissue, &sender()).unwrap();
        assert_eq!(
            request.signature,
            "5nGPQnp7xawygYnSnoFfgkoips4CzfhFctVPugyfHqqMdzJ5ay7EqxDywVuEDpRhbWv2yRmjBvTqhFDLq6u2uEMx"
        );
        assert_eq!(request.id, "Cdp9FXxuUTnWb49N5pNXWsF7fxV9Tx418XoztujaHYZs");
        assert_eq!(request.asset_id, ASSET_ID);
        assert_eq!(request.quantity, 10_000);
    }

    #[test]
    fn test_reissue_of_waves_is_rejected() {
        let reissue = AssetReissue {
            total_tokens: coins(10_000, waves()),
            reissuable: false,
            fee: coins(100_000_000, waves()),
            time: None,
        };
        let err = testnet_builder().create_asset_reissue(&reissue, &sender()).unwrap_err();
        assert_eq!(err.message, "Reissuing Waves is not allowed.");
    }
}
