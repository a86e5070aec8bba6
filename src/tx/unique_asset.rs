//! Make-asset-name-unique requests

use serde::Serialize;

use super::{public_key_bytes, require_native_fee, timestamp_or_now, type_tag, validate_sender, TransactionBuilder};
use crate::encoding::{base58, long_to_bytes};
use crate::error::{WavesError, WavesResult};
use crate::money::Money;
use crate::types::{Sender, TransactionType};

#[derive(Debug, Clone)]
pub struct MakeAssetNameUnique {
    pub asset_id: String,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeAssetNameUniqueRequest {
    pub sender_public_key: String,
    pub asset_id: String,
    pub fee: i64,
    pub network_byte: u8,
    pub timestamp: i64,
    pub signature: String,
}

impl TransactionBuilder {
    pub fn make_asset_name_unique(
        &self,
        request: &MakeAssetNameUnique,
        sender: &Sender,
    ) -> WavesResult<MakeAssetNameUniqueRequest> {
        validate_sender(sender)?;
        if request.asset_id.is_empty() {
            return Err(WavesError::missing_field("Asset id hasn't been set"));
        }
        require_native_fee(&request.fee)?;

        let network_byte = self.config().network_byte();
        let timestamp = timestamp_or_now(request.time);
        let fee = request.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::MakeAssetNameUnique));
        bytes.push(network_byte);
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(base58::decode(&request.asset_id)?);
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend_from_slice(&long_to_bytes(timestamp));

        let signature = self.sign("make-asset-name-unique", sender, &bytes, timestamp)?;

        Ok(MakeAssetNameUniqueRequest {
            sender_public_key: sender.public_key.clone(),
            asset_id: request.asset_id.clone(),
            fee,
            network_byte,
            timestamp,
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::test_support::*;

    #[test]
    fn test_make_asset_name_unique() {
        let request = MakeAssetNameUnique {
            asset_id: ASSET_ID.to_string(),
            fee: Money::new("0.01", waves()).unwrap(),
            time: Some(1496757297265),
        };
        let result = testnet_builder().make_asset_name_unique(&request, &sender()).unwrap();
        assert_eq!(result.fee, 1_000_000);
        assert_eq!(result.network_byte, b'T');
        assert_eq!(
            result.signature,
            "5RQE6qkJ24CEfkZLuy7suKeWitTzPdNHS3FQ4NPw7SHeCip6eRtErYorUnZB8TJRzJTKWvNZYKKeBPke2YGYporD"
        );
    }

    #[test]
    fn test_requires_sender() {
        let request = MakeAssetNameUnique {
            asset_id: ASSET_ID.to_string(),
            fee: Money::new("0.01", waves()).unwrap(),
            time: None,
        };
        let err = testnet_builder()
            .make_asset_name_unique(&request, &Sender::default())
            .unwrap_err();
        assert!(err.message.contains("Sender"));
    }
}
