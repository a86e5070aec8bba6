//! Alias creation

use serde::Serialize;

use super::recipient::sized_alias_bytes;
use super::{public_key_bytes, require_native_fee, timestamp_or_now, type_tag, validate_sender, TransactionBuilder};
use crate::encoding::long_to_bytes;
use crate::error::{WavesError, WavesResult};
use crate::money::Money;
use crate::types::{Sender, TransactionType};
use crate::wallet::address_validation::is_valid_alias_name;

#[derive(Debug, Clone)]
pub struct CreateAlias {
    pub alias: String,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasRequest {
    pub alias: String,
    pub timestamp: i64,
    pub fee: i64,
    pub sender_public_key: String,
    pub signature: String,
}

impl TransactionBuilder {
    pub fn create_alias(&self, alias: &CreateAlias, sender: &Sender) -> WavesResult<AliasRequest> {
        if !is_valid_alias_name(&alias.alias) {
            return Err(WavesError::invalid_input(format!(
                "Invalid alias name {:?}: 4 to 30 characters of lowercase letters, digits and -.@_",
                alias.alias
            )));
        }
        require_native_fee(&alias.fee)?;
        validate_sender(sender)?;

        let timestamp = timestamp_or_now(alias.time);
        let fee = alias.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::CreateAlias));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(sized_alias_bytes(&alias.alias, self.config())?);
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend_from_slice(&long_to_bytes(timestamp));

        let signature = self.sign("alias", sender, &bytes, timestamp)?;

        Ok(AliasRequest {
            alias: alias.alias.clone(),
            timestamp,
            fee,
            sender_public_key: sender.public_key.clone(),
            signature,
        })
    }
}
