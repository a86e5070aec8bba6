//! Leasing: start and cancel

use serde::Serialize;

use super::recipient::Recipient;
use super::{public_key_bytes, require_native_fee, timestamp_or_now, type_tag, validate_sender, TransactionBuilder};
use crate::encoding::{base58, long_to_bytes};
use crate::error::{WavesError, WavesResult};
use crate::money::Money;
use crate::types::{Sender, TransactionType};

#[derive(Debug, Clone)]
pub struct Lease {
    pub recipient: String,
    pub amount: Money,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseRequest {
    pub recipient: String,
    pub amount: i64,
    pub timestamp: i64,
    pub fee: i64,
    pub sender_public_key: String,
    pub signature: String,
}

#[derive(Debug, Clone)]
pub struct CancelLease {
    /// Id of the lease transaction being cancelled
    pub lease_transaction_id: String,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelLeaseRequest {
    pub tx_id: String,
    pub timestamp: i64,
    pub fee: i64,
    pub sender_public_key: String,
    pub signature: String,
}

impl TransactionBuilder {
    pub fn create_lease(&self, lease: &Lease, sender: &Sender) -> WavesResult<LeaseRequest> {
        if !lease.amount.currency().is_native() {
            return Err(WavesError::invalid_input("Only WAVES can be leased"));
        }
        require_native_fee(&lease.fee)?;
        validate_sender(sender)?;
        let recipient = Recipient::parse(&lease.recipient, self.config())?;

        let timestamp = timestamp_or_now(lease.time);
        let amount = lease.amount.to_coins()?;
        let fee = lease.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::StartLeasing));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(recipient.to_bytes(self.config())?);
        bytes.extend_from_slice(&long_to_bytes(amount));
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend_from_slice(&long_to_bytes(timestamp));

        let signature = self.sign("lease", sender, &bytes, timestamp)?;

        Ok(LeaseRequest {
            recipient: recipient.to_request_string(),
            amount,
            timestamp,
            fee,
            sender_public_key: sender.public_key.clone(),
            signature,
        })
    }

    pub fn cancel_lease(&self, cancel: &CancelLease, sender: &Sender) -> WavesResult<CancelLeaseRequest> {
        if cancel.lease_transaction_id.is_empty() {
            return Err(WavesError::missing_field("Lease transaction id hasn't been set"));
        }
        require_native_fee(&cancel.fee)?;
        validate_sender(sender)?;

        let timestamp = timestamp_or_now(cancel.time);
        let fee = cancel.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&type_tag(TransactionType::CancelLeasing));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend_from_slice(&long_to_bytes(fee));
        bytes.extend_from_slice(&long_to_bytes(timestamp));
        bytes.extend(base58::decode(&cancel.lease_transaction_id)?);

        let signature = self.sign("cancel-lease", sender, &bytes, timestamp)?;

        Ok(CancelLeaseRequest {
            tx_id: cancel.lease_transaction_id.clone(),
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

    fn lease() -> Lease {
        Lease {
            recipient: "3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAeq".to_string(),
            amount: coins(1_000_000_000, waves()),
            fee: coins(100_000, waves()),
            time: Some(1491491715188),
        }
    }

    #[test]
    fn test_create_lease() {
        let request = testnet_builder().create_lease(&lease(), &sender()).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"recipient":"3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAeq","amount":1000000000,"timestamp":1491491715188,"fee":100000,"senderPublicKey":"FJuErRxhV9JaFUwcYLabFK5ENvDRfyJbRz8FeVfYpBLn","signature":"risTF19jNo4c1zZqsw5LryVsz1KCYApuMnd8mzxNThstfRUj4GnXPMhd2h57Bxa1nQ2Y1eSBLy7ZL1F7ckZCWYF"}"#
        );
    }

    #[test]
    fn test_lease_fee_must_be_native() {
        let mut l = lease();
        l.fee = coins(100_000, asset(ASSET_ID, 8));
        let err = testnet_builder().create_lease(&l, &sender()).unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongFeeCurrency);
    }

    #[test]
    fn test_lease_to_malformed_recipient() {
        for recipient in ["3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAe", "Not A Valid Alias!"] {
            let mut l = lease();
            l.recipient = recipient.to_string();
            let err = testnet_builder().create_lease(&l, &sender()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidAddress, "{}", recipient);
        }
    }

    #[test]
    fn test_cancel_lease() {
        let cancel = CancelLease {
            lease_transaction_id: "8PwufMfkR4BMgzp8K7RMXMVDxbi5BTsacUtf4ADrdpsh".to_string(),
            fee: coins(100_000, waves()),
            time: Some(1491491734819),
        };
        let request = testnet_builder().cancel_lease(&cancel, &sender()).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"txId":"8PwufMfkR4BMgzp8K7RMXMVDxbi5BTsacUtf4ADrdpsh","timestamp":1491491734819,"fee":100000,"senderPublicKey":"FJuErRxhV9JaFUwcYLabFK5ENvDRfyJbRz8FeVfYpBLn","signature":"4XGnwJULJpoZ3eBEUuHJeGkiyn1nqEW6C2L7JnZ28UAt75QpvJ3tGzq1sr8nvVT129Nj7GAiY7P7ETJWRvteU9Wh"}"#
        );
    }
}
