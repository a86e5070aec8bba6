//! Legacy WAVES payment
//!
//! The oldest transaction layout: a four-byte type tag and no id. The
//! request object carries the sender address besides its public key.

use serde::Serialize;

use super::{public_key_bytes, require_native_fee, timestamp_or_now, validate_sender, TransactionBuilder};
use crate::encoding::{base58, int_to_bytes, long_to_bytes};
use crate::error::{WavesError, WavesResult};
use crate::money::Money;
use crate::types::{Sender, TransactionType};
use crate::wallet::address_validation::checked_address;

#[derive(Debug, Clone)]
pub struct Payment {
    pub recipient: String,
    pub amount: Money,
    pub fee: Money,
    pub time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub recipient: String,
    pub timestamp: i64,
    pub signature: String,
    pub amount: i64,
    pub sender_public_key: String,
    pub sender: String,
    pub fee: i64,
}

impl TransactionBuilder {
    pub fn create_payment(&self, payment: &Payment, sender: &Sender) -> WavesResult<PaymentRequest> {
        if payment.recipient.trim().is_empty() {
            return Err(WavesError::missing_field("Payment recipient hasn't been set"));
        }
        require_native_fee(&payment.fee)?;
        validate_sender(sender)?;
        let address = sender
            .address
            .clone()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| WavesError::missing_field("Sender account address hasn't been set"))?;

        let timestamp = timestamp_or_now(payment.time);
        let recipient = checked_address(payment.recipient.trim(), self.config())?.to_string();
        let amount = payment.amount.to_coins()?;
        let fee = payment.fee.to_coins()?;

        let mut bytes = Vec::with_capacity(4 + 8 + 32 + 26 + 16);
        bytes.extend_from_slice(&int_to_bytes(u32::from(TransactionType::Payment.type_byte())));
        bytes.extend_from_slice(&long_to_bytes(timestamp));
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(base58::decode(&recipient)?);
        bytes.extend_from_slice(&long_to_bytes(amount));
        bytes.extend_from_slice(&long_to_bytes(fee));

        let signature = self.sign("payment", sender, &bytes, timestamp)?;

        Ok(PaymentRequest {
            recipient,
            timestamp,
            signature,
            amount,
            sender_public_key: sender.public_key.clone(),
            sender: address,
            fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::tx::test_support::*;

    fn payment() -> Payment {
        Payment {
            recipient: "3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAeq".to_string(),
            amount: coins(100_000_000, waves()),
            fee: coins(100_000, waves()),
            time: Some(1474976994320),
        }
    }

    fn payment_sender() -> Sender {
        sender().with_address("3MtMoVbAHSitzohEvd6dJGR3kmJZHSePUkS")
    }

    #[test]
    fn test_golden_payment() {
        let request = testnet_builder().create_payment(&payment(), &payment_sender()).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"recipient":"3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAeq","timestamp":1474976994320,"signature":"aRuj3amGbH78Bn2jwDRhTmpaQnNexk2p47iyMGLA2md5k5d3crMZceedNBTjeS42hnark5RTptwWEEWYRiVuNej","amount":100000000,"senderPublicKey":"FJuErRxhV9JaFUwcYLabFK5ENvDRfyJbRz8FeVfYpBLn","sender":"3MtMoVbAHSitzohEvd6dJGR3kmJZHSePUkS","fee":100000}"#
        );
    }

    #[test]
    fn test_requires_sender_address() {
        let err = testnet_builder().create_payment(&payment(), &sender()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.message, "Sender account address hasn't been set");
    }

    #[test]
    fn test_rejects_asset_fee() {
        let mut p = payment();
        p.fee = coins(100_000, asset(ASSET_ID, 8));
        let err = testnet_builder().create_payment(&p, &payment_sender()).unwrap_err();
        assert_eq!(err.code, ErrorCode::WrongFeeCurrency);
    }

    #[test]
    fn test_rejects_malformed_recipient() {
        for recipient in ["3N9Uu", "3N9UuGeWuDt9NfWbC5oEACHyRoeEMApXAe", "alias:T:wavesuser"] {
            let mut p = payment();
            p.recipient = recipient.to_string();
            let err = testnet_builder().create_payment(&p, &payment_sender()).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidAddress, "{}", recipient);
        }
    }

    #[test]
    fn test_timestamp_defaults_to_now() {
        let mut p = payment();
        p.time = None;
        let request = testnet_builder().create_payment(&p, &payment_sender()).unwrap();
        assert!(request.timestamp > 1474976994320);
    }
}
