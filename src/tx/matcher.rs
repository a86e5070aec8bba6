//! Matcher requests: orders, cancellation and order listing
//!
//! Two order layouts are supported. The asset-pair layout carries the pair,
//! the side and a price rescaled for the matcher (see [`OrderPrice`]). The
//! legacy layout carries spend/receive asset ids and the price in coins of
//! the price currency.

use serde::Serialize;

use super::{public_key_bytes, require_native_fee, timestamp_or_now, validate_sender, TransactionBuilder};
use crate::encoding::{base58, boolean_to_bytes, currency_to_bytes, long_to_bytes};
use crate::error::{WavesError, WavesResult};
use crate::money::{AssetPair, Money, OrderPrice};
use crate::types::{matcher_paths, OrderSide, Sender};
use crate::utils::clock;

/// Matcher name of the native asset
pub const NATIVE_ASSET_NAME: &str = "WAVES";
/// Default order lifetime
pub const DEFAULT_ORDER_LIFETIME_DAYS: i64 = 30;

/// `""` → `"WAVES"`, other ids unchanged
pub fn normalize_asset_id(id: &str) -> &str {
    if id.is_empty() {
        NATIVE_ASSET_NAME
    } else {
        id
    }
}

/// `"WAVES"` → `""`, other ids unchanged
pub fn denormalize_asset_id(id: &str) -> &str {
    if id == NATIVE_ASSET_NAME {
        ""
    } else {
        id
    }
}

/// Matcher path for cancelling orders on `pair`
pub fn cancel_order_path(pair: &AssetPair) -> String {
    matcher_paths::cancel_order(
        normalize_asset_id(&pair.amount_asset.id),
        normalize_asset_id(&pair.price_asset.id),
    )
}

/// Matcher path listing the orders `public_key` has on `pair`
pub fn user_orders_path(pair: &AssetPair, public_key: &str) -> String {
    matcher_paths::user_orders(
        normalize_asset_id(&pair.amount_asset.id),
        normalize_asset_id(&pair.price_asset.id),
        public_key,
    )
}

fn optional_id(id: &str) -> Option<String> {
    (!id.is_empty()).then(|| id.to_string())
}

fn expiration_or_default(expiration: Option<i64>) -> i64 {
    expiration.unwrap_or_else(|| clock::days_from_now_millis(DEFAULT_ORDER_LIFETIME_DAYS))
}

fn validate_matcher_key(matcher_key: &str) -> WavesResult<[u8; 32]> {
    if matcher_key.is_empty() {
        return Err(WavesError::missing_field("Matcher public key hasn't been set"));
    }
    base58::decode_array::<32>(matcher_key, "Matcher public key")
}

// MARK: - Asset-pair orders

#[derive(Debug, Clone)]
pub struct Order {
    pub side: OrderSide,
    /// Price; carries the asset pair
    pub price: OrderPrice,
    /// Amount in the pair's amount asset
    pub amount: Money,
    pub fee: Money,
    pub matcher_key: String,
    pub time: Option<i64>,
    pub expiration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPairRequest {
    /// `None` for the native asset
    pub amount_asset: Option<String>,
    pub price_asset: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_type: OrderSide,
    pub asset_pair: AssetPairRequest,
    pub price: i64,
    pub amount: i64,
    pub timestamp: i64,
    pub expiration: i64,
    pub matcher_fee: i64,
    pub matcher_public_key: String,
    pub sender_public_key: String,
    pub signature: String,
}

// MARK: - Legacy orders

#[derive(Debug, Clone)]
pub struct LegacyOrder {
    pub spend_asset_id: String,
    pub receive_asset_id: String,
    pub price: Money,
    pub amount: Money,
    pub fee: Money,
    pub matcher_key: String,
    pub time: Option<i64>,
    pub expiration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyOrderRequest {
    pub spend_asset_id: String,
    pub receive_asset_id: String,
    pub price: i64,
    pub amount: i64,
    pub timestamp: i64,
    pub expiration: i64,
    pub matcher_fee: i64,
    pub matcher_public_key: String,
    pub sender_public_key: String,
    pub signature: String,
}

// MARK: - Cancel / list

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub sender: String,
    pub order_id: String,
    pub signature: String,
}

/// Signature authorizing a listing of the sender's orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrdersSignature {
    pub timestamp: i64,
    pub signature: String,
}

impl TransactionBuilder {
    pub fn create_order(&self, order: &Order, sender: &Sender) -> WavesResult<OrderRequest> {
        validate_sender(sender)?;
        let matcher_key = validate_matcher_key(&order.matcher_key)?;
        require_native_fee(&order.fee)?;

        let pair = order.price.pair();
        if order.amount.currency().id != pair.amount_asset.id {
            return Err(WavesError::currency_mismatch(
                pair.amount_asset.label(),
                order.amount.currency().label(),
            ));
        }

        let timestamp = timestamp_or_now(order.time);
        let expiration = expiration_or_default(order.expiration);
        let price = order.price.to_backend_price()?;
        let amount = order.amount.to_coins()?;
        let fee = order.fee.to_coins()?;
        let amount_asset = optional_id(&pair.amount_asset.id);
        let price_asset = optional_id(&pair.price_asset.id);

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend_from_slice(&matcher_key);
        bytes.extend(currency_to_bytes(amount_asset.as_deref(), false)?);
        bytes.extend(currency_to_bytes(price_asset.as_deref(), false)?);
        bytes.extend_from_slice(&boolean_to_bytes(order.side.is_sell()));
        bytes.extend_from_slice(&long_to_bytes(price));
        bytes.extend_from_slice(&long_to_bytes(amount));
        bytes.extend_from_slice(&long_to_bytes(timestamp));
        bytes.extend_from_slice(&long_to_bytes(expiration));
        bytes.extend_from_slice(&long_to_bytes(fee));

        let signature = self.sign("order", sender, &bytes, timestamp)?;

        Ok(OrderRequest {
            order_type: order.side,
            asset_pair: AssetPairRequest {
                amount_asset,
                price_asset,
            },
            price,
            amount,
            timestamp,
            expiration,
            matcher_fee: fee,
            matcher_public_key: order.matcher_key.clone(),
            sender_public_key: sender.public_key.clone(),
            signature,
        })
    }

    pub fn create_legacy_order(
        &self,
        order: &LegacyOrder,
        sender: &Sender,
    ) -> WavesResult<LegacyOrderRequest> {
        validate_sender(sender)?;
        let matcher_key = validate_matcher_key(&order.matcher_key)?;
        require_native_fee(&order.fee)?;

        let timestamp = timestamp_or_now(order.time);
        let expiration = expiration_or_default(order.expiration);
        let price = order.price.to_coins()?;
        let amount = order.amount.to_coins()?;
        let fee = order.fee.to_coins()?;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend_from_slice(&matcher_key);
        bytes.extend(currency_to_bytes(Some(&order.spend_asset_id), false)?);
        bytes.extend(currency_to_bytes(Some(&order.receive_asset_id), false)?);
        bytes.extend_from_slice(&long_to_bytes(price));
        bytes.extend_from_slice(&long_to_bytes(amount));
        bytes.extend_from_slice(&long_to_bytes(timestamp));
        bytes.extend_from_slice(&long_to_bytes(expiration));
        bytes.extend_from_slice(&long_to_bytes(fee));

        let signature = self.sign("legacy-order", sender, &bytes, timestamp)?;

        Ok(LegacyOrderRequest {
            spend_asset_id: order.spend_asset_id.clone(),
            receive_asset_id: order.receive_asset_id.clone(),
            price,
            amount,
            timestamp,
            expiration,
            matcher_fee: fee,
            matcher_public_key: order.matcher_key.clone(),
            sender_public_key: sender.public_key.clone(),
            signature,
        })
    }

    pub fn cancel_order(&self, order_id: &str, sender: &Sender) -> WavesResult<CancelOrderRequest> {
        validate_sender(sender)?;
        if order_id.is_empty() {
            return Err(WavesError::missing_field("orderId hasn't been set"));
        }

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend(base58::decode(order_id)?);

        let signature = self.sign("cancel-order", sender, &bytes, 0)?;

        Ok(CancelOrderRequest {
            sender: sender.public_key.clone(),
            order_id: order_id.to_string(),
            signature,
        })
    }

    pub fn user_orders_signature(
        &self,
        sender: &Sender,
        time: Option<i64>,
    ) -> WavesResult<UserOrdersSignature> {
        validate_sender(sender)?;
        let timestamp = timestamp_or_now(time);

        let mut bytes = Vec::with_capacity(40);
        bytes.extend_from_slice(&public_key_bytes(sender)?);
        bytes.extend_from_slice(&long_to_bytes(timestamp));

        let signature = self.sign("user-orders", sender, &bytes, timestamp)?;
        Ok(UserOrdersSignature {
            timestamp,
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::tx::test_support::*;

    const MATCHER_KEY: &str = "4oP8SPd7LiUo8xsokSTiyZjwg4rojdyXqWEq7NTwWsSU";
    const TOKEN_ID: &str = "8Nu3gdirpraz8ghmDHscTnoAbmCTLPxLhMeVzG4UxSQY";

    fn buy_order() -> Order {
        let pair = AssetPair::new(asset(TOKEN_ID, 2), waves());
        Order {
            side: OrderSide::Buy,
            price: OrderPrice::from_tokens(1i64, pair).unwrap(),
            amount: coins(1000, asset(TOKEN_ID, 2)),
            fee: coins(300_000, waves()),
            matcher_key: MATCHER_KEY.to_string(),
            time: Some(1487172369858),
            expiration: Some(1489764369858),
        }
    }

    #[test]
    fn test_create_order() {
        let request = testnet_builder().create_order(&buy_order(), &sender()).unwrap();
        assert_eq!(request.price, 100_000_000_000_000);
        assert_eq!(
            request.signature,
            "r4uZ3h3iFXXWEGkpME5vwqk1kMh2uvDcJnCc2d8eA1t9zFL7Qo4HqWj4TBHDvnakjd7k7gYowAuV7G46vSoCHFc"
        );

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.starts_with(
            r#"{"orderType":"buy","assetPair":{"amountAsset":"8Nu3gdirpraz8ghmDHscTnoAbmCTLPxLhMeVzG4UxSQY","priceAsset":null},"price":100000000000000,"amount":1000,"timestamp":1487172369858,"expiration":1489764369858,"matcherFee":300000,"matcherPublicKey":"#
        ));
    }

    #[test]
    fn test_sell_flag_changes_signature() {
        let mut sell = buy_order();
        sell.side = OrderSide::Sell;
        let builder = testnet_builder();
        let a = builder.create_order(&buy_order(), &sender()).unwrap();
        let b = builder.create_order(&sell, &sender()).unwrap();
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_order_amount_must_match_pair() {
        let mut order = buy_order();
        order.amount = coins(1000, waves());
        let err = testnet_builder().create_order(&order, &sender()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CurrencyMismatch);
    }

    #[test]
    fn test_default_expiration() {
        let mut order = buy_order();
        order.time = None;
        order.expiration = None;
        let request = testnet_builder().create_order(&order, &sender()).unwrap();
        let lifetime = request.expiration - request.timestamp;
        assert!((29 * 86_400_000..=31 * 86_400_000).contains(&lifetime));
    }

    #[test]
    fn test_legacy_order() {
        let order = LegacyOrder {
            spend_asset_id: TOKEN_ID.to_string(),
            receive_asset_id: String::new(),
            price: Money::new(1i64, waves()).unwrap(),
            amount: Money::new(10i64, asset(TOKEN_ID, 2)).unwrap(),
            fee: Money::new("0.01", waves()).unwrap(),
            matcher_key: MATCHER_KEY.to_string(),
            time: Some(1487172369858),
            expiration: Some(1489764369858),
        };
        let request = testnet_builder().create_legacy_order(&order, &sender()).unwrap();
        assert_eq!(request.price, 100_000_000);
        assert_eq!(request.amount, 1000);
        assert_eq!(request.matcher_fee, 1_000_000);
        assert_eq!(
            request.signature,
            "62SxgoTfPYR3gRRpDmrV4k3EPyy2rRe48ub4iHRng1jkZe2pxuhLnhD4vabgM738yq1Wo4KogVhZfYd7Zfmz1yEn"
        );
    }

    #[test]
    fn test_cancel_order() {
        let request = testnet_builder()
            .cancel_order("8PwufMfkR4BMgzp8K7RMXMVDxbi5BTsacUtf4ADrdpsh", &sender())
            .unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"sender":"FJuErRxhV9JaFUwcYLabFK5ENvDRfyJbRz8FeVfYpBLn","orderId":"8PwufMfkR4BMgzp8K7RMXMVDxbi5BTsacUtf4ADrdpsh","signature":"3ZUHGpaw7Ahmx1GfmUd66tE7288wZJZHQ992ikiy3Q9auyPyW5ru8DdvUmMrS1TnYshvPGYzu3srGUnZfQjgGM9c"}"#
        );
    }

    #[test]
    fn test_cancel_order_requires_id() {
        let err = testnet_builder().cancel_order("", &sender()).unwrap_err();
        assert_eq!(err.message, "orderId hasn't been set");
    }

    #[test]
    fn test_user_orders_signature() {
        let result = testnet_builder()
            .user_orders_signature(&sender(), Some(1487172369858))
            .unwrap();
        assert_eq!(
            result.signature,
            "5ZpzLLMnfnHTXHVFJsdB7vwByZY9tZeXtpowszu4J7hQqCmKhg2JsEXJjkQDeaWNNLRQKY6dPhYZpgxjEuh65JWY"
        );
    }

    #[test]
    fn test_asset_id_normalization() {
        assert_eq!(normalize_asset_id(""), "WAVES");
        assert_eq!(normalize_asset_id(TOKEN_ID), TOKEN_ID);
        assert_eq!(denormalize_asset_id("WAVES"), "");
        assert_eq!(denormalize_asset_id(normalize_asset_id("")), "");
    }

    #[test]
    fn test_matcher_paths() {
        let pair = AssetPair::new(asset(TOKEN_ID, 2), waves());
        assert_eq!(
            cancel_order_path(&pair),
            format!("/matcher/orderbook/{}/WAVES/cancel", TOKEN_ID)
        );
        assert_eq!(
            user_orders_path(&pair, PUBLIC_KEY),
            format!("/matcher/orderbook/{}/WAVES/publicKey/{}", TOKEN_ID, PUBLIC_KEY)
        );
    }
}
