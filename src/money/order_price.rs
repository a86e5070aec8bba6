//! Order prices and asset pairs
//!
//! A price is quoted in price-asset tokens per one amount-asset token. The
//! matcher expects it as an integer scaled by [`MATCHER_SCALE`] and by the
//! precision difference of the two assets.

use std::fmt;
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::Currency;
use super::money::{pow10, ToAmount};
use crate::error::{WavesError, WavesResult};

/// Fixed scale of prices sent to the matcher
pub const MATCHER_SCALE: i64 = 100_000_000;

/// An ordered (amount asset, price asset) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPair {
    pub amount_asset: Arc<Currency>,
    pub price_asset: Arc<Currency>,
}

impl AssetPair {
    pub fn new(amount_asset: Arc<Currency>, price_asset: Arc<Currency>) -> Self {
        Self {
            amount_asset,
            price_asset,
        }
    }

    /// `"<amountId>/<priceId>"`
    pub fn key(&self) -> String {
        format!("{}/{}", self.amount_asset.id, self.price_asset.id)
    }

    pub fn precision_difference(&self) -> i64 {
        i64::from(self.price_asset.precision) - i64::from(self.amount_asset.precision)
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.amount_asset.label(), self.price_asset.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderPrice {
    tokens: Decimal,
    pair: AssetPair,
}

impl OrderPrice {
    /// Price in price-asset tokens, floored to the price-asset precision
    pub fn from_tokens(price: impl ToAmount, pair: AssetPair) -> WavesResult<Self> {
        let tokens = price.to_amount()?.round_dp_with_strategy(
            pair.price_asset.precision,
            RoundingStrategy::ToNegativeInfinity,
        );
        Ok(Self { tokens, pair })
    }

    /// Inverse of [`OrderPrice::to_backend_price`]
    pub fn from_backend_price(backend_price: i64, pair: AssetPair) -> WavesResult<Self> {
        let exponent = 8 + pair.precision_difference();
        let raw = Decimal::from(backend_price);
        let tokens = u32::try_from(exponent.unsigned_abs())
            .ok()
            .and_then(pow10)
            .and_then(|factor| {
                if exponent >= 0 {
                    raw.checked_div(factor)
                } else {
                    raw.checked_mul(factor)
                }
            })
            .ok_or_else(|| WavesError::precision_overflow("Backend price is out of range"))?
            .normalize();

        if tokens.scale() > pair.price_asset.precision {
            return Err(WavesError::precision_overflow(
                "Backend price has too many significant digits",
            ));
        }
        Ok(Self { tokens, pair })
    }

    pub fn pair(&self) -> &AssetPair {
        &self.pair
    }

    pub fn to_tokens(&self) -> Decimal {
        self.tokens
    }

    /// `tokens × 10^(pricePrecision − amountPrecision)`
    pub fn to_coins(&self) -> WavesResult<Decimal> {
        let difference = self.pair.precision_difference();
        let coins = u32::try_from(difference.unsigned_abs())
            .ok()
            .and_then(pow10)
            .and_then(|factor| {
                if difference >= 0 {
                    self.tokens.checked_mul(factor)
                } else {
                    self.tokens.checked_div(factor)
                }
            });
        coins.ok_or_else(|| WavesError::precision_overflow("Order price is out of range"))
    }

    /// Integer price the matcher expects: `to_coins() × 10^8`, truncated
    pub fn to_backend_price(&self) -> WavesResult<i64> {
        self.to_coins()?
            .checked_mul(Decimal::from(MATCHER_SCALE))
            .and_then(|scaled| scaled.trunc().to_i64())
            .ok_or_else(|| {
                WavesError::precision_overflow(format!(
                    "Order price {} does not fit into a 64-bit backend price",
                    self.tokens
                ))
            })
    }
}
