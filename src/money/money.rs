//! Exact decimal amounts scoped to a currency
//!
//! Amounts are stored floor-rounded to the currency precision, so building
//! the same value twice gives the same result. "Tokens" are the human
//! readable decimal, "coins" the integer `tokens × 10^precision` used on the
//! wire.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::Currency;
use crate::error::{WavesError, WavesResult};

/// Inputs accepted as a token amount
pub trait ToAmount {
    fn to_amount(self) -> WavesResult<Decimal>;
}

impl ToAmount for Decimal {
    fn to_amount(self) -> WavesResult<Decimal> {
        Ok(self)
    }
}

impl ToAmount for &Decimal {
    fn to_amount(self) -> WavesResult<Decimal> {
        Ok(*self)
    }
}

impl ToAmount for &str {
    fn to_amount(self) -> WavesResult<Decimal> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(WavesError::invalid_argument("Please specify amount"));
        }
        trimmed
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| WavesError::invalid_argument(format!("Invalid amount {:?}: {}", trimmed, e)))
    }
}

impl ToAmount for f64 {
    fn to_amount(self) -> WavesResult<Decimal> {
        if !self.is_finite() {
            return Err(WavesError::invalid_argument(format!(
                "Amount must be a finite number, got {}",
                self
            )));
        }
        Decimal::from_f64(self)
            .ok_or_else(|| WavesError::invalid_argument(format!("Amount out of range: {}", self)))
    }
}

impl ToAmount for i64 {
    fn to_amount(self) -> WavesResult<Decimal> {
        Ok(Decimal::from(self))
    }
}

/// `10^exp` as a decimal, `None` past the 96-bit mantissa
pub(crate) fn pow10(exp: u32) -> Option<Decimal> {
    10i128
        .checked_pow(exp)
        .and_then(|value| Decimal::try_from_i128_with_scale(value, 0).ok())
}

#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Arc<Currency>,
}

impl Money {
    /// Build from a token amount, flooring to the currency precision
    pub fn new(amount: impl ToAmount, currency: Arc<Currency>) -> WavesResult<Self> {
        let amount = amount.to_amount()?;
        Ok(Self::from_decimal(amount, currency))
    }

    /// Same as [`Money::new`]
    pub fn from_tokens(amount: impl ToAmount, currency: Arc<Currency>) -> WavesResult<Self> {
        Self::new(amount, currency)
    }

    fn from_decimal(amount: Decimal, currency: Arc<Currency>) -> Self {
        let amount =
            amount.round_dp_with_strategy(currency.precision, RoundingStrategy::ToNegativeInfinity);
        Self { amount, currency }
    }

    /// Build from integer coins
    pub fn from_coins(coins: i64, currency: Arc<Currency>) -> WavesResult<Self> {
        let amount = Decimal::try_new(coins, currency.precision)?;
        Ok(Self::from_decimal(amount, currency))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Integer coins, truncated toward zero
    pub fn to_coins(&self) -> WavesResult<i64> {
        pow10(self.currency.precision)
            .and_then(|factor| self.amount.checked_mul(factor))
            .and_then(|scaled| scaled.trunc().to_i64())
            .ok_or_else(|| {
                WavesError::precision_overflow(format!(
                    "Amount {} {} does not fit into 64-bit coins",
                    self.amount,
                    self.currency.label()
                ))
            })
    }

    /// Token amount truncated to the currency precision
    pub fn to_tokens(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(self.currency.precision, RoundingStrategy::ToZero)
            .normalize()
    }

    fn ensure_same_currency(&self, other: &Money) -> WavesResult<()> {
        if self.currency.id != other.currency.id {
            return Err(WavesError::currency_mismatch(
                self.currency.label(),
                other.currency.label(),
            ));
        }
        Ok(())
    }

    fn compare(&self, other: &Money) -> WavesResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn plus(&self, other: &Money) -> WavesResult<Money> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| WavesError::precision_overflow("Sum is out of range"))?;
        Ok(Self::from_decimal(sum, Arc::clone(&self.currency)))
    }

    pub fn minus(&self, other: &Money) -> WavesResult<Money> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| WavesError::precision_overflow("Difference is out of range"))?;
        Ok(Self::from_decimal(difference, Arc::clone(&self.currency)))
    }

    /// Multiply by a finite scalar
    pub fn multiply(&self, multiplier: f64) -> WavesResult<Money> {
        if !multiplier.is_finite() {
            return Err(WavesError::invalid_argument(
                "Invalid multiplier: must be a finite number",
            ));
        }
        let multiplier = multiplier.to_amount()?;
        self.multiply_decimal(multiplier)
    }

    pub fn multiply_decimal(&self, multiplier: Decimal) -> WavesResult<Money> {
        let product = self
            .amount
            .checked_mul(multiplier)
            .ok_or_else(|| WavesError::precision_overflow("Product is out of range"))?;
        Ok(Self::from_decimal(product, Arc::clone(&self.currency)))
    }

    pub fn less_than(&self, other: &Money) -> WavesResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal_to(&self, other: &Money) -> WavesResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn greater_than(&self, other: &Money) -> WavesResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal_to(&self, other: &Money) -> WavesResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn equal_to(&self, other: &Money) -> WavesResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    // MARK: - Formatting

    /// Amount at full currency precision, e.g. `88.98410000`.
    ///
    /// `strip_zeros` drops trailing fraction zeros; `thousands_separator`
    /// groups the integer part with commas.
    pub fn format_amount(&self, strip_zeros: bool, thousands_separator: bool) -> String {
        let precision = self.currency.precision;
        let rounded = self
            .amount
            .round_dp_with_strategy(precision, self.currency.rounding_mode.strategy());
        let mut text = format!("{:.*}", precision as usize, rounded);

        if strip_zeros && text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.');
            text = trimmed.to_string();
        }

        if thousands_separator {
            text = group_thousands(&text);
        }
        text
    }

    /// Integer part of the amount, truncated
    pub fn format_integer_part(&self) -> String {
        let integer = self.amount.trunc();
        if integer.is_zero() {
            "0".to_string()
        } else {
            integer.to_string()
        }
    }

    /// Fraction at full precision without the leading zero, e.g. `.98410000`
    pub fn format_fraction_part(&self) -> String {
        let precision = self.currency.precision;
        let fraction = (self.amount - self.amount.trunc()).abs();
        let text = format!("{:.*}", precision as usize, fraction);
        text.strip_prefix('0').unwrap_or(&text).to_string()
    }
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}{}{}", sign, grouped, fraction)
}

/// Format integer coins of a currency at full precision
pub fn format_coins(coins: i64, currency: Arc<Currency>) -> WavesResult<String> {
    Ok(Money::from_coins(coins, currency)?.format_amount(false, false))
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency.id == other.currency.id && self.amount == other.amount
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_amount(false, false), self.currency.label())
    }
}
