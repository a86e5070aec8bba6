//! Currency descriptors

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest precision a decimal amount can carry
pub const MAX_PRECISION: u32 = 28;

/// Rounding applied when an amount is displayed at its currency's precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    #[default]
    HalfUp,
    HalfDown,
    HalfEven,
    Floor,
    Ceiling,
    Down,
    Up,
}

impl RoundingMode {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
        }
    }
}

/// An immutable currency. Identity is the asset id; `""` is the native asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub display_name: String,
    pub short_name: String,
    pub symbol: String,
    pub precision: u32,
    pub rounding_mode: RoundingMode,
    pub verified: bool,
}

impl Currency {
    pub fn is_native(&self) -> bool {
        self.id.is_empty()
    }

    /// Short name if present, otherwise the display name
    pub fn label(&self) -> &str {
        if self.short_name.is_empty() {
            &self.display_name
        } else {
            &self.short_name
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Input for creating a currency. A missing `id` makes a temporary currency.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyData {
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub rounding_mode: Option<RoundingMode>,
    #[serde(default)]
    pub verified: bool,
}

impl CurrencyData {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, precision: u32) -> Self {
        Self {
            id: Some(id.into()),
            display_name: display_name.into(),
            precision: Some(precision),
            ..Self::default()
        }
    }

    /// A currency that will not be cached, e.g. a freshly issued asset
    pub fn temporary(display_name: impl Into<String>, precision: u32) -> Self {
        Self {
            id: None,
            display_name: display_name.into(),
            precision: Some(precision),
            ..Self::default()
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    pub(crate) fn build(self) -> Currency {
        let short_name = self
            .short_name
            .unwrap_or_else(|| self.display_name.clone());
        Currency {
            id: self.id.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default(),
            precision: self.precision.unwrap_or(8).min(MAX_PRECISION),
            rounding_mode: self.rounding_mode.unwrap_or_default(),
            verified: self.verified,
            display_name: self.display_name,
            short_name,
        }
    }
}

// MARK: - Well-known currencies

pub const WAVES_ID: &str = "";
pub const BTC_ID: &str = "8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS";
pub const USD_ID: &str = "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck";
pub const EUR_ID: &str = "Gtb1WRznfchDnTh37ezoDTJ4wcoKaRsKqKjJjy7nm2zU";
pub const CNY_ID: &str = "DEJbZipbKQjwEiRjx2AqQFucrj5CZ3rAc4ZvFM8nAsoA";

/// The native asset
pub fn waves() -> Currency {
    CurrencyData::new(WAVES_ID, "Waves", 8)
        .with_short_name("WAVES")
        .with_symbol("W")
        .verified()
        .build()
}

/// The default well-known set: WAVES, BTC, USD, EUR, CNY
pub fn well_known() -> Vec<Currency> {
    vec![
        waves(),
        CurrencyData::new(BTC_ID, "Bitcoin", 8)
            .with_short_name("BTC")
            .with_symbol("₿")
            .verified()
            .build(),
        CurrencyData::new(USD_ID, "US Dollar", 2)
            .with_short_name("USD")
            .with_symbol("$")
            .verified()
            .build(),
        CurrencyData::new(EUR_ID, "Euro", 2)
            .with_short_name("EUR")
            .with_symbol("€")
            .verified()
            .build(),
        CurrencyData::new(CNY_ID, "Chinese Yuan", 2)
            .with_short_name("CNY")
            .with_symbol("¥")
            .verified()
            .build(),
    ]
}
