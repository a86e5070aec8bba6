//! Money
//!
//! Currencies, exact decimal amounts and matcher order prices.

pub mod currency;
pub mod money;
pub mod order_price;
pub mod registry;

pub use currency::{Currency, CurrencyData, RoundingMode};
pub use money::{format_coins, Money, ToAmount};
pub use order_price::{AssetPair, OrderPrice, MATCHER_SCALE};
pub use registry::CurrencyRegistry;
