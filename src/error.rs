//! Unified error types for the Waves core
//!
//! Every fallible operation in the crate returns [`WavesResult`]. Errors are
//! plain data (code + message + optional details) so they can be serialized
//! and surfaced to callers without losing their category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all core operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavesError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl WavesError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingField, msg)
    }

    pub fn wrong_fee_currency(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::WrongFeeCurrency, msg)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, msg)
    }

    /// Raised when two money values of different currencies meet in one operation.
    pub fn currency_mismatch(expected: &str, actual: &str) -> Self {
        Self::new(
            ErrorCode::CurrencyMismatch,
            format!(
                "Currencies must be the same for operands. Expected: {}; Actual: {}",
                expected, actual
            ),
        )
    }

    pub fn invalid_base58(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBase58, msg)
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAddress, msg)
    }

    pub fn precision_overflow(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::PrecisionOverflow, msg)
    }

    pub fn crypto_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CryptoError, msg)
    }

    pub fn signing_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SigningFailed, msg)
    }

    pub fn entropy_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::EntropyUnavailable, msg)
    }

    pub fn storage_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }

    /// True for errors the caller can fix by correcting its input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidInput
                | ErrorCode::MissingField
                | ErrorCode::WrongFeeCurrency
                | ErrorCode::InvalidArgument
        )
    }
}

impl fmt::Display for WavesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for WavesError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Validation errors
    InvalidInput,
    MissingField,
    WrongFeeCurrency,
    InvalidArgument,

    // Money errors
    CurrencyMismatch,
    PrecisionOverflow,

    // Decoding errors
    InvalidBase58,
    InvalidAddress,

    // Crypto errors
    CryptoError,
    SigningFailed,
    EntropyUnavailable,

    // Serialization / storage
    JsonError,
    HexError,
    StorageError,

    // Internal
    Internal,
}

/// Result type alias for core operations
pub type WavesResult<T> = Result<T, WavesError>;

// Conversions from common error types

impl From<serde_json::Error> for WavesError {
    fn from(e: serde_json::Error) -> Self {
        WavesError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for WavesError {
    fn from(e: hex::FromHexError) -> Self {
        WavesError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<bs58::decode::Error> for WavesError {
    fn from(e: bs58::decode::Error) -> Self {
        WavesError::new(ErrorCode::InvalidBase58, format!("Invalid base58 input: {}", e))
    }
}

impl From<rust_decimal::Error> for WavesError {
    fn from(e: rust_decimal::Error) -> Self {
        WavesError::new(ErrorCode::InvalidArgument, format!("Decimal error: {}", e))
    }
}

impl From<std::io::Error> for WavesError {
    fn from(e: std::io::Error) -> Self {
        WavesError::internal(format!("I/O error: {}", e))
    }
}

impl From<crate::crypto::SignatureError> for WavesError {
    fn from(e: crate::crypto::SignatureError) -> Self {
        WavesError::crypto_error(e.to_string())
    }
}
