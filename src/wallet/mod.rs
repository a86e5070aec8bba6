//! Wallet
//!
//! Passphrase generation, address derivation and validation, and the stored
//! account list.

pub mod accounts;
pub mod address;
pub mod address_validation;
pub mod passphrase;

pub use accounts::{Account, AccountService, MemoryStorage, StateStorage, WalletState};
pub use address::{
    address_from_passphrase, build_raw_address, derive_account, to_display_address, DerivedAccount,
};
pub use address_validation::{
    checked_address, cleanup_optional_prefix, is_valid_alias_name, validate_address,
    verify_address,
};
pub use passphrase::{generate_passphrase, is_wordlist_phrase, passphrase_from_words};
