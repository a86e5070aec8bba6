//! Account list
//!
//! Accounts live in a [`WalletState`] owned by a [`StateStorage`]. The service
//! loads the state, edits it and saves it back on every call. Backends are
//! out of scope for this crate; [`MemoryStorage`] keeps the state as JSON.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::address::address_from_passphrase;
use crate::crypto::hash::seed_checksum;
use crate::error::{WavesError, WavesResult};
use crate::log_debug;
use crate::utils::network_config::NetworkConfig;

/// A stored account. Never holds the passphrase or private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub public_key: String,
    /// Hex SHA-256 of the passphrase, used to recognize it on re-entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Encrypted passphrase, opaque to this crate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher: Option<String>,
}

impl Account {
    pub fn from_passphrase(passphrase: &str, config: &NetworkConfig) -> WavesResult<Self> {
        let derived = address_from_passphrase(passphrase, config)?;
        Ok(Self {
            address: derived.address.clone(),
            public_key: derived.keys.public_key.clone(),
            checksum: Some(seed_checksum(passphrase)),
            cipher: None,
        })
    }

    /// True if `passphrase` is the one this account was created from
    pub fn matches_passphrase(&self, passphrase: &str) -> bool {
        self.checksum.as_deref() == Some(seed_checksum(passphrase).as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Persistence seam for the wallet state
pub trait StateStorage {
    /// `None` when nothing has been saved yet
    fn load_state(&self) -> WavesResult<Option<WalletState>>;

    fn save_state(&self, state: &WalletState) -> WavesResult<()>;
}

/// In-memory storage holding the serialized state
#[derive(Debug, Default)]
pub struct MemoryStorage {
    json: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON last saved, if any
    pub fn snapshot(&self) -> WavesResult<Option<String>> {
        let guard = self
            .json
            .lock()
            .map_err(|_| WavesError::storage_error("Storage lock poisoned"))?;
        Ok(guard.clone())
    }
}

impl StateStorage for MemoryStorage {
    fn load_state(&self) -> WavesResult<Option<WalletState>> {
        match self.snapshot()? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_state(&self, state: &WalletState) -> WavesResult<()> {
        let json = serde_json::to_string(state)?;
        let mut guard = self
            .json
            .lock()
            .map_err(|_| WavesError::storage_error("Storage lock poisoned"))?;
        *guard = Some(json);
        Ok(())
    }
}

pub struct AccountService<S: StateStorage> {
    storage: S,
}

impl<S: StateStorage> AccountService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append an account. An address already in the list is left as is.
    /// Returns whether the account was added.
    pub fn add_account(&self, account: Account) -> WavesResult<bool> {
        let mut state = self.storage.load_state()?.unwrap_or_default();
        if state.accounts.iter().any(|a| a.address == account.address) {
            return Ok(false);
        }

        log_debug!("wallet::accounts", "Adding account", address = account.address);
        state.accounts.push(account);
        self.storage.save_state(&state)?;
        Ok(true)
    }

    /// Remove by address. Returns whether an account was removed.
    pub fn remove_account_by_address(&self, address: &str) -> WavesResult<bool> {
        let mut state = match self.storage.load_state()? {
            Some(state) => state,
            None => return Ok(false),
        };

        let before = state.accounts.len();
        state.accounts.retain(|a| a.address != address);
        if state.accounts.len() == before {
            return Ok(false);
        }
        self.storage.save_state(&state)?;
        Ok(true)
    }

    pub fn get_accounts(&self) -> WavesResult<Vec<Account>> {
        Ok(self.storage.load_state()?.unwrap_or_default().accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str =
        "manage manual recall harvest series desert melt police rose hollow moral pledge kitten position add";

    fn account(address: &str) -> Account {
        Account {
            address: address.to_string(),
            public_key: "pk".to_string(),
            checksum: None,
            cipher: None,
        }
    }

    #[test]
    fn test_empty_storage() {
        let service = AccountService::new(MemoryStorage::new());
        assert!(service.get_accounts().unwrap().is_empty());
        assert!(!service.remove_account_by_address("3P...").unwrap());
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let service = AccountService::new(MemoryStorage::new());
        assert!(service.add_account(account("a1")).unwrap());
        assert!(service.add_account(account("a2")).unwrap());
        assert!(!service.add_account(account("a1")).unwrap());

        let addresses: Vec<_> = service
            .get_accounts()
            .unwrap()
            .into_iter()
            .map(|a| a.address)
            .collect();
        assert_eq!(addresses, vec!["a1", "a2"]);
    }

    #[test]
    fn test_remove_by_address() {
        let service = AccountService::new(MemoryStorage::new());
        service.add_account(account("a1")).unwrap();
        service.add_account(account("a2")).unwrap();

        assert!(service.remove_account_by_address("a1").unwrap());
        assert!(!service.remove_account_by_address("a1").unwrap());
        assert_eq!(service.get_accounts().unwrap(), vec![account("a2")]);
    }

    #[test]
    fn test_state_is_stored_as_json() {
        let service = AccountService::new(MemoryStorage::new());
        service.add_account(account("a1")).unwrap();
        let json = service.storage().snapshot().unwrap().unwrap();
        assert_eq!(json, r#"{"accounts":[{"address":"a1","publicKey":"pk"}]}"#);
    }

    #[test]
    fn test_account_from_passphrase() {
        let acc = Account::from_passphrase(PHRASE, &NetworkConfig::mainnet()).unwrap();
        assert_eq!(acc.address, "3PPbMwqLtwBGcJrTA5whqJfY95GqnNnFMDX");
        assert!(acc.matches_passphrase(PHRASE));
        assert!(!acc.matches_passphrase("something else"));
        assert!(!serde_json::to_string(&acc).unwrap().contains("manage"));
    }
}
