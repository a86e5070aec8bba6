//! Currency registry
//!
//! Maps asset ids to shared [`Currency`] instances. Lookups read an immutable
//! snapshot; `create` publishes a copy with the new entry, and
//! `invalidate_and_reload` swaps in a freshly built map. A reader therefore
//! sees one complete generation or the next, never a partial one.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::currency::{self, Currency, CurrencyData};
use crate::log_info;

type CurrencyMap = HashMap<String, Arc<Currency>>;

pub struct CurrencyRegistry {
    current: RwLock<Arc<CurrencyMap>>,
}

fn build_map(well_known: Vec<Currency>) -> CurrencyMap {
    well_known
        .into_iter()
        .map(|c| (c.id.clone(), Arc::new(c)))
        .collect()
}

impl CurrencyRegistry {
    pub fn new(well_known: Vec<Currency>) -> Self {
        Self {
            current: RwLock::new(Arc::new(build_map(well_known))),
        }
    }

    /// Registry seeded with WAVES, BTC, USD, EUR and CNY
    pub fn with_defaults() -> Self {
        Self::new(currency::well_known())
    }

    fn snapshot(&self) -> Arc<CurrencyMap> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Return the cached currency for `data.id`, or build (and cache) a new one.
    /// Data without an id yields a temporary currency that is never cached.
    pub fn create(&self, data: CurrencyData) -> Arc<Currency> {
        let id = match data.id.clone() {
            None => return Arc::new(data.build()),
            Some(id) => id,
        };

        if let Some(existing) = self.snapshot().get(&id) {
            return Arc::clone(existing);
        }

        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // another writer may have inserted it meanwhile
        if let Some(existing) = guard.get(&id) {
            return Arc::clone(existing);
        }

        let created = Arc::new(data.build());
        let mut next = CurrencyMap::clone(&guard);
        next.insert(id, Arc::clone(&created));
        *guard = Arc::new(next);
        created
    }

    pub fn get(&self, id: &str) -> Option<Arc<Currency>> {
        self.snapshot().get(id).cloned()
    }

    /// The native asset
    pub fn native(&self) -> Arc<Currency> {
        self.get(currency::WAVES_ID)
            .unwrap_or_else(|| self.create(CurrencyData::new(currency::WAVES_ID, "Waves", 8)))
    }

    /// Number of cached currencies
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Drop every cached currency and start over from `well_known`
    pub fn invalidate_and_reload(&self, well_known: Vec<Currency>) {
        let next = Arc::new(build_map(well_known));
        let count = next.len();

        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
        log_info!("money::registry", "Currency cache reloaded", currencies = count);
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
