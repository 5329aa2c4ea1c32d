//! Typed storage for the purchased-photo ID set.

use std::collections::BTreeSet;
use tracing::warn;

use crate::error::Result;

const DOC_KEY: &str = "ids";

/// Typed wrapper around lenswork_storage::PurchaseStorage.
#[derive(Clone)]
pub struct PurchaseStorage {
    inner: lenswork_storage::PurchaseStorage,
}

impl PurchaseStorage {
    pub fn new(inner: lenswork_storage::PurchaseStorage) -> Self {
        Self { inner }
    }

    /// Load the purchased-ID set. Corruption hydrates as the empty set.
    pub fn load(&self) -> BTreeSet<String> {
        let bytes = match self.inner.get_raw(DOC_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return BTreeSet::new(),
            Err(err) => {
                warn!("failed to read purchases, starting empty: {err:#}");
                return BTreeSet::new();
            }
        };

        match serde_json::from_slice::<Vec<String>>(&bytes) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!("purchase payload is corrupted, starting empty: {err}");
                BTreeSet::new()
            }
        }
    }

    /// Persist the purchased-ID set.
    pub fn save(&self, ids: &BTreeSet<String>) -> Result<()> {
        let payload = serde_json::to_vec(ids)?;
        self.inner.put_raw(DOC_KEY, &payload)?;
        Ok(())
    }
}
