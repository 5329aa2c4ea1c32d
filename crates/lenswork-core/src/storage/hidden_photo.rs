//! Typed storage for the soft-deleted built-in photo ID set.

use std::collections::BTreeSet;
use tracing::warn;

use crate::error::Result;

const DOC_KEY: &str = "ids";

/// Typed wrapper around lenswork_storage::HiddenPhotoStorage.
#[derive(Clone)]
pub struct HiddenPhotoStorage {
    inner: lenswork_storage::HiddenPhotoStorage,
}

impl HiddenPhotoStorage {
    pub fn new(inner: lenswork_storage::HiddenPhotoStorage) -> Self {
        Self { inner }
    }

    /// Load the masked-ID set. Corruption hydrates as the empty set.
    pub fn load(&self) -> BTreeSet<String> {
        let bytes = match self.inner.get_raw(DOC_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return BTreeSet::new(),
            Err(err) => {
                warn!("failed to read hidden photo ids, starting empty: {err:#}");
                return BTreeSet::new();
            }
        };

        match serde_json::from_slice::<Vec<String>>(&bytes) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!("hidden photo id payload is corrupted, starting empty: {err}");
                BTreeSet::new()
            }
        }
    }

    /// Persist the masked-ID set. The set serializes in sorted order, so the
    /// stored payload is stable across writes.
    pub fn save(&self, ids: &BTreeSet<String>) -> Result<()> {
        let payload = serde_json::to_vec(ids)?;
        self.inner.put_raw(DOC_KEY, &payload)?;
        Ok(())
    }
}
