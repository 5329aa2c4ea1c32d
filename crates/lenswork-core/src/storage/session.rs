//! Typed storage for the owner-session flag.
//!
//! The wire shape is the literal bytes `true` under the `admin` key; any
//! other value, or an absent key, reads as a visitor session.

use tracing::warn;

use crate::error::Result;

const FLAG_KEY: &str = "admin";
const FLAG_VALUE: &[u8] = b"true";

/// Typed wrapper around lenswork_storage::SessionStorage.
#[derive(Clone)]
pub struct SessionStorage {
    inner: lenswork_storage::SessionStorage,
}

impl SessionStorage {
    pub fn new(inner: lenswork_storage::SessionStorage) -> Self {
        Self { inner }
    }

    /// Whether a persisted owner session is present.
    pub fn is_admin(&self) -> bool {
        match self.inner.get_raw(FLAG_KEY) {
            Ok(Some(value)) => value == FLAG_VALUE,
            Ok(None) => false,
            Err(err) => {
                warn!("failed to read session flag, assuming visitor: {err:#}");
                false
            }
        }
    }

    /// Persist the owner session.
    pub fn set_admin(&self) -> Result<()> {
        self.inner.put_raw(FLAG_KEY, FLAG_VALUE)?;
        Ok(())
    }

    /// Clear the owner session.
    pub fn clear(&self) -> Result<()> {
        self.inner.delete(FLAG_KEY)?;
        Ok(())
    }
}
