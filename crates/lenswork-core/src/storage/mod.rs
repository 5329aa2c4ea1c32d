//! Typed storage wrappers over the byte-level lenswork-storage tables.
//!
//! Each wrapper owns one persisted collection: it serializes the collection's
//! JSON (or literal) wire shape on write, and hydrates tolerantly on read.
//! A corrupted value falls back to the collection's default instead of
//! failing startup.

mod custom_photo;
mod hidden_photo;
mod preference;
mod purchase;
mod session;

pub use custom_photo::{CUSTOM_PHOTO_BUDGET_BYTES, CustomPhotoStorage};
pub use hidden_photo::HiddenPhotoStorage;
pub use preference::PreferenceStorage;
pub use purchase::PurchaseStorage;
pub use session::SessionStorage;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

/// Typed storage facade owning all five collection wrappers.
pub struct Storage {
    db: Arc<Database>,
    pub custom_photos: CustomPhotoStorage,
    pub hidden_photos: HiddenPhotoStorage,
    pub purchases: PurchaseStorage,
    pub session: SessionStorage,
    pub preferences: PreferenceStorage,
}

impl Storage {
    /// Open (or create) the database at the given path and initialize every
    /// collection table.
    pub fn open(path: &str) -> Result<Self> {
        let raw = lenswork_storage::Storage::new(path)?;
        let db = raw.get_db();

        Ok(Self {
            custom_photos: CustomPhotoStorage::new(raw.custom_photos.clone()),
            hidden_photos: HiddenPhotoStorage::new(raw.hidden_photos.clone()),
            purchases: PurchaseStorage::new(raw.purchases.clone()),
            session: SessionStorage::new(raw.session.clone()),
            preferences: PreferenceStorage::new(raw.preferences.clone()),
            db,
        })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
