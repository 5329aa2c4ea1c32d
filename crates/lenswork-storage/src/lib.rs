//! Lenswork Storage - Low-level storage abstraction layer
//!
//! This crate provides the persistence layer for Lenswork, using redb as the
//! embedded database. It exposes byte-level APIs only; the typed wrappers and
//! all JSON shapes live in the lenswork-core crate.
//!
//! # Tables
//!
//! One table per persisted collection, each holding a single well-known key:
//!
//! - `custom_photos` - the uploaded-photo list
//! - `hidden_builtin_photos` - soft-deleted built-in photo IDs
//! - `purchases` - purchased photo IDs
//! - `session` - the owner-session flag
//! - `preferences` - the language preference

pub mod custom_photo;
pub mod hidden_photo;
pub mod preference;
pub mod purchase;
pub mod session;

mod table_storage;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

pub use custom_photo::CustomPhotoStorage;
pub use hidden_photo::HiddenPhotoStorage;
pub use preference::PreferenceStorage;
pub use purchase::PurchaseStorage;
pub use session::SessionStorage;
pub use table_storage::TableStorage;

/// Central storage manager that initializes all collection tables
pub struct Storage {
    db: Arc<Database>,
    pub custom_photos: CustomPhotoStorage,
    pub hidden_photos: HiddenPhotoStorage,
    pub purchases: PurchaseStorage,
    pub session: SessionStorage,
    pub preferences: PreferenceStorage,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will create the database file if it doesn't exist and initialize
    /// all required tables.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let custom_photos = CustomPhotoStorage::new(db.clone())?;
        let hidden_photos = HiddenPhotoStorage::new(db.clone())?;
        let purchases = PurchaseStorage::new(db.clone())?;
        let session = SessionStorage::new(db.clone())?;
        let preferences = PreferenceStorage::new(db.clone())?;

        Ok(Self {
            db,
            custom_photos,
            hidden_photos,
            purchases,
            session,
            preferences,
        })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
