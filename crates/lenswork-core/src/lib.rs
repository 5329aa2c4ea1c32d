//! Lenswork Core - the catalog state machine behind the portfolio site.
//!
//! Everything displayable derives from three inputs: the static city catalog
//! compiled into the binary, the owner's uploaded photos, and the set of
//! masked built-in photo IDs. The [`CatalogStore`] owns those collections
//! (plus the purchase ledger, owner session, and language preference),
//! persists every mutation through the typed storage layer, and notifies
//! subscribers after each commit. Map, grid, and detail views are external:
//! they read through accessors and feed selections back in.

pub mod catalog;
pub mod error;
pub mod media;
pub mod models;
pub mod paths;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{GalleryError, Result};
pub use models::*;
pub use store::{CatalogStore, StoreEvent, StoreStats};

use std::sync::Arc;
use storage::Storage;
use tracing::info;

/// Core application state shared between the CLI and web embeddings.
pub struct GalleryCore {
    pub storage: Arc<Storage>,
    pub store: CatalogStore,
}

impl GalleryCore {
    pub fn new(db_path: &str) -> anyhow::Result<Self> {
        let storage = Arc::new(Storage::open(db_path)?);
        let store = CatalogStore::open(storage.clone());

        info!("Initializing Lenswork (catalog-store mode)");

        Ok(Self { storage, store })
    }
}
