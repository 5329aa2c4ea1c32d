//! Typed storage for the uploaded-photo collection.

use tracing::warn;

use crate::error::{GalleryError, Result};
use crate::models::Photo;

const DOC_KEY: &str = "photos";

/// Budget for the serialized uploaded-photo payload. Uploads are downscaled
/// before they get here precisely to stay inside it.
pub const CUSTOM_PHOTO_BUDGET_BYTES: usize = 4 * 1024 * 1024;

/// Typed wrapper around lenswork_storage::CustomPhotoStorage.
#[derive(Clone)]
pub struct CustomPhotoStorage {
    inner: lenswork_storage::CustomPhotoStorage,
}

impl CustomPhotoStorage {
    pub fn new(inner: lenswork_storage::CustomPhotoStorage) -> Self {
        Self { inner }
    }

    /// Load the uploaded-photo list, newest first.
    ///
    /// Hydration is tolerant: an unreadable or corrupted payload yields an
    /// empty list, and individual entries that fail shape validation are
    /// dropped without discarding their siblings.
    pub fn load(&self) -> Vec<Photo> {
        let bytes = match self.inner.get_raw(DOC_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read custom photos, starting empty: {err:#}");
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("custom photo payload is corrupted, starting empty: {err}");
                return Vec::new();
            }
        };

        let mut photos = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<Photo>(entry) {
                Ok(photo) => photos.push(photo),
                Err(err) => warn!("dropping malformed custom photo entry: {err}"),
            }
        }
        photos
    }

    /// Persist the full uploaded-photo list, newest first. Refuses payloads
    /// over the storage budget without touching the stored value.
    pub fn save(&self, photos: &[Photo]) -> Result<()> {
        let payload = serde_json::to_vec(photos)?;
        if payload.len() > CUSTOM_PHOTO_BUDGET_BYTES {
            return Err(GalleryError::StorageQuotaExceeded {
                needed: payload.len(),
                limit: CUSTOM_PHOTO_BUDGET_BYTES,
            });
        }
        self.inner.put_raw(DOC_KEY, &payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoOrigin;
    use redb::Database;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn setup() -> (CustomPhotoStorage, lenswork_storage::CustomPhotoStorage, tempfile::TempDir)
    {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let raw = lenswork_storage::CustomPhotoStorage::new(db).unwrap();
        (CustomPhotoStorage::new(raw.clone()), raw, temp_dir)
    }

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            origin: PhotoOrigin::Custom,
            url: "data:image/jpeg;base64,xxxx".to_string(),
            title: "Test".to_string(),
            title_ar: None,
            title_fr: None,
            description: "Custom uploaded photo".to_string(),
            description_ar: None,
            description_fr: None,
            location_name: "Marrakech".to_string(),
            coords: Some([31.6, -8.0]),
            price: None,
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (storage, _raw, _temp_dir) = setup();

        storage.save(&[photo("custom-2"), photo("custom-1")]).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "custom-2");
        assert_eq!(loaded[1].id, "custom-1");
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let (storage, _raw, _temp_dir) = setup();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_corrupted_payload_loads_empty() {
        let (storage, raw, _temp_dir) = setup();

        raw.put_raw("photos", b"{not json").unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_malformed_entry_dropped_individually() {
        let (storage, raw, _temp_dir) = setup();

        let payload = format!(
            "[{},{}]",
            serde_json::to_string(&photo("custom-1")).unwrap(),
            r#"{"id":"custom-2"}"#
        );
        raw.put_raw("photos", payload.as_bytes()).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "custom-1");
    }

    #[test]
    fn test_quota_refusal_leaves_stored_value_intact() {
        let (storage, raw, _temp_dir) = setup();

        storage.save(&[photo("custom-1")]).unwrap();
        let before = raw.get_raw("photos").unwrap();

        let mut oversized = photo("custom-2");
        oversized.url = format!(
            "data:image/jpeg;base64,{}",
            "x".repeat(CUSTOM_PHOTO_BUDGET_BYTES + 1)
        );
        let result = storage.save(&[oversized, photo("custom-1")]);
        assert!(matches!(
            result,
            Err(GalleryError::StorageQuotaExceeded { .. })
        ));

        assert_eq!(raw.get_raw("photos").unwrap(), before);
    }
}
