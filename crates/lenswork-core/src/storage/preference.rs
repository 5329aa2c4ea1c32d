//! Typed storage for viewer preferences.
//!
//! The language preference persists as the bare code bytes (`en`/`ar`/`fr`).

use tracing::warn;

use crate::error::Result;
use crate::models::Language;

const LANGUAGE_KEY: &str = "language";

/// Typed wrapper around lenswork_storage::PreferenceStorage.
#[derive(Clone)]
pub struct PreferenceStorage {
    inner: lenswork_storage::PreferenceStorage,
}

impl PreferenceStorage {
    pub fn new(inner: lenswork_storage::PreferenceStorage) -> Self {
        Self { inner }
    }

    /// Load the language preference, falling back to the default language
    /// when the key is absent or unreadable.
    pub fn language(&self) -> Language {
        let bytes = match self.inner.get_raw(LANGUAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Language::default(),
            Err(err) => {
                warn!("failed to read language preference, using default: {err:#}");
                return Language::default();
            }
        };

        match std::str::from_utf8(&bytes).ok().and_then(Language::parse) {
            Some(language) => language,
            None => {
                warn!("language preference is corrupted, using default");
                Language::default()
            }
        }
    }

    /// Persist the language preference.
    pub fn set_language(&self, language: Language) -> Result<()> {
        self.inner
            .put_raw(LANGUAGE_KEY, language.as_str().as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::Database;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn setup() -> (PreferenceStorage, lenswork_storage::PreferenceStorage, tempfile::TempDir)
    {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let raw = lenswork_storage::PreferenceStorage::new(db).unwrap();
        (PreferenceStorage::new(raw.clone()), raw, temp_dir)
    }

    #[test]
    fn test_default_is_arabic() {
        let (storage, _raw, _temp_dir) = setup();
        assert_eq!(storage.language(), Language::Ar);
    }

    #[test]
    fn test_round_trip() {
        let (storage, _raw, _temp_dir) = setup();

        storage.set_language(Language::Fr).unwrap();
        assert_eq!(storage.language(), Language::Fr);
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let (storage, raw, _temp_dir) = setup();

        raw.put_raw("language", b"klingon").unwrap();
        assert_eq!(storage.language(), Language::Ar);
    }
}
