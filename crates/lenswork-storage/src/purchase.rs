//! Purchase storage - byte-level API for the purchased-photo ID set.

use crate::define_table_storage;

define_table_storage! {
    /// Low-level storage for purchased photo IDs
    pub struct PurchaseStorage { table: "purchases" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::Database;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_put_and_get_raw() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = PurchaseStorage::new(db).unwrap();

        storage.put_raw("ids", br#"["m1"]"#).unwrap();

        let retrieved = storage.get_raw("ids").unwrap();
        assert_eq!(retrieved.unwrap(), br#"["m1"]"#);
    }

    #[test]
    fn test_missing_key_is_none() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = PurchaseStorage::new(db).unwrap();

        assert!(storage.get_raw("ids").unwrap().is_none());
    }
}
