//! Preference storage - byte-level API for viewer preferences.

use crate::define_table_storage;

define_table_storage! {
    /// Low-level storage for the language preference
    pub struct PreferenceStorage { table: "preferences" }
}
