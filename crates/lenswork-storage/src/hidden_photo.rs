//! Hidden built-in photo storage - byte-level API for the soft-delete ID set.

use crate::define_table_storage;

define_table_storage! {
    /// Low-level storage for the IDs of masked built-in photos
    pub struct HiddenPhotoStorage { table: "hidden_builtin_photos" }
}
