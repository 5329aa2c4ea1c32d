//! Custom photo storage - byte-level API for the uploaded-photo collection.

use crate::define_table_storage;

define_table_storage! {
    /// Low-level storage for user-uploaded photos
    pub struct CustomPhotoStorage { table: "custom_photos" }
}
