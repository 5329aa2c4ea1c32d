//! Session storage - byte-level API for the owner-session flag.

use crate::define_table_storage;

define_table_storage! {
    /// Low-level storage for the admin session flag
    pub struct SessionStorage { table: "session" }
}
