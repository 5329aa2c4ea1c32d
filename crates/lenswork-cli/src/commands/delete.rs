use anyhow::{Result, bail};

use crate::commands::utils;
use lenswork_core::GalleryCore;

pub fn run(core: &GalleryCore, id: &str, yes: bool) -> Result<()> {
    if !core.store.is_admin() {
        bail!("deleting photos requires an owner session");
    }

    if !yes && !utils::confirm(&format!("Delete photo {id}?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    if core.store.delete_photo(id)? {
        println!("Photo {id} removed from the gallery.");
    } else {
        println!("Nothing to delete.");
    }

    Ok(())
}
