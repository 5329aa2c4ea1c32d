use anyhow::Result;

use crate::commands::utils;
use lenswork_core::GalleryCore;

pub fn run(core: &GalleryCore, yes: bool) -> Result<()> {
    if !core.store.is_admin() {
        println!("No owner session is open.");
        return Ok(());
    }

    if !yes && !utils::confirm("Exit management mode?")? {
        println!("Cancelled.");
        return Ok(());
    }

    core.store.logout()?;
    println!("Owner session closed.");

    Ok(())
}
