use anyhow::{Result, bail};

use crate::commands::utils;
use lenswork_core::GalleryCore;

pub fn run(core: &GalleryCore, yes: bool) -> Result<()> {
    if !core.store.is_admin() {
        bail!("masking the built-in catalog requires an owner session");
    }

    if !yes
        && !utils::confirm("Mask all built-in photos? There is no undo from inside the gallery.")?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let hidden = core.store.clear_builtin_photos()?;
    println!("{hidden} built-in photos hidden.");

    Ok(())
}
