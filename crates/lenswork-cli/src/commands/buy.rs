use anyhow::{Result, bail};

use lenswork_core::GalleryCore;

/// Demo checkout price, displayed only.
const LICENSE_PRICE: &str = "19.99 MAD";

pub fn run(core: &GalleryCore, id: &str) -> Result<()> {
    let Some(photo) = core.store.catalog().into_iter().find(|p| p.id == id) else {
        bail!("no photo with id '{id}' in the catalog");
    };

    if core.store.is_purchased(id) {
        println!("{} is already licensed.", photo.title);
        return Ok(());
    }

    core.store.purchase(id)?;
    println!("Licensed {} for {LICENSE_PRICE} (demo checkout).", photo.title);
    println!("Watermark removed; clean download unlocked.");

    Ok(())
}
