use anyhow::{Result, bail};

use lenswork_core::GalleryCore;
use lenswork_core::models::Language;

pub fn run(core: &GalleryCore, language: &str) -> Result<()> {
    let Some(language) = Language::parse(language) else {
        bail!("unknown language code '{language}' (expected en, ar, or fr)");
    };

    core.store.set_language(language)?;
    println!("Language set to {language}.");

    Ok(())
}
