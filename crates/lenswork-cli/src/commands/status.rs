use anyhow::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use lenswork_core::GalleryCore;

pub fn run(core: &GalleryCore, format: OutputFormat) -> Result<()> {
    let store = &core.store;
    let stats = store.stats();
    let catalog_size = store.catalog().len();

    if format.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "session": if store.is_admin() { "owner" } else { "visitor" },
                "language": store.language().as_str(),
                "catalog_size": catalog_size,
                "custom_photos": stats.custom_photos,
                "hidden_builtins": stats.hidden_builtins,
                "purchased": stats.purchased,
            }))?
        );
        return Ok(());
    }

    println!("Lenswork Status");
    if store.is_admin() {
        println!("Session: owner (management mode active)");
    } else {
        println!("Session: visitor");
    }
    println!("Language: {}", store.language().as_str());
    println!(
        "Catalog: {catalog_size} photos ({} uploads, {} built-ins hidden)",
        stats.custom_photos, stats.hidden_builtins
    );
    println!("Licensed photos: {}", stats.purchased);

    Ok(())
}
