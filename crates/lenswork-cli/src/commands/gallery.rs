use anyhow::Result;
use comfy_table::Table;

use crate::cli::OutputFormat;
use lenswork_core::GalleryCore;
use lenswork_core::catalog::{self, CityFilter};
use lenswork_core::models::{Photo, PhotoOrigin};

pub fn run(core: &GalleryCore, city: &str, highlights: bool, format: OutputFormat) -> Result<()> {
    let store = &core.store;

    let photos: Vec<Photo> = if highlights {
        store.highlights()
    } else {
        store.filtered(&resolve_filter(city))
    };

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&photos)?);
        return Ok(());
    }

    if photos.is_empty() {
        println!("The gallery is empty.");
        return Ok(());
    }

    let language = store.language();
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Location", "Origin", "License"]);
    for photo in &photos {
        table.add_row(vec![
            photo.id.as_str(),
            photo.localized_title(language),
            photo.location_name.as_str(),
            match photo.origin {
                PhotoOrigin::BuiltIn => "built-in",
                PhotoOrigin::Custom => "upload",
            },
            if store.is_purchased(&photo.id) {
                "unlocked"
            } else {
                "watermarked"
            },
        ]);
    }
    println!("{table}");

    Ok(())
}

/// Map a city argument onto the composer's filter, canonicalizing the name
/// so `--city marrakech` and `--city Marrakech` behave the same.
fn resolve_filter(city: &str) -> CityFilter {
    if city.eq_ignore_ascii_case("all") {
        return CityFilter::All;
    }
    let canonical = catalog::city_by_name(city)
        .or_else(|| catalog::city_by_id(city))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| city.to_string());
    CityFilter::Named(canonical)
}
