use anyhow::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::utils;
use lenswork_core::GalleryCore;
use lenswork_core::catalog::{self, DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};
use lenswork_core::models::PhotoOrigin;

pub fn run(core: &GalleryCore, city: Option<&str>, format: OutputFormat) -> Result<()> {
    match city {
        Some(city) => city_markers(core, city, format),
        None => country_view(core, format),
    }
}

fn country_view(core: &GalleryCore, format: OutputFormat) -> Result<()> {
    let store = &core.store;
    let language = store.language();

    if format.is_json() {
        let cities: Vec<_> = catalog::cities()
            .iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "name": c.name,
                    "center": c.center,
                    "zoom": c.zoom,
                    "photos": store.photos_for_city(c).len(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "center": DEFAULT_MAP_CENTER,
                "zoom": DEFAULT_MAP_ZOOM,
                "cities": cities,
            }))?
        );
        return Ok(());
    }

    println!(
        "Morocco [{:.4}, {:.4}] zoom {}",
        DEFAULT_MAP_CENTER[0], DEFAULT_MAP_CENTER[1], DEFAULT_MAP_ZOOM
    );
    for city in catalog::cities() {
        println!(
            "  {} ({}) [{:.4}, {:.4}] zoom {} - {} photos",
            city.name,
            city.localized_name(language),
            city.center[0],
            city.center[1],
            city.zoom,
            store.photos_for_city(city).len()
        );
    }

    Ok(())
}

fn city_markers(core: &GalleryCore, city: &str, format: OutputFormat) -> Result<()> {
    let store = &core.store;
    let city = utils::find_city(city)?;
    let photos = store.photos_for_city(city);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&photos)?);
        return Ok(());
    }

    println!(
        "{} [{:.4}, {:.4}] zoom {}",
        city.name, city.center[0], city.center[1], city.zoom
    );
    if photos.is_empty() {
        println!("  (no placeable photos)");
        return Ok(());
    }
    for photo in &photos {
        // Coordinates are guaranteed placeable by the composer.
        let coords = photo.valid_coords().unwrap_or(city.center);
        let marker = match photo.origin {
            PhotoOrigin::Custom => "gold",
            PhotoOrigin::BuiltIn => "standard",
        };
        println!(
            "  [{marker}] {} - {} [{:.4}, {:.4}]",
            photo.id, photo.title, coords[0], coords[1]
        );
    }

    Ok(())
}
