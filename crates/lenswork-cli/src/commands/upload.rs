use anyhow::{Context, Result, bail};

use crate::cli::UploadArgs;
use crate::commands::utils;
use lenswork_core::catalog::DEFAULT_MAP_CENTER;
use lenswork_core::models::PhotoDraft;
use lenswork_core::{GalleryCore, media};

/// Title used when the owner publishes without one.
const UNTITLED: &str = "بدون عنوان";

pub async fn run(core: &GalleryCore, args: UploadArgs) -> Result<()> {
    if !core.store.is_admin() {
        bail!("publishing photos requires an owner session");
    }

    let bytes = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let url = media::downscale_to_data_uri_async(bytes).await?;

    let city = args.city.as_deref().map(utils::find_city).transpose()?;
    let coords = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => [lat, lon],
        _ => city.map(|c| c.center).unwrap_or(DEFAULT_MAP_CENTER),
    };

    let draft = PhotoDraft {
        url,
        title: args.title.unwrap_or_else(|| UNTITLED.to_string()),
        title_ar: None,
        title_fr: None,
        description: "Custom uploaded photo".to_string(),
        location_name: city
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Morocco".to_string()),
        coords,
        price: None,
    };

    let photo = core.store.upload(draft)?;
    println!("Published {} ({})", photo.title, photo.id);

    Ok(())
}
