//! Image intake: downscale an uploaded image into a storable data URI.
//!
//! Uploads persist inside the catalog database, so the payload has to stay
//! small: decode, fit into the display bounding box, re-encode as lossy JPEG,
//! and wrap the result in a base64 data URI. The transform is pure: a decode
//! failure propagates to the caller and nothing else happens.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::error::{GalleryError, Result};

/// Display bounding box. 1280px on the long edge is plenty for web display
/// while keeping the stored payload inside the collection budget.
pub const MAX_WIDTH: u32 = 1280;
pub const MAX_HEIGHT: u32 = 800;

/// JPEG quality factor balancing size against a professional look.
pub const JPEG_QUALITY: u8 = 70;

const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Decode an image, fit it into the bounding box preserving aspect ratio,
/// and re-encode as a JPEG data URI.
pub fn downscale_to_data_uri(bytes: &[u8]) -> Result<String> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > MAX_WIDTH || img.height() > MAX_HEIGHT {
        img.resize(MAX_WIDTH, MAX_HEIGHT, FilterType::Lanczos3)
    } else {
        img
    };

    let rgb = img.to_rgb8();
    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY).encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        image::ExtendedColorType::Rgb8,
    )?;

    Ok(format!("{DATA_URI_PREFIX}{}", BASE64.encode(&encoded)))
}

/// Run the downscale on the blocking pool so the interactive path stays
/// responsive while large images decode.
pub async fn downscale_to_data_uri_async(bytes: Vec<u8>) -> Result<String> {
    tokio::task::spawn_blocking(move || downscale_to_data_uri(&bytes))
        .await
        .map_err(|err| GalleryError::ImageProcessing(err.to_string()))?
}
