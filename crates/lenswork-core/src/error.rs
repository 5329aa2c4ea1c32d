//! Error types for gallery operations

use thiserror::Error;

/// Gallery operation error types
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("photo coordinates must be a pair of finite numbers")]
    InvalidCoordinates,

    #[error(
        "storage budget exceeded ({needed} bytes needed, {limit} allowed); delete older photos to free space"
    )]
    StorageQuotaExceeded { needed: usize, limit: usize },

    #[error("failed to process image: {0}")]
    ImageProcessing(String),

    #[error("incorrect owner key")]
    InvalidCredentials,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<image::ImageError> for GalleryError {
    fn from(err: image::ImageError) -> Self {
        GalleryError::ImageProcessing(err.to_string())
    }
}

/// Result type alias for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;
