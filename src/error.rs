//! Error types for the gallery

use thiserror::Error;

/// Result type alias for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Everything that can go wrong while loading the catalog or its images.
///
/// Filtering itself never fails: an empty result is a valid outcome.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Catalog error: {0}")]
    Catalog(String),
}
