/// Artwork image loading module
///
/// This module handles:
/// - Resolving image URIs to remote URLs or local files
/// - Fetching the raw bytes
/// - Decoding and generating card thumbnails and previews

pub mod source;
pub mod thumbnail;

pub use thumbnail::Thumbnail;
