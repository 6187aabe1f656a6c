use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, RgbaImage};

use super::source::ImageSource;
use crate::error::Result;

/// Size of grid card thumbnails (cover-cropped)
pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 256;

/// Longest side of the preview used by masonry cards and the detail modal
pub const PREVIEW_MAX_SIZE: u32 = 1280;

/// Decoded image handles for one artwork
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Exactly CARD_WIDTH x CARD_HEIGHT
    pub card: Handle,
    /// Full aspect ratio, at most PREVIEW_MAX_SIZE on its longest side
    pub preview: Handle,
    /// Intrinsic size of the source image
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    /// Height over width of the source image
    pub fn aspect(&self) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        self.height as f32 / self.width as f32
    }
}

/// Fetch and decode the image behind a URI.
///
/// Decoding and resizing run on the blocking pool so they never hold up
/// the executor threads serving other image downloads.
pub async fn load(client: reqwest::Client, uri: String) -> Result<Thumbnail> {
    let bytes = ImageSource::parse(&uri).fetch(&client).await?;
    let thumbnail = tokio::task::spawn_blocking(move || decode(&bytes)).await??;
    tracing::debug!(
        "📸 Generated thumbnail for {} ({}x{})",
        uri,
        thumbnail.width,
        thumbnail.height
    );
    Ok(thumbnail)
}

/// Decode image bytes into card and preview handles
pub fn decode(bytes: &[u8]) -> Result<Thumbnail> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = (img.width(), img.height());

    let card = card_pixels(&img);
    let preview = preview_pixels(img);

    Ok(Thumbnail {
        card: to_handle(card),
        preview: to_handle(preview),
        width,
        height,
    })
}

/// Scale to cover the card, then crop the overflow
fn card_pixels(img: &DynamicImage) -> RgbaImage {
    img.resize_to_fill(CARD_WIDTH, CARD_HEIGHT, FilterType::Lanczos3)
        .to_rgba8()
}

/// Downscale large images, keeping the aspect ratio
fn preview_pixels(img: DynamicImage) -> RgbaImage {
    if img.width().max(img.height()) > PREVIEW_MAX_SIZE {
        img.resize(PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE, FilterType::Lanczos3)
            .to_rgba8()
    } else {
        img.to_rgba8()
    }
}

fn to_handle(pixels: RgbaImage) -> Handle {
    Handle::from_rgba(pixels.width(), pixels.height(), pixels.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::media::source::http_client;
    use image::ImageFormat;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([200, 40, 90, 255]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_card_is_cover_cropped() {
        let wide = DynamicImage::ImageRgba8(RgbaImage::new(800, 200));
        let tall = DynamicImage::ImageRgba8(RgbaImage::new(300, 900));
        for img in [wide, tall] {
            let card = card_pixels(&img);
            assert_eq!((card.width(), card.height()), (CARD_WIDTH, CARD_HEIGHT));
        }
    }

    #[test]
    fn test_preview_keeps_aspect_and_caps_size() {
        let big = preview_pixels(DynamicImage::ImageRgba8(RgbaImage::new(2560, 1280)));
        assert_eq!((big.width(), big.height()), (1280, 640));

        let small = preview_pixels(DynamicImage::ImageRgba8(RgbaImage::new(400, 300)));
        assert_eq!((small.width(), small.height()), (400, 300));
    }

    #[test]
    fn test_decode_records_intrinsic_size() {
        let thumbnail = decode(&png_bytes(640, 480)).unwrap();
        assert_eq!((thumbnail.width, thumbnail.height), (640, 480));
        assert_eq!(thumbnail.aspect(), 0.75);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(GalleryError::Image(_))));
    }

    #[test]
    fn test_load_from_local_file() {
        let path = std::env::temp_dir().join(format!("prism-gallery-{}.png", std::process::id()));
        std::fs::write(&path, png_bytes(100, 200)).unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let thumbnail = runtime
            .block_on(load(http_client().unwrap(), path.to_string_lossy().to_string()))
            .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((thumbnail.width, thumbnail.height), (100, 200));
        assert_eq!(thumbnail.aspect(), 2.0);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let result = runtime.block_on(load(
            http_client().unwrap(),
            "/nonexistent/prism-gallery/missing.png".to_string(),
        ));
        assert!(matches!(result, Err(GalleryError::Io(_))));
    }

    #[test]
    fn test_load_decodes_off_the_executor() {
        let path = std::env::temp_dir().join(format!("prism-gallery-{}-bad.png", std::process::id()));
        std::fs::write(&path, b"not a png").unwrap();

        // a single-threaded runtime still has a blocking pool for decoding
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let client = http_client().unwrap();
        let results = runtime.block_on(async {
            let bad = load(client.clone(), path.to_string_lossy().to_string());
            let missing = load(client, "/nonexistent/prism-gallery/other.png".to_string());
            (bad.await, missing.await)
        });
        std::fs::remove_file(&path).ok();

        assert!(matches!(results.0, Err(GalleryError::Image(_))));
        assert!(matches!(results.1, Err(GalleryError::Io(_))));
    }
}
