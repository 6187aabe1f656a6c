use std::collections::HashSet;
use std::path::Path;

use super::data::{Artwork, ArtworkId, Tool};
use crate::error::{GalleryError, Result};

/// The Catalog holds every artwork the gallery can show.
///
/// It is built once at startup, either from the built-in sample set or
/// from a JSON file, and is never mutated afterwards. Filtering borrows
/// from it and only ever produces a subsequence of references.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(artworks: Vec<Artwork>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(artworks.len());
        for artwork in &artworks {
            if !seen.insert(artwork.id) {
                return Err(GalleryError::Catalog(format!(
                    "duplicate artwork id {} (\"{}\")",
                    artwork.id, artwork.title
                )));
            }
        }

        Ok(Catalog { artworks })
    }

    /// Parse a catalog from a JSON array of artworks.
    ///
    /// An empty array is rejected: a file that yields nothing to browse
    /// is almost certainly the wrong file.
    pub fn from_json(json: &str) -> Result<Self> {
        let artworks: Vec<Artwork> = serde_json::from_str(json)?;
        if artworks.is_empty() {
            return Err(GalleryError::Catalog("catalog file contains no artworks".into()));
        }
        Self::new(artworks)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!("📁 Loaded {} artworks from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        Catalog {
            artworks: vec![
                artwork(
                    1,
                    "Cyberpunk City",
                    Tool::Midjourney,
                    "futuristic cyberpunk city at night, neon lights, rain",
                    &["cyberpunk", "city", "neon", "futuristic"],
                    42,
                    156,
                ),
                artwork(
                    2,
                    "Fantasy Forest",
                    Tool::DallE,
                    "magical forest with glowing mushrooms, fantasy art",
                    &["fantasy", "forest", "magical", "nature"],
                    38,
                    203,
                ),
                artwork(
                    3,
                    "Portrait Study",
                    Tool::StableDiffusion,
                    "realistic portrait of a person, detailed, photographic",
                    &["portrait", "realistic", "detailed", "photographic"],
                    67,
                    289,
                ),
                artwork(
                    4,
                    "Abstract Art",
                    Tool::LeonardoAi,
                    "abstract geometric shapes, colorful, modern art",
                    &["abstract", "geometric", "colorful", "modern"],
                    23,
                    145,
                ),
                artwork(
                    5,
                    "Pixel Adventure",
                    Tool::CustomModel,
                    "pixel art character in 8-bit style game",
                    &["pixel-art", "8-bit", "character", "retro"],
                    51,
                    178,
                ),
                artwork(
                    6,
                    "3D Render",
                    Tool::BlenderAi,
                    "3d rendered object with realistic lighting",
                    &["3d", "render", "realistic", "lighting"],
                    89,
                    334,
                ),
            ],
        }
    }

    /// All artworks in catalog order
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Look up an artwork by id
    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|artwork| artwork.id == id)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

fn artwork(
    id: u32,
    title: &str,
    tool: Tool,
    prompt: &str,
    tags: &[&str],
    likes: u32,
    views: u32,
) -> Artwork {
    Artwork {
        id: ArtworkId(id),
        title: title.to_string(),
        image_url: format!("https://picsum.photos/400/300?random={}", id),
        tool,
        prompt: prompt.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        likes,
        views,
    }
}
