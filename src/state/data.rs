//! Shared data structures for the gallery
//!
//! These structs represent the catalog records that flow between
//! the catalog loader, the filter and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an artwork, unique within a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub u32);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The AI tool an artwork was generated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[serde(rename = "Midjourney")]
    Midjourney,
    #[serde(rename = "DALL-E")]
    DallE,
    #[serde(rename = "Stable Diffusion")]
    StableDiffusion,
    #[serde(rename = "Leonardo AI")]
    LeonardoAi,
    #[serde(rename = "Custom Model")]
    CustomModel,
    #[serde(rename = "Blender AI")]
    BlenderAi,
}

impl Tool {
    /// Every tool, in pick list order
    pub const ALL: [Tool; 6] = [
        Tool::Midjourney,
        Tool::DallE,
        Tool::StableDiffusion,
        Tool::LeonardoAi,
        Tool::CustomModel,
        Tool::BlenderAi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Midjourney => "Midjourney",
            Tool::DallE => "DALL-E",
            Tool::StableDiffusion => "Stable Diffusion",
            Tool::LeonardoAi => "Leonardo AI",
            Tool::CustomModel => "Custom Model",
            Tool::BlenderAi => "Blender AI",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browsing categories, matched against artwork tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cyberpunk,
    Fantasy,
    Realistic,
    Abstract,
    PixelArt,
    #[serde(rename = "3d")]
    ThreeD,
}

impl Category {
    /// Every category, in pick list order
    pub const ALL: [Category; 6] = [
        Category::Cyberpunk,
        Category::Fantasy,
        Category::Realistic,
        Category::Abstract,
        Category::PixelArt,
        Category::ThreeD,
    ];

    /// The label searched for inside tags
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cyberpunk => "cyberpunk",
            Category::Fantasy => "fantasy",
            Category::Realistic => "realistic",
            Category::Abstract => "abstract",
            Category::PixelArt => "pixel-art",
            Category::ThreeD => "3d",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single artwork in the catalog
///
/// Records are read-only once the catalog is built. The JSON keys follow
/// the web gallery's data (`imageUrl`, `aiTool`), with snake_case aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    /// URL or local path of the raster image
    #[serde(rename = "imageUrl", alias = "image_url")]
    pub image_url: String,
    #[serde(rename = "aiTool", alias = "tool")]
    pub tool: Tool,
    /// The prompt the image was generated from
    pub prompt: String,
    /// Ordered labels; only the first three are shown on a card
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
}
