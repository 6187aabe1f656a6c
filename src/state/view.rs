//! View state for the gallery window.
//!
//! This record holds every piece of UI state: filter criteria, layout
//! mode, the record shown in the detail modal and the hovered card. All
//! transitions are plain methods so they can be tested without a window.
//! The state lives for one session and is never written to disk.

use serde::{Deserialize, Serialize};

use super::data::{ArtworkId, Category, Tool};
use super::filter::{Choice, Criteria};

/// How the filtered artworks are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Uniform cards in fixed columns
    #[default]
    Grid,
    /// Variable-height cards flowing through columns
    Masonry,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Grid => LayoutMode::Masonry,
            LayoutMode::Masonry => LayoutMode::Grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub criteria: Criteria,
    pub mode: LayoutMode,
    /// Artwork shown in the detail modal
    pub selected: Option<ArtworkId>,
    /// Card under the pointer, drives the like/view overlay
    #[serde(skip)]
    pub hovered: Option<ArtworkId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_search(&mut self, text: String) {
        self.criteria.search = text;
    }

    pub fn update_tool(&mut self, tool: Choice<Tool>) {
        self.criteria.tool = tool;
    }

    pub fn update_category(&mut self, category: Choice<Category>) {
        self.criteria.category = category;
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Open the detail modal for an artwork
    pub fn select_record(&mut self, id: ArtworkId) {
        self.selected = Some(id);
    }

    /// Close the detail modal
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Reset search, tool and category. Layout and selection are kept.
    pub fn clear_filters(&mut self) {
        self.criteria = Criteria::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    pub fn hover(&mut self, id: ArtworkId) {
        self.hovered = Some(id);
    }

    /// Clear the hover only if `id` is still the hovered card. Enter and
    /// exit events of neighbouring cards may arrive in either order.
    pub fn unhover(&mut self, id: ArtworkId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn is_hovered(&self, id: ArtworkId) -> bool {
        self.hovered == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    #[test]
    fn test_default_state() {
        let state = ViewState::new();
        assert_eq!(state.criteria.search, "");
        assert_eq!(state.criteria.tool, Choice::All);
        assert_eq!(state.criteria.category, Choice::All);
        assert_eq!(state.mode, LayoutMode::Grid);
        assert_eq!(state.selected, None);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_clear_filters_restores_full_catalog() {
        let catalog = Catalog::sample();
        let mut state = ViewState::new();
        state.update_search("zzz-no-match".to_string());
        state.update_tool(Choice::Only(Tool::Midjourney));
        state.update_category(Choice::Only(Category::Abstract));
        state.set_mode(LayoutMode::Masonry);
        state.select_record(ArtworkId(3));
        assert!(state.criteria.apply(catalog.artworks()).is_empty());
        assert!(state.has_active_filters());

        state.clear_filters();

        let all: Vec<_> = catalog.artworks().iter().collect();
        assert_eq!(state.criteria.apply(catalog.artworks()), all);
        assert!(!state.has_active_filters());
        // untouched by clear_filters
        assert_eq!(state.mode, LayoutMode::Masonry);
        assert_eq!(state.selected, Some(ArtworkId(3)));
    }

    #[test]
    fn test_toggle_mode() {
        let mut state = ViewState::new();
        state.toggle_mode();
        assert_eq!(state.mode, LayoutMode::Masonry);
        state.toggle_mode();
        assert_eq!(state.mode, LayoutMode::Grid);
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let mut once = ViewState::new();
        once.update_search("city".to_string());
        once.update_tool(Choice::Only(Tool::DallE));
        once.set_mode(LayoutMode::Masonry);
        once.select_record(ArtworkId(1));
        once.clear_filters();

        let mut twice = once.clone();
        twice.update_search("city".to_string());
        twice.clear_filters();
        twice.clear_filters();
        twice.set_mode(LayoutMode::Masonry);
        twice.select_record(ArtworkId(1));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_and_clear_selection() {
        let mut state = ViewState::new();
        state.select_record(ArtworkId(4));
        assert_eq!(state.selected, Some(ArtworkId(4)));

        state.select_record(ArtworkId(5));
        assert_eq!(state.selected, Some(ArtworkId(5)));

        state.clear_selection();
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_unhover_ignores_stale_card() {
        let mut state = ViewState::new();
        state.hover(ArtworkId(1));
        state.hover(ArtworkId(2));
        state.unhover(ArtworkId(1));
        assert!(state.is_hovered(ArtworkId(2)));
        state.unhover(ArtworkId(2));
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_serialization_skips_hover() {
        let mut state = ViewState::new();
        state.update_search("neon".to_string());
        state.update_category(Choice::Only(Category::PixelArt));
        state.set_mode(LayoutMode::Masonry);
        state.select_record(ArtworkId(5));
        state.hover(ArtworkId(2));

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"masonry\""));
        assert!(json.contains("\"pixel-art\""));
        assert!(!json.contains("hovered"));

        let restored: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.criteria, state.criteria);
        assert_eq!(restored.selected, Some(ArtworkId(5)));
        assert_eq!(restored.hovered, None);
    }
}
