//! Filtering of the catalog by search text, tool and category.
//!
//! Everything here is pure: no rendering, no I/O. The three tests are
//! combined with AND logic and the result keeps catalog order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::data::{Artwork, Category, Tool};

/// A single-select choice: either the `All` sentinel or one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: Copy> Choice<T> {
    /// Pick list options: `All` followed by every value.
    pub fn options(values: &[T]) -> Vec<Choice<T>> {
        std::iter::once(Choice::All)
            .chain(values.iter().copied().map(Choice::Only))
            .collect()
    }
}

impl<T> Choice<T> {
    /// Returns `true` if this choice narrows the result (not `All`).
    pub fn is_active(&self) -> bool {
        matches!(self, Choice::Only(_))
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("All"),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

/// The three user-controlled filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Criteria {
    /// Free text, matched case-insensitively against title and prompt
    pub search: String,
    pub tool: Choice<Tool>,
    pub category: Choice<Category>,
}

impl Criteria {
    /// Returns `true` if the artwork passes all three tests.
    #[cfg(test)]
    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.matches_with(&self.search.to_lowercase(), artwork)
    }

    /// Filter a slice of artworks, preserving their order.
    pub fn apply<'a>(&self, artworks: &'a [Artwork]) -> Vec<&'a Artwork> {
        let needle = self.search.to_lowercase();
        artworks
            .iter()
            .filter(|artwork| self.matches_with(&needle, artwork))
            .collect()
    }

    /// Returns `true` if any criterion differs from its default.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.tool.is_active() || self.category.is_active()
    }

    fn matches_with(&self, needle: &str, artwork: &Artwork) -> bool {
        matches_text(needle, artwork)
            && matches_tool(self.tool, artwork)
            && matches_category(self.category, artwork)
    }
}

/// `needle` must already be lowercased.
fn matches_text(needle: &str, artwork: &Artwork) -> bool {
    needle.is_empty()
        || artwork.title.to_lowercase().contains(needle)
        || artwork.prompt.to_lowercase().contains(needle)
}

fn matches_tool(choice: Choice<Tool>, artwork: &Artwork) -> bool {
    match choice {
        Choice::All => true,
        Choice::Only(tool) => artwork.tool == tool,
    }
}

/// Substring match: "3d" also matches a tag like "3d-print".
fn matches_category(choice: Choice<Category>, artwork: &Artwork) -> bool {
    match choice {
        Choice::All => true,
        Choice::Only(category) => artwork
            .tags
            .iter()
            .any(|tag| tag.contains(category.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    fn titles(result: &[&Artwork]) -> Vec<String> {
        result.iter().map(|artwork| artwork.title.clone()).collect()
    }

    fn search(text: &str) -> Criteria {
        Criteria {
            search: text.to_string(),
            ..Criteria::default()
        }
    }

    #[test]
    fn test_default_criteria_keep_full_catalog_in_order() {
        let catalog = Catalog::sample();
        let result = Criteria::default().apply(catalog.artworks());
        let expected: Vec<&Artwork> = catalog.artworks().iter().collect();
        assert_eq!(result, expected);
        assert!(!Criteria::default().is_active());
    }

    #[test]
    fn test_search_cyberpunk_finds_only_cyberpunk_city() {
        let catalog = Catalog::sample();
        let result = search("cyberpunk").apply(catalog.artworks());
        assert_eq!(titles(&result), vec!["Cyberpunk City"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_prompt() {
        let catalog = Catalog::sample();
        assert_eq!(titles(&search("PORTRAIT").apply(catalog.artworks())), vec!["Portrait Study"]);
        // "mushrooms" only appears in a prompt
        assert_eq!(titles(&search("Mushrooms").apply(catalog.artworks())), vec!["Fantasy Forest"]);
    }

    #[test]
    fn test_search_property_holds_for_every_result() {
        let catalog = Catalog::sample();
        for needle in ["art", "REAL", "city", "  ", "8-bit", "light"] {
            let criteria = search(needle);
            let lower = needle.to_lowercase();
            for artwork in catalog.artworks() {
                let expected = artwork.title.to_lowercase().contains(&lower)
                    || artwork.prompt.to_lowercase().contains(&lower);
                assert_eq!(criteria.matches(artwork), expected, "{needle:?} vs {}", artwork.title);
            }
        }
    }

    #[test]
    fn test_tool_filter_is_exact() {
        let catalog = Catalog::sample();
        let criteria = Criteria {
            tool: Choice::Only(Tool::DallE),
            ..Criteria::default()
        };
        let result = criteria.apply(catalog.artworks());
        assert_eq!(titles(&result), vec!["Fantasy Forest"]);
        assert!(result.iter().all(|artwork| artwork.tool == Tool::DallE));
    }

    #[test]
    fn test_category_filter_matches_tag_substrings() {
        let catalog = Catalog::sample();
        let criteria = Criteria {
            category: Choice::Only(Category::Fantasy),
            ..Criteria::default()
        };
        let result = criteria.apply(catalog.artworks());
        for artwork in catalog.artworks() {
            let has_tag = artwork.tags.iter().any(|tag| tag.contains("fantasy"));
            assert_eq!(result.contains(&artwork), has_tag);
        }
        assert_eq!(titles(&result), vec!["Fantasy Forest"]);
    }

    #[test]
    fn test_category_realistic_spans_tools() {
        let catalog = Catalog::sample();
        let criteria = Criteria {
            category: Choice::Only(Category::Realistic),
            ..Criteria::default()
        };
        assert_eq!(
            titles(&criteria.apply(catalog.artworks())),
            vec!["Portrait Study", "3D Render"]
        );
    }

    #[test]
    fn test_category_substring_breadth() {
        let mut artwork = Catalog::sample().artworks()[0].clone();
        artwork.tags = vec!["3d-print".to_string()];
        let criteria = Criteria {
            category: Choice::Only(Category::ThreeD),
            ..Criteria::default()
        };
        assert!(criteria.matches(&artwork));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let catalog = Catalog::sample();
        let criteria = Criteria {
            search: "realistic".to_string(),
            tool: Choice::Only(Tool::BlenderAi),
            category: Choice::Only(Category::Realistic),
        };
        assert_eq!(titles(&criteria.apply(catalog.artworks())), vec!["3D Render"]);

        let conflicting = Criteria {
            tool: Choice::Only(Tool::Midjourney),
            ..criteria
        };
        assert!(conflicting.apply(catalog.artworks()).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::sample();
        for tool in Choice::options(&Tool::ALL) {
            let criteria = Criteria {
                search: "zzz-no-match".to_string(),
                tool,
                category: Choice::All,
            };
            assert!(criteria.apply(catalog.artworks()).is_empty());
            assert!(criteria.is_active());
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = Catalog::sample();
        let criteria = Criteria {
            search: "a".to_string(),
            tool: Choice::All,
            category: Choice::Only(Category::Realistic),
        };
        let once = criteria.apply(catalog.artworks());
        let owned: Vec<Artwork> = once.iter().map(|artwork| (*artwork).clone()).collect();
        let twice = criteria.apply(&owned);
        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn test_choice_options_and_display() {
        let options = Choice::options(&Category::ALL);
        assert_eq!(options.len(), Category::ALL.len() + 1);
        assert_eq!(options[0], Choice::All);
        assert_eq!(options[0].to_string(), "All");
        assert_eq!(Choice::Only(Tool::StableDiffusion).to_string(), "Stable Diffusion");
        assert_eq!(Choice::Only(Category::PixelArt).to_string(), "pixel-art");
    }
}
