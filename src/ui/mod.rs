/// Gallery widgets
///
/// - Header with search and filter pick lists (header.rs)
/// - Artwork cards (card.rs)
/// - Grid and masonry layouts, empty state (gallery.rs)
/// - Detail modal (modal.rs)
/// - Footer (footer.rs)
/// - Shared colors and container styles (style.rs)

pub mod card;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod modal;
pub mod style;
