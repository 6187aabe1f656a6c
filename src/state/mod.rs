/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The read-only artwork catalog (catalog.rs)
/// - Search, tool and category filtering (filter.rs)
/// - View state and its transitions (view.rs)
/// - Grid and masonry layout math (layout.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod layout;
pub mod view;
