use clap::Parser;
use iced::widget::{column, container, scrollable};
use iced::{keyboard, window, Element, Length, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::{Cli, GalleryConfig};
use media::{source, thumbnail, Thumbnail};
use state::catalog::Catalog;
use state::data::{ArtworkId, Category, Tool};
use state::filter::Choice;
use state::layout::{MAX_CONTENT_WIDTH, PAGE_PADDING};
use state::view::{LayoutMode, ViewState};

/// Window size at launch; also the width used for layout until the
/// first resize event arrives
const DEFAULT_WINDOW_SIZE: Size = Size {
    width: 1280.0,
    height: 860.0,
};

/// Main application state
struct Gallery {
    /// The read-only artwork catalog
    catalog: Catalog,
    /// Filters, layout mode, selection
    state: ViewState,
    /// Decoded images, keyed by artwork
    thumbnails: HashMap<ArtworkId, Thumbnail>,
    /// Current window width, drives the column count
    window_width: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search box edited
    SearchChanged(String),
    ToolSelected(Choice<Tool>),
    CategorySelected(Choice<Category>),
    /// One of the layout buttons was pressed
    LayoutSelected(LayoutMode),
    /// Keyboard shortcut to flip between grid and masonry
    ToggleLayout,
    /// A card was clicked: open the detail modal
    CardPressed(ArtworkId),
    CardHovered(ArtworkId),
    CardLeft(ArtworkId),
    /// ✕ button, backdrop click or Escape
    CloseDetail,
    /// "Clear Filters" in the empty state
    ClearFilters,
    /// Background image load finished
    ThumbnailLoaded(ArtworkId, Result<Thumbnail, String>),
    WindowResized(Size),
}

impl Gallery {
    /// Create a new instance of the application
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let GalleryConfig {
            catalog,
            load_images,
        } = config;

        if catalog.is_empty() {
            tracing::warn!("⚠️  Catalog is empty, nothing to browse");
        } else {
            tracing::info!("🎨 Prism Gallery initialized with {} artworks", catalog.len());
        }

        let task = if load_images {
            load_thumbnails(&catalog)
        } else {
            tracing::info!("Offline mode, images will not be loaded");
            Task::none()
        };

        (
            Gallery {
                catalog,
                state: ViewState::new(),
                thumbnails: HashMap::new(),
                window_width: DEFAULT_WINDOW_SIZE.width,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(text) => {
                self.state.update_search(text);
                self.log_results();
            }
            Message::ToolSelected(tool) => {
                self.state.update_tool(tool);
                self.log_results();
            }
            Message::CategorySelected(category) => {
                self.state.update_category(category);
                self.log_results();
            }
            Message::ClearFilters => {
                self.state.clear_filters();
                self.log_results();
            }
            Message::LayoutSelected(mode) => self.state.set_mode(mode),
            Message::ToggleLayout => self.state.toggle_mode(),
            Message::CardPressed(id) => {
                tracing::debug!("Opening detail view for {}", id);
                self.state.select_record(id);
            }
            Message::CloseDetail => self.state.clear_selection(),
            Message::CardHovered(id) => self.state.hover(id),
            Message::CardLeft(id) => self.state.unhover(id),
            Message::ThumbnailLoaded(id, Ok(thumbnail)) => {
                self.thumbnails.insert(id, thumbnail);
            }
            Message::ThumbnailLoaded(id, Err(error)) => {
                tracing::warn!("⚠️  Could not load image for {}: {}", id, error);
            }
            Message::WindowResized(size) => self.window_width = size.width,
        }

        Task::none()
    }

    fn log_results(&self) {
        let found = self.state.criteria.apply(self.catalog.artworks()).len();
        tracing::debug!("🔍 {} of {} artworks match", found, self.catalog.len());
        if found == 0 && self.state.has_active_filters() {
            tracing::debug!("Nothing matches, offering to clear filters");
        }
        if tracing::enabled!(tracing::Level::TRACE) {
            match serde_json::to_string(&self.state) {
                Ok(snapshot) => tracing::trace!("view state: {}", snapshot),
                Err(e) => tracing::trace!("view state not serializable: {}", e),
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let results = self.state.criteria.apply(self.catalog.artworks());

        let content = column![
            ui::header::view(&self.state.criteria),
            ui::header::stats(results.len(), self.state.mode),
            ui::gallery::view(&results, &self.state, &self.thumbnails, self.window_width),
            ui::footer::view(),
        ]
        .spacing(24)
        .padding(PAGE_PADDING)
        .max_width(MAX_CONTENT_WIDTH);

        let page: Element<Message> = scrollable(container(content).center_x(Length::Fill))
            .height(Length::Fill)
            .into();

        match self.state.selected.and_then(|id| self.catalog.get(id)) {
            Some(artwork) => ui::modal::view(page, artwork, self.thumbnails.get(&artwork.id)),
            None => page,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            keyboard::on_key_press(handle_key),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Start one background load per artwork, all sharing a single HTTP client
fn load_thumbnails(catalog: &Catalog) -> Task<Message> {
    let client = match source::http_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Could not create HTTP client, images disabled: {}", e);
            return Task::none();
        }
    };

    Task::batch(catalog.artworks().iter().map(|artwork| {
        let id = artwork.id;
        Task::perform(
            thumbnail::load(client.clone(), artwork.image_url.clone()),
            move |result| Message::ThumbnailLoaded(id, result.map_err(|e| e.to_string())),
        )
    }))
}

/// Keyboard shortcuts: Escape closes the modal, Ctrl/Cmd+M flips the layout
fn handle_key(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::CloseDetail),
        keyboard::Key::Character("m") if modifiers.command() => Some(Message::ToggleLayout),
        _ => None,
    }
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    // RUST_LOG wins over the command line flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match GalleryConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Could not start the gallery: {}", e);
            std::process::exit(1);
        }
    };

    iced::application("Prism Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .window_size(DEFAULT_WINDOW_SIZE)
        .centered()
        .run_with(move || Gallery::new(config))
}
