use std::collections::HashMap;

use iced::widget::{button, column, container, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use super::{card, style};
use crate::media::Thumbnail;
use crate::state::data::{Artwork, ArtworkId};
use crate::state::layout::{
    balance_columns, column_count, column_width, masonry_card_height, CARD_SPACING,
};
use crate::state::view::{LayoutMode, ViewState};
use crate::Message;

/// Render the filtered artworks, or the empty state when there are none
pub fn view<'a>(
    artworks: &[&'a Artwork],
    state: &ViewState,
    thumbnails: &'a HashMap<ArtworkId, Thumbnail>,
    window_width: f32,
) -> Element<'a, Message> {
    if artworks.is_empty() {
        return empty_state();
    }

    let columns = column_count(window_width);
    let width = column_width(window_width);

    let cards = artworks.iter().map(|&artwork| {
        let thumbnail = thumbnails.get(&artwork.id);
        let height = masonry_card_height(thumbnail.map(Thumbnail::aspect), width);
        let card = card::view(
            artwork,
            thumbnail,
            state.mode,
            state.is_hovered(artwork.id),
            width,
        );
        (height, card)
    });

    match state.mode {
        LayoutMode::Grid => grid(cards.map(|(_, card)| card).collect(), columns),
        LayoutMode::Masonry => masonry(cards.collect(), columns),
    }
}

/// Fixed columns, filled row by row
fn grid<'a>(cards: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut cards = cards.into_iter().peekable();

    while cards.peek().is_some() {
        let mut cells: Vec<Element<'a, Message>> = cards.by_ref().take(columns).collect();
        // keep the last row's cards the same width as the others
        while cells.len() < columns {
            cells.push(Space::with_width(Length::Fill).into());
        }
        rows.push(Row::with_children(cells).spacing(CARD_SPACING).into());
    }

    Column::with_children(rows).spacing(CARD_SPACING).into()
}

/// Cards flow down each column in order, columns balanced by height
fn masonry<'a>(cards: Vec<(f32, Element<'a, Message>)>, columns: usize) -> Element<'a, Message> {
    let heights: Vec<f32> = cards.iter().map(|(height, _)| *height).collect();
    let ranges = balance_columns(&heights, columns);

    let mut cards = cards.into_iter().map(|(_, card)| card);
    let mut lanes: Vec<Element<'a, Message>> = Vec::with_capacity(columns);
    for range in ranges {
        let lane: Vec<Element<'a, Message>> = cards.by_ref().take(range.len()).collect();
        lanes.push(
            Column::with_children(lane)
                .spacing(CARD_SPACING)
                .width(Length::Fill)
                .into(),
        );
    }
    while lanes.len() < columns {
        lanes.push(Space::with_width(Length::Fill).into());
    }

    Row::with_children(lanes).spacing(CARD_SPACING).into()
}

/// Shown when no artwork passes the filters
pub fn empty_state<'a>() -> Element<'a, Message> {
    let content = column![
        container(text("🔍").size(36))
            .padding(22)
            .style(style::empty_badge),
        text("No artworks found").size(22),
        text("Try adjusting your search or filters").color(style::MUTED),
        button(text("Clear Filters"))
            .on_press(Message::ClearFilters)
            .padding([8, 24])
            .style(button::secondary),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .padding([80, 0])
        .into()
}
