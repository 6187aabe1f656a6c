use iced::widget::{button, column, horizontal_space, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use super::style;
use crate::state::data::{Category, Tool};
use crate::state::filter::{Choice, Criteria};
use crate::state::view::LayoutMode;
use crate::Message;

/// Brand row plus the search box and the two filter pick lists
pub fn view(criteria: &Criteria) -> Element<'_, Message> {
    let brand = row![
        text("✦").size(30).color(style::ACCENT),
        text("Prism Gallery").size(30),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let search = text_input("Search artworks or prompts...", &criteria.search)
        .on_input(Message::SearchChanged)
        .padding(12)
        .size(16)
        .width(Length::Fill);

    let tools = pick_list(
        Choice::options(&Tool::ALL),
        Some(criteria.tool),
        Message::ToolSelected,
    )
    .padding(12)
    .width(Length::Fixed(180.0));

    let categories = pick_list(
        Choice::options(&Category::ALL),
        Some(criteria.category),
        Message::CategorySelected,
    )
    .padding(12)
    .width(Length::Fixed(160.0));

    column![brand, row![search, tools, categories].spacing(16)]
        .spacing(24)
        .into()
}

/// "N artworks found" and the layout mode buttons
pub fn stats<'a>(found: usize, mode: LayoutMode) -> Element<'a, Message> {
    row![
        text(format!("{} artworks found", found)).color(style::MUTED),
        horizontal_space(),
        mode_button("Grid", LayoutMode::Grid, mode),
        mode_button("Masonry", LayoutMode::Masonry, mode),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn mode_button<'a>(label: &'a str, target: LayoutMode, current: LayoutMode) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if target == current {
        button::primary
    } else {
        button::secondary
    };

    button(text(label).size(14))
        .on_press(Message::LayoutSelected(target))
        .padding([6, 14])
        .style(style)
        .into()
}
