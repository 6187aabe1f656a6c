use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, mouse_area, row, text, Image, Stack};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::media::Thumbnail;
use crate::state::data::Artwork;
use crate::state::layout::{
    masonry_image_height, truncate_prompt, visible_tags, CARD_BODY_HEIGHT, GRID_IMAGE_HEIGHT,
    PROMPT_PREVIEW_CHARS,
};
use crate::state::view::LayoutMode;
use crate::Message;

/// A single artwork card.
///
/// Grid cards crop the image to a fixed height and clamp the text block so
/// every card in a row is the same size. Masonry cards keep the image's
/// aspect ratio, so their height follows the content.
pub fn view<'a>(
    artwork: &'a Artwork,
    thumbnail: Option<&'a Thumbnail>,
    mode: LayoutMode,
    hovered: bool,
    column_width: f32,
) -> Element<'a, Message> {
    let image_height = match mode {
        LayoutMode::Grid => GRID_IMAGE_HEIGHT,
        LayoutMode::Masonry => masonry_image_height(thumbnail.map(Thumbnail::aspect), column_width),
    };

    let picture: Element<'a, Message> = match thumbnail {
        Some(thumbnail) => {
            let handle = match mode {
                LayoutMode::Grid => thumbnail.card.clone(),
                LayoutMode::Masonry => thumbnail.preview.clone(),
            };
            Image::new(handle)
                .width(Length::Fill)
                .height(image_height)
                .content_fit(ContentFit::Cover)
                .into()
        }
        None => placeholder(image_height),
    };

    let badge = container(
        container(text(artwork.tool.as_str()).size(12))
            .padding([4, 10])
            .style(style::badge),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(12);

    let mut layers: Vec<Element<'a, Message>> = vec![picture, badge.into()];
    if hovered {
        layers.push(counters(artwork));
    }
    let image_area = Stack::with_children(layers).width(Length::Fill);

    let (shown, hidden) = visible_tags(&artwork.tags);
    let mut chips: Vec<Element<'a, Message>> = shown.iter().map(|tag| tag_chip(tag)).collect();
    if hidden > 0 {
        chips.push(text(format!("+{}", hidden)).size(12).color(style::MUTED).into());
    }

    let body = column![
        text(&artwork.title).size(18),
        text(truncate_prompt(&artwork.prompt, PROMPT_PREVIEW_CHARS))
            .size(14)
            .color(style::MUTED),
        Wrap::with_elements(chips).spacing(6.0).line_spacing(6.0),
    ]
    .spacing(8);

    let body = container(body).padding(16).width(Length::Fill);
    let body = match mode {
        LayoutMode::Grid => body.height(CARD_BODY_HEIGHT),
        LayoutMode::Masonry => body,
    };

    let card = container(column![image_area, body])
        .width(Length::Fill)
        .style(move |theme| style::card(theme, hovered));

    mouse_area(card)
        .on_press(Message::CardPressed(artwork.id))
        .on_enter(Message::CardHovered(artwork.id))
        .on_exit(Message::CardLeft(artwork.id))
        .into()
}

/// Like and view counters shown over the image on hover
fn counters<'a>(artwork: &Artwork) -> Element<'a, Message> {
    let counts = row![
        text(format!("♥ {}", artwork.likes)).size(14),
        text(format!("👁 {}", artwork.views)).size(14),
    ]
    .spacing(12);

    container(container(counts).padding(16).width(Length::Fill).style(style::hover_shade))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

pub fn tag_chip<'a>(tag: &'a str) -> Element<'a, Message> {
    container(text(format!("# {}", tag)).size(12))
        .padding([3, 10])
        .style(style::chip)
        .into()
}

/// Neutral box shown until an image is available
pub fn placeholder<'a>(height: f32) -> Element<'a, Message> {
    container(text("…").size(24))
        .width(Length::Fill)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(style::placeholder)
        .into()
}
