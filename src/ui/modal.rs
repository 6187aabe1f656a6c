use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text, Image,
};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::{card, style};
use crate::media::Thumbnail;
use crate::state::data::Artwork;
use crate::Message;

const MODAL_MAX_WIDTH: f32 = 900.0;
const MODAL_IMAGE_HEIGHT: f32 = 480.0;

/// Detail modal for one artwork, drawn on top of `base`.
///
/// Clicking the backdrop or the ✕ button closes it. Clicks on the body are
/// swallowed before they reach the backdrop.
pub fn view<'a>(
    base: Element<'a, Message>,
    artwork: &'a Artwork,
    thumbnail: Option<&'a Thumbnail>,
) -> Element<'a, Message> {
    let header = row![
        column![
            text(&artwork.title).size(26),
            text(artwork.tool.as_str()).color(style::MUTED),
        ]
        .spacing(6),
        horizontal_space(),
        button(text("✕").size(18))
            .on_press(Message::CloseDetail)
            .style(button::text),
    ]
    .align_y(Alignment::Start);

    let picture: Element<'a, Message> = match thumbnail {
        Some(thumbnail) => Image::new(thumbnail.preview.clone())
            .width(Length::Fill)
            .height(MODAL_IMAGE_HEIGHT)
            .content_fit(ContentFit::Contain)
            .into(),
        None => card::placeholder(MODAL_IMAGE_HEIGHT),
    };

    let tags = Wrap::with_elements(artwork.tags.iter().map(|tag| card::tag_chip(tag)).collect())
        .spacing(6.0)
        .line_spacing(6.0);

    let counts = row![
        text(format!("♥ {} likes", artwork.likes)),
        text(format!("👁 {} views", artwork.views)),
    ]
    .spacing(24);

    let body = column![
        header,
        picture,
        text("Prompt").size(14).color(style::MUTED),
        text(&artwork.prompt).size(16),
        tags,
        counts,
    ]
    .spacing(16);

    let dialog = container(scrollable(body))
        .max_width(MODAL_MAX_WIDTH)
        .padding(24)
        .style(style::modal);

    overlay(base, dialog, Message::CloseDetail)
}

/// Stack `content` over `base` behind a dimmed backdrop that emits `on_blur`
fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).padding(16).style(style::backdrop))
                .on_press(on_blur)
        )
    ]
    .into()
}
