use iced::widget::{column, container, horizontal_rule, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::Message;

/// Footer link columns: a heading and its entries. The entries are static
/// labels; the gallery has no pages behind them.
static SECTIONS: [(&str, [&str; 5]); 3] = [
    (
        "Explore",
        ["Trending", "Latest", "Most Liked", "Categories", "AI Tools"],
    ),
    (
        "Create",
        ["Upload Art", "AI Prompts", "Tutorials", "Community", "Challenges"],
    ),
    (
        "Support",
        ["Help Center", "Contact Us", "Privacy Policy", "Terms of Service", "API"],
    ),
];

pub fn view<'a>() -> Element<'a, Message> {
    let brand = column![
        row![
            text("✦").size(22).color(style::ACCENT),
            text("Prism Gallery").size(20),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text("Discover and share stunning AI-generated artwork from the world's most creative minds.")
            .size(14)
            .color(style::MUTED),
    ]
    .spacing(12)
    .max_width(320);

    let mut blocks: Vec<Element<'a, Message>> = vec![brand.into()];
    blocks.extend(SECTIONS.iter().map(|(heading, links)| section(heading, links)));

    column![
        horizontal_rule(1),
        Wrap::with_elements(blocks).spacing(48.0).line_spacing(24.0),
        horizontal_rule(1),
        row![
            text("© 2024 Prism Gallery. All rights reserved.")
                .size(12)
                .color(style::FAINT),
            horizontal_space(),
            status(),
            horizontal_space(),
            text("Made with ❤️ by AI enthusiasts").size(12).color(style::FAINT),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(24)
    .padding([48, 0])
    .into()
}

fn section<'a>(heading: &'a str, links: &'a [&'a str]) -> Element<'a, Message> {
    let entries: Vec<Element<'a, Message>> = links
        .iter()
        .map(|label| text(*label).size(14).color(style::MUTED).into())
        .collect();

    column![
        text(heading).size(16),
        Column::with_children(entries).spacing(8),
    ]
    .spacing(16)
    .width(160)
    .into()
}

/// "System Online" with a green dot
fn status<'a>() -> Element<'a, Message> {
    row![
        container(horizontal_space())
            .width(Length::Fixed(8.0))
            .height(Length::Fixed(8.0))
            .style(style::status_dot),
        text("System Online").size(12).color(style::MUTED),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_columns() {
        let headings: Vec<&str> = SECTIONS.iter().map(|(heading, _)| *heading).collect();
        assert_eq!(headings, vec!["Explore", "Create", "Support"]);
        assert!(SECTIONS[1].1.contains(&"Upload Art"));
        assert!(SECTIONS[2].1.contains(&"Terms of Service"));
    }

    #[test]
    fn test_footer_builds() {
        let _ = view();
        let _ = status();
    }
}
