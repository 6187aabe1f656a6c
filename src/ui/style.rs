//! Colors and container styles shared by the gallery widgets

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Secondary text (prompts, counts)
pub const MUTED: Color = Color {
    r: 0.62,
    g: 0.64,
    b: 0.68,
    a: 1.0,
};

/// Fine print in the footer
pub const FAINT: Color = Color {
    r: 0.45,
    g: 0.47,
    b: 0.5,
    a: 1.0,
};

/// Brand sparkle
pub const ACCENT: Color = Color {
    r: 0.82,
    g: 0.84,
    b: 0.88,
    a: 1.0,
};

const TRANSLUCENT_BLACK: Color = Color {
    a: 0.7,
    ..Color::BLACK
};

/// Artwork card; the border brightens under the pointer
pub fn card(theme: &Theme, hovered: bool) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = if hovered {
        palette.background.strong.text
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.2,
            ..Color::BLACK
        })),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Tool badge in the image corner
pub fn badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(TRANSLUCENT_BLACK)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    }
}

/// Tag chip
pub fn chip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.3,
            ..Color::BLACK
        })),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    }
}

/// Gradient-like shade behind the like/view counters on hover
pub fn hover_shade(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.45,
            ..Color::BLACK
        })),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Stand-in for an image that is loading or failed to load
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(MUTED),
        ..container::Style::default()
    }
}

/// Round badge above the empty-state message
pub fn empty_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..Color::WHITE
        })),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Detail modal body
pub fn modal(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.92,
            ..palette.background.base.color
        })),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind the modal
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.8,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

/// Green status dot in the footer
pub fn status_dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.29, 0.87, 0.5))),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
