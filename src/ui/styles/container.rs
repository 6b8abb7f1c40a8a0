// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};

/// Page background behind all sections.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Hero banner with a diagonal brand gradient.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_4))
        .add_stop(0.0, colors.hero_start)
        .add_stop(1.0, colors.hero_end);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Regular card surface.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Card currently highlighted by the selection controller.
pub fn card_highlighted(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.highlight_surface)),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..card(theme)
    }
}

/// Stand-in for a card illustration that is missing on disk.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PLACEHOLDER,
            ..colors.brand_primary
        })),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Framed panel holding the contact form and the unavailable state.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Toast card outlined with the severity accent.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
