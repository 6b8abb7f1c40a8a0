// SPDX-License-Identifier: MPL-2.0
//! Button styles. Every style is a plain `fn(&Theme, Status) -> Style` so it
//! can be handed straight to `button::style`.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

/// Filled, thinly outlined button with small rounded corners.
fn framed(fill: Color, text_color: Color, outline: Color, elevation: Shadow) -> Style {
    Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Main call to action: hero, contact submit, card actions.
pub fn primary(theme: &Theme, status: Status) -> Style {
    match status {
        Status::Hovered => framed(palette::PRIMARY_400, WHITE, palette::PRIMARY_500, shadow::MD),
        Status::Active | Status::Pressed => {
            framed(palette::PRIMARY_500, WHITE, palette::PRIMARY_600, shadow::SM)
        }
        Status::Disabled => disabled(theme, status),
    }
}

/// White pill outline drawn on top of the hero gradient.
pub fn on_hero(_theme: &Theme, status: Status) -> Style {
    let wash = match status {
        Status::Hovered => opacity::OVERLAY_SUBTLE,
        Status::Pressed => opacity::OVERLAY_MEDIUM,
        Status::Active | Status::Disabled => opacity::TRANSPARENT,
    };
    Style {
        border: Border {
            color: WHITE,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..framed(Color { a: wash, ..WHITE }, WHITE, WHITE, shadow::NONE)
    }
}

pub fn disabled(_theme: &Theme, _status: Status) -> Style {
    framed(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Active entry of a toggle group, e.g. the current language.
pub fn selected(theme: &Theme, status: Status) -> Style {
    primary(theme, status)
}

/// Inactive entry of a toggle group and the navbar theme toggle.
pub fn unselected(theme: &Theme, status: Status) -> Style {
    let colors = ColorScheme::for_theme(theme);
    match status {
        Status::Disabled => disabled(theme, status),
        Status::Hovered => {
            let fill = if theme.extended_palette().is_dark {
                palette::GRAY_400
            } else {
                palette::GRAY_200
            };
            framed(fill, colors.text_primary, palette::PRIMARY_500, shadow::SM)
        }
        Status::Active | Status::Pressed => framed(
            colors.surface_secondary,
            colors.text_primary,
            palette::GRAY_400,
            shadow::NONE,
        ),
    }
}

/// Invisible wrapper making a whole card clickable.
pub fn card_surface(theme: &Theme, _status: Status) -> Style {
    Style {
        background: None,
        text_color: theme.palette().text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// "×" closing a toast; tinted only under the pointer.
pub fn toast_dismiss(theme: &Theme, status: Status) -> Style {
    let tint = match status {
        Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        Status::Active | Status::Disabled => None,
    };
    Style {
        background: tint.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.palette().text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
