// SPDX-License-Identifier: MPL-2.0
//! Light/dark handling.
//!
//! [`ThemeMode`] is what the user picked (and what `settings.toml` stores);
//! [`ColorScheme`] holds the semantic colors the styles read for the
//! effective Iced theme.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic colors shared by the container and button styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand_primary: Color,
    pub brand_secondary: Color,
    /// Tint behind the highlighted card.
    pub highlight_surface: Color,
    /// Hero gradient, top-left to bottom-right.
    pub hero_start: Color,
    pub hero_end: Color,
}

impl ColorScheme {
    pub const LIGHT: Self = Self {
        surface_primary: palette::WHITE,
        surface_secondary: palette::GRAY_100,
        text_primary: palette::GRAY_900,
        text_secondary: palette::GRAY_700,
        brand_primary: palette::PRIMARY_500,
        brand_secondary: palette::PRIMARY_600,
        highlight_surface: palette::PRIMARY_100,
        hero_start: palette::PRIMARY_600,
        hero_end: palette::PRIMARY_400,
    };

    pub const DARK: Self = Self {
        surface_primary: palette::GRAY_900,
        surface_secondary: Color {
            r: 0.15,
            g: 0.15,
            b: 0.15,
            a: 1.0,
        },
        text_primary: palette::WHITE,
        text_secondary: palette::GRAY_200,
        brand_primary: palette::PRIMARY_400,
        brand_secondary: palette::PRIMARY_500,
        highlight_surface: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_400
        },
        hero_start: palette::PRIMARY_800,
        hero_end: palette::PRIMARY_600,
    };

    /// Scheme for an Iced theme, chosen by its darkness.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// The user's theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. `System` asks the OS and
    /// assumes dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The explicit mode showing the other theme than the current one.
    ///
    /// `System` never survives a toggle.
    #[must_use]
    pub fn toggle(self) -> Self {
        if self.is_dark() {
            Self::Light
        } else {
            Self::Dark
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        })
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    /// Case-insensitive; accepts exactly the names `Display` produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Light, Self::Dark, Self::System]
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid theme_mode: {s}"))
    }
}
