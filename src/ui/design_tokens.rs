// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the showcase page.
//!
//! Styles and views read sizes and colors from here instead of inlining
//! literals. Theme-dependent colors live in [`crate::ui::theming::ColorScheme`];
//! the constants below are theme independent.
//!
//! ```
//! use iced_showcase::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let tint = Color { a: opacity::OVERLAY_SUBTLE, ..palette::PRIMARY_400 };
//! assert_eq!(spacing::MD, 2.0 * spacing::XS);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    // Brand blue, light to dark
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_800: Color = Color::from_rgb(0.1, 0.3, 0.6);

    /// Toast accents, one per severity.
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    pub(super) const SHADOW: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.25,
    };
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const PLACEHOLDER: f32 = 0.35;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

/// 8 px grid; `XXS` is the only half step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const HERO_HEIGHT: f32 = 280.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 140.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTACT_FORM_WIDTH: f32 = 560.0;
    /// Width past which sections stop growing and are centered.
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
}

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_LG: f32 = 16.0;
    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;
    /// Navbar brand.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Hero headline.
    pub const DISPLAY: f32 = 40.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Highlighted card and toast outline.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Large enough to turn any button into a pill.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::SHADOW,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = drop(0.0, 0.0);
    pub const SM: Shadow = drop(2.0, 4.0);
    pub const MD: Shadow = drop(4.0, 8.0);
    pub const LG: Shadow = drop(8.0, 16.0);
}

// Scales must stay ordered; checked at compile time
const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL && spacing::XL < spacing::XXL);

    assert!(typography::CAPTION < typography::BODY && typography::BODY < typography::BODY_LG);
    assert!(typography::BODY_LG < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD && typography::TITLE_MD < typography::TITLE_LG);
    assert!(typography::TITLE_LG < typography::DISPLAY);

    assert!(border::WIDTH_SM < border::WIDTH_MD);
    assert!(sizing::TOAST_WIDTH < sizing::CONTACT_FORM_WIDTH);
    assert!(sizing::CONTACT_FORM_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(opacity::TRANSPARENT < opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_SUBTLE < opacity::PLACEHOLDER);
    assert!(opacity::PLACEHOLDER < opacity::OVERLAY_MEDIUM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_eight_pixel_grid() {
        for step in [spacing::XS, spacing::MD, spacing::LG, spacing::XL, spacing::XXL] {
            assert_eq!(step % 8.0, 0.0, "{step} is off grid");
        }
    }

    #[test]
    fn severity_accents_are_distinct() {
        let accents = [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::WARNING_500,
            palette::INFO_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn shadows_grow_with_elevation() {
        assert!(shadow::SM.blur_radius < shadow::MD.blur_radius);
        assert!(shadow::MD.blur_radius < shadow::LG.blur_radius);
        assert_eq!(shadow::NONE.offset.y, 0.0);
    }
}
