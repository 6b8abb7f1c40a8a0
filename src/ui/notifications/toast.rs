// SPDX-License-Identifier: MPL-2.0
//! Toast widget for the current notification, pinned bottom-right.

use super::manager::{Manager, Message};
use super::notification::{LocalizedText, Notification};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders one toast: accent glyph, translated text, dismiss button.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().accent();

        let glyph = Text::new(notification.severity().glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let body = Text::new(localize(notification.text(), i18n))
            .size(typography::BODY)
            .width(Length::Fill);

        let close = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss)
            .padding([0.0, spacing::XS])
            .style(styles::button::toast_dismiss);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(body)
            .push(close);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent))
            .into()
    }

    /// Full-window layer holding the current toast, or nothing.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(notification) = manager.current() else {
            return Space::new().into();
        };

        Container::new(Self::view(notification, i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .into()
    }
}

/// Formats a notification text in the current locale.
fn localize(text: &LocalizedText, i18n: &I18n) -> String {
    if text.args().is_empty() {
        i18n.tr(text.key())
    } else {
        i18n.tr_with_args(text.key(), &text.borrowed_args())
    }
}
