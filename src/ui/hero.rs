// SPDX-License-Identifier: MPL-2.0
//! Hero banner at the top of the page.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the hero banner.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ContactPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ScrollToContact,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ContactPressed => Event::ScrollToContact,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let headline = Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY);
    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG);
    let call_to_action = button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
        .on_press(Message::ContactPressed)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::on_hero);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(headline)
        .push(subtitle)
        .push(call_to_action);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::hero)
        .into()
}
