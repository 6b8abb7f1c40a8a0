// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a fixed navbar above one scrollable column (hero, cards,
//! contact), with the toast layered on top.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::i18n::fluent::I18n;
use crate::ui::cards::{self, ViewContext as CardsViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub cards: &'a cards::State,
    pub contact: &'a contact::State,
    pub notifications: &'a notifications::Manager,
    pub window_width: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let hero = hero::view(HeroViewContext { i18n: ctx.i18n }).map(Message::Hero);

    // The grid never grows past the content column
    let grid_width = (ctx.window_width - 2.0 * spacing::XL).min(sizing::CONTENT_MAX_WIDTH);
    let cards = ctx
        .cards
        .view(CardsViewContext {
            i18n: ctx.i18n,
            available_width: grid_width,
        })
        .map(Message::Cards);

    let contact = ctx
        .contact
        .view(ContactViewContext { i18n: ctx.i18n })
        .map(Message::Contact);

    let sections = Column::new()
        .spacing(spacing::XXL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(cards)
        .push(contact);

    let page = Column::new()
        .width(Length::Fill)
        .push(hero)
        .push(
            Container::new(sections)
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center),
        );

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let body = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(scrollable);

    let toast = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(Stack::new().push(body).push(toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
