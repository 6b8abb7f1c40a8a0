// SPDX-License-Identifier: MPL-2.0
//! Cards grid: loading state, highlight, and the responsive layout.
//!
//! The grid owns the delivered card list together with its [`Selection`].
//! Every delivery goes through [`State::apply_result`], which re-initializes
//! the selection so the middle card is highlighted again.

pub mod selection;

pub use selection::Selection;

use crate::app::config::{SINGLE_COLUMN_MAX_WIDTH, TWO_COLUMNS_MAX_WIDTH};
use crate::catalog::{CardId, CardRecord};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;
use std::path::Path;

/// Where the grid is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    /// The last fetch was rejected; the grid shows a retry affordance.
    Unavailable,
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Width available to the grid, used to pick the column count.
    pub available_width: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The card surface was clicked.
    Select(CardId),
    /// The card's action button was pressed.
    Action(CardId),
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ActionRequested { card: CardId, target: String },
    RetryRequested,
}

#[derive(Debug)]
pub struct State {
    status: Status,
    cards: Vec<CardRecord>,
    selection: Selection,
    /// Illustrations found on disk, keyed by card.
    images: HashMap<CardId, image::Handle>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: Status::Loading,
            cards: Vec::new(),
            selection: Selection::new(),
            images: HashMap::new(),
        }
    }

    pub fn begin_loading(&mut self) {
        self.status = Status::Loading;
    }

    /// Installs the outcome of a catalog fetch.
    ///
    /// A failed fetch is treated as an empty delivery.
    pub fn apply_result(&mut self, result: Result<Vec<CardRecord>, Error>) {
        match result {
            Ok(cards) => {
                tracing::info!(count = cards.len(), "card catalog loaded");
                self.images = cards
                    .iter()
                    .filter(|card| !card.image_ref.is_empty() && Path::new(&card.image_ref).is_file())
                    .map(|card| (card.id, image::Handle::from_path(&card.image_ref)))
                    .collect();
                self.cards = cards;
                self.status = Status::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "card catalog unavailable");
                self.cards.clear();
                self.images.clear();
                self.status = Status::Unavailable;
            }
        }
        self.selection.initialize(&self.cards);
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select(id) => {
                self.selection.select(id);
                Event::None
            }
            Message::Action(id) => {
                self.selection.select(id);
                match self.cards.iter().find(|card| card.id == id) {
                    Some(card) => Event::ActionRequested {
                        card: id,
                        target: card.action_target.clone(),
                    },
                    None => Event::None,
                }
            }
            Message::Retry => {
                if self.status == Status::Loading {
                    Event::None
                } else {
                    self.begin_loading();
                    Event::RetryRequested
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let heading = Text::new(ctx.i18n.tr("cards-title")).size(typography::TITLE_LG);
        let subtitle = Text::new(ctx.i18n.tr("cards-subtitle")).size(typography::BODY_LG);

        let body: Element<'a, Message> = match self.status {
            Status::Loading => centered_message(ctx.i18n.tr("cards-loading")),
            Status::Unavailable => self.view_unavailable(ctx.i18n),
            Status::Ready if self.cards.is_empty() => centered_message(ctx.i18n.tr("cards-empty")),
            Status::Ready => self.view_grid(column_count(ctx.available_width)),
        };

        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(subtitle)
            .push(body)
            .into()
    }

    fn view_unavailable<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("cards-unavailable")).size(typography::BODY_LG))
            .push(
                button(Text::new(i18n.tr("cards-retry")))
                    .on_press(Message::Retry)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            );

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::panel)
            .into()
    }

    fn view_grid(&self, columns: usize) -> Element<'_, Message> {
        let mut grid = Column::new().spacing(spacing::LG);

        for chunk in self.cards.chunks(columns) {
            let mut row = Row::new().spacing(spacing::LG);
            for card in chunk {
                row = row.push(
                    Container::new(self.view_card(card)).width(Length::FillPortion(1)),
                );
            }
            // Keep card widths equal on a short last row
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            grid = grid.push(row);
        }

        grid.into()
    }

    fn view_card<'a>(&'a self, card: &'a CardRecord) -> Element<'a, Message> {
        let highlighted = self.selection.is_selected(card.id);

        let illustration: Element<'a, Message> = match self.images.get(&card.id) {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            None => Container::new(Text::new(monogram(&card.title)).size(typography::TITLE_LG))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::image_placeholder)
                .into(),
        };

        let paragraphs = card.paragraphs().fold(
            Column::new().spacing(spacing::XS),
            |column, paragraph| column.push(Text::new(paragraph).size(typography::BODY)),
        );

        let action = button(Text::new(card.action_label.as_str()))
            .on_press(Message::Action(card.id))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::SM)
            .push(illustration)
            .push(Text::new(card.title.as_str()).size(typography::TITLE_SM))
            .push(paragraphs)
            .push(action);

        let surface = Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(if highlighted {
                styles::container::card_highlighted
            } else {
                styles::container::card
            });

        button(surface)
            .on_press(Message::Select(card.id))
            .padding(0.0)
            .width(Length::Fill)
            .style(styles::button::card_surface)
            .into()
    }
}

/// Number of grid columns for the given width.
#[must_use]
pub fn column_count(available_width: f32) -> usize {
    if available_width < SINGLE_COLUMN_MAX_WIDTH {
        1
    } else if available_width < TWO_COLUMNS_MAX_WIDTH {
        2
    } else {
        3
    }
}

fn monogram(title: &str) -> String {
    title
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn centered_message<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
