// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App`
//! it may touch and returns the follow-up task.

use super::config::CONTACT_SEND_DELAY_MS;
use super::preferences::{PreferenceStore, Preferences};
use super::{Message, PAGE_SCROLLABLE_ID};
use crate::catalog::{self, CardRecord, CardSource, FetchOptions};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::cards::{self, Event as CardsEvent};
use crate::ui::contact::{self, ContactSubmission, Event as ContactEvent};
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Duration;

/// Card action target that scrolls to the contact form instead of raising a toast.
pub const CONTACT_TARGET: &str = "contact";

/// Notification key raised when preferences cannot be written.
pub const PREFERENCES_SAVE_WARNING_KEY: &str = "notification-preferences-save-error";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub cards: &'a mut cards::State,
    pub contact: &'a mut contact::State,
    pub notifications: &'a mut notifications::Manager,
    pub window_width: &'a mut f32,
    pub card_source: &'a CardSource,
    pub fetch_options: FetchOptions,
    pub preferences: &'a mut Box<dyn PreferenceStore>,
}

impl UpdateContext<'_> {
    /// Shows a toast and wires its expiry timer back into the app.
    fn notify(&mut self, notification: Notification) -> Task<Message> {
        self.notifications
            .notify(notification)
            .map(Message::Notification)
    }

    /// Applies `change` to the stored preferences and writes them back.
    ///
    /// A failed write is logged and surfaced as a warning toast; the in-memory
    /// state keeps the new value either way.
    fn persist_preferences(&mut self, change: impl FnOnce(&mut Preferences)) -> Task<Message> {
        let mut preferences = self.preferences.load();
        change(&mut preferences);
        match self.preferences.save(&preferences) {
            Ok(()) => Task::none(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist preferences");
                self.notify(Notification::warning(PREFERENCES_SAVE_WARNING_KEY))
            }
        }
    }
}

/// Puts the grid into its loading state and starts the simulated fetch.
pub fn fetch_catalog(
    cards: &mut cards::State,
    source: &CardSource,
    options: FetchOptions,
) -> Task<Message> {
    cards.begin_loading();
    tracing::debug!(?source, delay_ms = options.delay.as_millis(), "fetching card catalog");
    Task::perform(catalog::fetch(source.clone(), options), Message::CatalogLoaded)
}

/// Scrolls the page to the contact form at its bottom.
fn scroll_to_contact() -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 1.0 },
    )
}

/// Flips between light and dark and remembers the choice.
pub fn toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mode = ctx.theme_mode.toggle();
    *ctx.theme_mode = mode;
    tracing::debug!(?mode, "theme toggled");
    ctx.persist_preferences(|preferences| preferences.theme_mode = mode)
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ToggleTheme => toggle_theme(ctx),
        NavbarEvent::LanguageChanged(locale) => {
            if !ctx.i18n.set_locale(&locale) {
                return Task::none();
            }
            let tag = locale.to_string();
            ctx.persist_preferences(|preferences| preferences.language = Some(tag))
        }
    }
}

pub fn handle_hero_message(message: hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::ScrollToContact => scroll_to_contact(),
    }
}

/// Handles cards grid messages.
pub fn handle_cards_message(ctx: &mut UpdateContext<'_>, message: cards::Message) -> Task<Message> {
    match ctx.cards.update(message) {
        CardsEvent::None => Task::none(),
        CardsEvent::ActionRequested { target, .. } if target == CONTACT_TARGET => {
            scroll_to_contact()
        }
        CardsEvent::ActionRequested { card, target } => {
            tracing::debug!(%card, %target, "card action requested");
            ctx.notify(Notification::info("notification-card-action").with_arg("target", target))
        }
        CardsEvent::RetryRequested => {
            Task::perform(
                catalog::fetch(ctx.card_source.clone(), ctx.fetch_options),
                Message::CatalogLoaded,
            )
        }
    }
}

/// Installs a catalog delivery; a rejection also raises an error toast.
pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<CardRecord>, Error>,
) -> Task<Message> {
    let toast = match &result {
        Ok(_) => None,
        Err(err) => Some(Notification::error(err.i18n_key())),
    };
    ctx.cards.apply_result(result);
    match toast {
        Some(notification) => ctx.notify(notification),
        None => Task::none(),
    }
}

/// Handles contact form messages.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match ctx.contact.update(message) {
        ContactEvent::None => Task::none(),
        ContactEvent::Submitted(submission) => Task::perform(
            contact::send(submission, Duration::from_millis(CONTACT_SEND_DELAY_MS)),
            Message::ContactSent,
        ),
        ContactEvent::Rejected(errors) => {
            tracing::debug!(count = errors.count(), "contact form rejected");
            ctx.notify(Notification::error("contact-invalid"))
        }
    }
}

pub fn handle_contact_sent(
    ctx: &mut UpdateContext<'_>,
    submission: &ContactSubmission,
) -> Task<Message> {
    ctx.contact.finish();
    ctx.notify(Notification::success("contact-sent").with_arg("name", submission.name.clone()))
}
