// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the navbar, hero, cards grid, contact form
//! and toast overlay, and translates component events into side effects such
//! as catalog fetches, preference persistence or notifications.

pub mod config;
mod message;
pub mod paths;
pub mod preferences;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{CardSource, FetchOptions};
use crate::i18n::fluent::I18n;
use crate::ui::cards;
use crate::ui::contact;
use crate::ui::notifications::{self, Notification, NotificationDuration};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use preferences::{ConfigPreferenceStore, PreferenceStore};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Identifier of the page scrollable, targeted by scroll-to-contact.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    cards: cards::State,
    contact: contact::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Last known window width, drives the grid column count.
    window_width: f32,
    card_source: CardSource,
    fetch_options: FetchOptions,
    preferences: Box<dyn PreferenceStore>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("i18n", &self.i18n)
            .field("theme_mode", &self.theme_mode)
            .field("cards", &self.cards.status())
            .field("notifications", &self.notifications)
            .field("window_width", &self.window_width)
            .field("card_source", &self.card_source)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings, including the rasterized icon.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed only once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Picks the catalog source: command line, then config, then embedded.
fn resolve_card_source(cli_path: Option<&str>, config: &Config) -> CardSource {
    match (cli_path, &config.catalog.path) {
        (Some(path), _) => CardSource::File(PathBuf::from(path)),
        (None, Some(path)) => CardSource::File(path.clone()),
        (None, None) => CardSource::Embedded,
    }
}

impl App {
    /// Initializes application state from `settings.toml` and starts the
    /// catalog fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(
            flags,
            config,
            config_warning,
            Box::new(ConfigPreferenceStore::new()),
        )
    }

    /// Builds the application from an already loaded configuration and an
    /// explicit preference store.
    pub fn with_config(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
        preferences: Box<dyn PreferenceStore>,
    ) -> (Self, Task<Message>) {
        let saved = preferences.load();
        config.general.theme_mode = saved.theme_mode;
        if saved.language.is_some() {
            config.general.language = saved.language;
        }

        let fetch_options = FetchOptions {
            delay: config.catalog.fetch_delay(),
            simulate_failure: flags.simulate_fetch_failure,
        };

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), &config),
            theme_mode: config.general.theme_mode,
            cards: cards::State::new(),
            contact: contact::State::new(),
            notifications: notifications::Manager::new(NotificationDuration::from_config(
                config.notifications.duration_ms,
            )),
            window_width: WINDOW_DEFAULT_WIDTH,
            card_source: resolve_card_source(flags.cards_path.as_deref(), &config),
            fetch_options,
            preferences,
        };

        tracing::debug!(?app, "application initialized");

        let mut tasks = vec![app.fetch_catalog()];
        if let Some(key) = config_warning {
            tasks.push(
                app.notifications
                    .notify(Notification::warning(key))
                    .map(Message::Notification),
            );
        }

        (app, Task::batch(tasks))
    }

    fn fetch_catalog(&mut self) -> Task<Message> {
        update::fetch_catalog(&mut self.cards, &self.card_source, self.fetch_options)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            cards: &mut self.cards,
            contact: &mut self.contact,
            notifications: &mut self.notifications,
            window_width: &mut self.window_width,
            card_source: &self.card_source,
            fetch_options: self.fetch_options,
            preferences: &mut self.preferences,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Hero(hero_message) => update::handle_hero_message(hero_message),
            Message::Cards(cards_message) => update::handle_cards_message(&mut ctx, cards_message),
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::ContactSent(submission) => update::handle_contact_sent(&mut ctx, &submission),
            Message::WindowResized(size) => {
                *ctx.window_width = size.width;
                Task::none()
            }
            Message::DismissToast => {
                ctx.notifications.dismiss();
                Task::none()
            }
            Message::ToggleTheme => update::toggle_theme(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            cards: &self.cards,
            contact: &self.contact,
            notifications: &self.notifications,
            window_width: self.window_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardId, CardRecord};
    use crate::error::Error;
    use crate::ui::cards::Status;
    use crate::ui::navbar;
    use crate::ui::notifications::Severity;
    use preferences::{MemoryPreferenceStore, Preferences};

    fn card(id: u32, target: &str) -> CardRecord {
        CardRecord {
            id: CardId::new(id),
            title: format!("Card {id}"),
            description: String::new(),
            image_ref: String::new(),
            action_label: "Open".to_string(),
            action_target: target.to_string(),
        }
    }

    fn app_with(store: MemoryPreferenceStore, flags: Flags) -> App {
        let (app, _task) =
            App::with_config(flags, Config::default(), None, Box::new(store));
        app
    }

    fn app() -> App {
        app_with(MemoryPreferenceStore::default(), Flags::default())
    }

    #[test]
    fn starts_loading_the_catalog() {
        let app = app();
        assert_eq!(app.cards.status(), Status::Loading);
        assert!(app.notifications.current().is_none());
    }

    #[test]
    fn config_warning_becomes_a_warning_toast() {
        let (app, _task) = App::with_config(
            Flags::default(),
            Config::default(),
            Some(config::CONFIG_LOAD_WARNING_KEY.to_string()),
            Box::new(MemoryPreferenceStore::default()),
        );
        let current = app.notifications.current().expect("warning toast");
        assert_eq!(current.severity(), Severity::Warning);
        assert_eq!(current.key(), config::CONFIG_LOAD_WARNING_KEY);
    }

    #[test]
    fn saved_theme_overrides_config() {
        let store = MemoryPreferenceStore::new(Preferences {
            theme_mode: ThemeMode::Dark,
            language: None,
        });
        let app = app_with(store, Flags::default());
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn cli_catalog_path_wins_over_config() {
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("from-config.toml"));
        assert_eq!(
            resolve_card_source(Some("from-cli.toml"), &config),
            CardSource::File(PathBuf::from("from-cli.toml"))
        );
        assert_eq!(
            resolve_card_source(None, &config),
            CardSource::File(PathBuf::from("from-config.toml"))
        );
        assert_eq!(
            resolve_card_source(None, &Config::default()),
            CardSource::Embedded
        );
    }

    #[test]
    fn simulated_failure_flag_reaches_fetch_options() {
        let app = app_with(
            MemoryPreferenceStore::default(),
            Flags {
                simulate_fetch_failure: true,
                ..Flags::default()
            },
        );
        assert!(app.fetch_options.simulate_failure);
    }

    #[test]
    fn catalog_delivery_highlights_middle_card() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Ok(vec![
            card(1, "a"),
            card(2, "b"),
            card(3, "c"),
        ])));
        assert_eq!(app.cards.status(), Status::Ready);
        assert!(app.cards.selection().is_selected(CardId::new(2)));
    }

    #[test]
    fn catalog_failure_raises_error_toast_and_keeps_selection() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Ok(vec![card(1, "docs"), card(2, "blog")])));
        let _ = app.update(Message::CatalogLoaded(Err(Error::Fetch("down".into()))));

        assert_eq!(app.cards.status(), Status::Unavailable);
        assert!(app.cards.cards().is_empty());
        assert_eq!(app.cards.selection().selected(), Some(CardId::new(1)));
        let current = app.notifications.current().expect("error toast");
        assert_eq!(current.severity(), Severity::Error);
        assert_eq!(current.key(), "error-fetch");
    }

    #[test]
    fn retry_restarts_loading() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Err(Error::Fetch("down".into()))));
        let _ = app.update(Message::Cards(cards::Message::Retry));
        assert_eq!(app.cards.status(), Status::Loading);
    }

    #[test]
    fn card_action_with_external_target_raises_info_toast() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Ok(vec![card(1, "docs"), card(2, "blog")])));
        let _ = app.update(Message::Cards(cards::Message::Action(CardId::new(2))));

        assert!(app.cards.selection().is_selected(CardId::new(2)));
        let current = app.notifications.current().expect("info toast");
        assert_eq!(current.severity(), Severity::Info);
        assert_eq!(current.key(), "notification-card-action");
        assert_eq!(
            current.args(),
            &[("target".to_string(), "blog".to_string())]
        );
    }

    #[test]
    fn card_action_targeting_contact_scrolls_without_toast() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Ok(vec![card(1, update::CONTACT_TARGET)])));
        let _ = app.update(Message::Cards(cards::Message::Action(CardId::new(1))));
        assert!(app.notifications.current().is_none());
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let store = MemoryPreferenceStore::new(Preferences {
            theme_mode: ThemeMode::Light,
            language: None,
        });
        let mut app = app_with(store.clone(), Flags::default());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(store.load().theme_mode, ThemeMode::Dark);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn keyboard_theme_toggle_matches_navbar_toggle() {
        let store = MemoryPreferenceStore::new(Preferences {
            theme_mode: ThemeMode::Dark,
            language: None,
        });
        let mut app = app_with(store.clone(), Flags::default());

        let _ = app.update(Message::ToggleTheme);

        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(store.load().theme_mode, ThemeMode::Light);
    }

    #[test]
    fn language_switch_updates_i18n_and_persists() {
        let store = MemoryPreferenceStore::default();
        let mut app = app_with(store.clone(), Flags::default());
        let fr: unic_langid::LanguageIdentifier = "fr".parse().expect("valid tag");

        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(fr.clone())));

        assert_eq!(app.i18n.current_locale(), &fr);
        assert_eq!(store.load().language.as_deref(), Some("fr"));
    }

    #[test]
    fn escape_dismisses_current_toast() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Err(Error::Fetch("down".into()))));
        assert!(app.notifications.is_active());

        let _ = app.update(Message::DismissToast);
        assert!(!app.notifications.is_active());
    }

    #[test]
    fn invalid_contact_submit_raises_error_toast() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::Submit));

        assert!(!app.contact.errors().is_empty());
        let current = app.notifications.current().expect("error toast");
        assert_eq!(current.key(), "contact-invalid");
    }

    #[test]
    fn contact_sent_clears_form_and_confirms() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::NameChanged("Ada".into())));
        let _ = app.update(Message::Contact(contact::Message::EmailChanged(
            "ada@example.com".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::MessageChanged(
            "Hello there, I would like a demo.".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert!(app.contact.is_sending());

        let submission = crate::ui::contact::ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, I would like a demo.".into(),
        };
        let _ = app.update(Message::ContactSent(submission));

        assert!(!app.contact.is_sending());
        assert!(app.contact.form().name.is_empty());
        let current = app.notifications.current().expect("success toast");
        assert_eq!(current.severity(), Severity::Success);
        assert_eq!(current.key(), "contact-sent");
    }

    #[test]
    fn window_resize_tracks_width() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 700.0)));
        assert_eq!(app.window_width, 500.0);
    }

    #[test]
    fn title_uses_translation() {
        let app = app();
        assert!(!app.title().starts_with("MISSING"));
    }
}
