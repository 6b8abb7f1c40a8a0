// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::CardRecord;
use crate::error::Error;
use crate::ui::cards;
use crate::ui::contact::{self, ContactSubmission};
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Cards(cards::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The catalog fetch settled.
    CatalogLoaded(Result<Vec<CardRecord>, Error>),
    /// The simulated contact send completed.
    ContactSent(ContactSubmission),
    WindowResized(Size),
    /// Keyboard shortcut: dismiss the visible toast.
    DismissToast,
    /// Keyboard shortcut: flip between light and dark.
    ToggleTheme,
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (directory containing settings.toml).
    pub config_dir: Option<String>,
    /// Optional catalog file replacing the embedded one.
    pub cards_path: Option<String>,
    /// Make the catalog fetch reject after its delay.
    pub simulate_fetch_failure: bool,
}
