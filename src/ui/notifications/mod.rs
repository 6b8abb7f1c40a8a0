// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single toast at a time: raising a notification replaces whatever is on
//! screen, and each toast retires itself after a fixed duration unless it is
//! dismissed first.
//!
//! # Components
//!
//! - [`notification`] - `Notification` value with a severity and an i18n key
//! - [`manager`] - `Manager` owning the current toast and its expiry timer
//! - [`toast`] - Toast widget rendering the current notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::default();
//!
//! // Raise a toast; the returned task expires it later
//! let task = manager.notify(Notification::success("contact-sent"));
//! return task.map(Message::Notification);
//!
//! // In your view function
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod duration;
mod manager;
mod notification;
mod toast;

pub use duration::NotificationDuration;
pub use manager::{expire_after, Expiry, Manager, Message as NotificationMessage};
pub use notification::{LocalizedText, Notification, NotificationId, Severity};
pub use toast::Toast;
