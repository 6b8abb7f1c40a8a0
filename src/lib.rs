// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` is a small product showcase built with the Iced GUI framework.
//!
//! It renders a hero banner, a responsive grid of cards with one highlighted
//! card, a validated contact form and transient toast notifications, with
//! Fluent localization and persisted theme and language preferences.

#![doc(html_root_url = "https://docs.rs/iced_showcase/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
