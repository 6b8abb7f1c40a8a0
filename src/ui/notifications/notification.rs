// SPDX-License-Identifier: MPL-2.0
//! What a toast carries: an identity, a severity and a localizable text.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token of one raised notification.
///
/// Tokens are never reused within a process and a later token always
/// compares greater than an earlier one. Expiry timers carry the token of
/// the notification they were started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Accent used for the toast border and glyph.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Error => palette::ERROR_500,
            Self::Warning => palette::WARNING_500,
            Self::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "×",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

/// A Fluent key plus the named arguments it is formatted with.
///
/// Resolution happens at render time, so a toast raised before a language
/// switch is shown in the new language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    key: String,
    args: Vec<(String, String)>,
}

impl LocalizedText {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Arguments borrowed in the shape `I18n::tr_with_args` expects.
    #[must_use]
    pub fn borrowed_args(&self) -> Vec<(&str, &str)> {
        self.args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

/// A single toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: LocalizedText,
}

impl Notification {
    /// Raises a fresh notification; every call gets a new [`NotificationId`].
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            text: LocalizedText::new(key),
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Attaches a named Fluent argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &LocalizedText {
        &self.text
    }

    #[must_use]
    pub fn key(&self) -> &str {
        self.text.key()
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        self.text.args()
    }
}
