// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors travel inside Iced messages (a failed catalog fetch is a
//! `Message::CatalogLoaded(Err(..))`), so they must be `Clone`; underlying
//! library errors are flattened to their message.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(String),
    /// `settings.toml` could not be parsed or serialized.
    Config(String),
    /// The card catalog is malformed: bad TOML, duplicate ids, empty titles.
    Catalog(String),
    /// The simulated catalog fetch was rejected.
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fluent key of the toast shown for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Io(_) => "error-io",
            Self::Config(_) => "error-config",
            Self::Catalog(_) => "error-catalog",
            Self::Fetch(_) => "error-fetch",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Self::Io(detail) | Self::Config(detail) | Self::Catalog(detail) | Self::Fetch(detail) => {
                detail
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Io(_) => "i/o",
            Self::Config(_) => "settings",
            Self::Catalog(_) => "catalog",
            Self::Fetch(_) => "fetch",
        };
        write!(f, "{kind} error: {}", self.detail())
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [Error; 4] {
        [
            Error::Io("a".into()),
            Error::Config("b".into()),
            Error::Catalog("c".into()),
            Error::Fetch("d".into()),
        ]
    }

    #[test]
    fn display_names_the_kind_and_detail() {
        assert_eq!(Error::Fetch("timeout".into()).to_string(), "fetch error: timeout");
        assert_eq!(
            Error::Catalog("duplicate card id 3".into()).to_string(),
            "catalog error: duplicate card id 3"
        );
    }

    #[test]
    fn io_errors_keep_their_message() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(&err, Error::Io(detail) if detail.contains("disk full")));
    }

    #[test]
    fn toml_errors_map_to_config() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("a = = 1");
        let err: Error = parsed.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn i18n_keys_are_distinct_and_prefixed() {
        let keys = all().map(|err| err.i18n_key());
        for (i, a) in keys.iter().enumerate() {
            assert!(a.starts_with("error-"));
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
