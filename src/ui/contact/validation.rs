// SPDX-License-Identifier: MPL-2.0
//! Contact form validation.
//!
//! Validation never fails as a whole: it either yields a trimmed
//! [`ContactSubmission`] or the set of per-field errors to show.

use crate::app::config::{MAX_CONTACT_MESSAGE_CHARS, MIN_CONTACT_MESSAGE_CHARS};
use regex::Regex;
use std::sync::LazyLock;

/// Loose e-mail shape check: something, `@`, a domain with a dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail regex should compile")
});

/// Raw text of the form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
    TooLong { max: usize },
}

impl FieldError {
    /// i18n key of the message shown under the field.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldError::Required => "contact-error-required",
            FieldError::InvalidEmail => "contact-error-email",
            FieldError::TooShort { .. } => "contact-error-too-short",
            FieldError::TooLong { .. } => "contact-error-too-long",
        }
    }

    /// Interpolation arguments for [`i18n_key`](Self::i18n_key).
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            FieldError::TooShort { min } => vec![("min", min.to_string())],
            FieldError::TooLong { max } => vec![("max", max.to_string())],
            FieldError::Required | FieldError::InvalidEmail => Vec::new(),
        }
    }
}

/// Per-field validation outcome. Empty when the form is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Drops the error of one field, typically once the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|error| error.is_some())
            .count()
    }
}

/// Validated, trimmed form content ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validates every field and reports all problems at once.
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let errors = FieldErrors {
        name: check_name(name),
        email: check_email(email),
        message: check_message(message),
    };

    if errors.is_empty() {
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

fn check_name(name: &str) -> Option<FieldError> {
    name.is_empty().then_some(FieldError::Required)
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::Required)
    } else if !EMAIL_PATTERN.is_match(email) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

fn check_message(message: &str) -> Option<FieldError> {
    let length = message.chars().count();
    if length == 0 {
        Some(FieldError::Required)
    } else if length < MIN_CONTACT_MESSAGE_CHARS {
        Some(FieldError::TooShort {
            min: MIN_CONTACT_MESSAGE_CHARS,
        })
    } else if length > MAX_CONTACT_MESSAGE_CHARS {
        Some(FieldError::TooLong {
            max: MAX_CONTACT_MESSAGE_CHARS,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_produces_trimmed_submission() {
        let submission = validate(&form(
            "  Ada  ",
            " ada@example.com ",
            "  I would like a demo.  ",
        ))
        .expect("form is valid");

        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "I would like a demo.");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default()).expect_err("form is invalid");
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
        assert_eq!(errors.message, Some(FieldError::Required));
        assert_eq!(errors.count(), 3);
    }

    #[test]
    fn whitespace_only_name_is_required() {
        let errors = validate(&form("   ", "a@b.io", "long enough text")).expect_err("invalid");
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["plain", "a@b", "@example.com", "a b@example.com", "a@@b.io"] {
            let errors = validate(&form("Ada", email, "long enough text")).expect_err(email);
            assert_eq!(errors.email, Some(FieldError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn short_message_is_rejected_with_minimum() {
        let errors = validate(&form("Ada", "a@b.io", "too short")).expect_err("invalid");
        assert_eq!(
            errors.message,
            Some(FieldError::TooShort {
                min: MIN_CONTACT_MESSAGE_CHARS
            })
        );
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        // Ten accented characters, twenty bytes
        let errors = validate(&form("Ada", "a@b.io", "éééééééééé"));
        assert!(errors.is_ok());
    }

    #[test]
    fn overlong_message_is_rejected() {
        let long = "x".repeat(MAX_CONTACT_MESSAGE_CHARS + 1);
        let errors = validate(&form("Ada", "a@b.io", &long)).expect_err("invalid");
        assert_eq!(
            errors.message,
            Some(FieldError::TooLong {
                max: MAX_CONTACT_MESSAGE_CHARS
            })
        );
    }

    #[test]
    fn clear_removes_single_field_error() {
        let mut errors = validate(&ContactForm::default()).expect_err("invalid");
        errors.clear(Field::Email);
        assert!(errors.email.is_none());
        assert_eq!(errors.count(), 2);
    }

    #[test]
    fn too_short_error_carries_interpolation_argument() {
        let error = FieldError::TooShort { min: 10 };
        assert_eq!(error.i18n_args(), vec![("min", "10".to_string())]);
        assert!(FieldError::Required.i18n_args().is_empty());
    }
}
