// SPDX-License-Identifier: MPL-2.0
//! Contact form component.
//!
//! The form validates on submit, shows per-field errors, and hands a
//! trimmed [`ContactSubmission`] to the parent, which performs the
//! (simulated) send and reports back through [`State::finish`].

pub mod validation;

pub use validation::{ContactForm, ContactSubmission, Field, FieldError, FieldErrors};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form passed validation and should be sent.
    Submitted(ContactSubmission),
    /// The form failed validation; errors are shown under the fields.
    Rejected(FieldErrors),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    form: ContactForm,
    errors: FieldErrors,
    sending: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.form.name = value;
                self.errors.clear(Field::Name);
                Event::None
            }
            Message::EmailChanged(value) => {
                self.form.email = value;
                self.errors.clear(Field::Email);
                Event::None
            }
            Message::MessageChanged(value) => {
                self.form.message = value;
                self.errors.clear(Field::Message);
                Event::None
            }
            Message::Submit => {
                if self.sending {
                    return Event::None;
                }
                match validation::validate(&self.form) {
                    Ok(submission) => {
                        self.errors = FieldErrors::default();
                        self.sending = true;
                        Event::Submitted(submission)
                    }
                    Err(errors) => {
                        self.errors = errors;
                        Event::Rejected(errors)
                    }
                }
            }
        }
    }

    /// Ends a send started by [`Event::Submitted`] and clears the form.
    pub fn finish(&mut self) {
        self.sending = false;
        self.form = ContactForm::default();
        self.errors = FieldErrors::default();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let name = self.field(
            i18n,
            Field::Name,
            text_input(&i18n.tr("contact-name-placeholder"), &self.form.name)
                .on_input(Message::NameChanged)
                .on_submit(Message::Submit),
        );
        let email = self.field(
            i18n,
            Field::Email,
            text_input(&i18n.tr("contact-email-placeholder"), &self.form.email)
                .on_input(Message::EmailChanged)
                .on_submit(Message::Submit),
        );
        let message = self.field(
            i18n,
            Field::Message,
            text_input(&i18n.tr("contact-message-placeholder"), &self.form.message)
                .on_input(Message::MessageChanged)
                .on_submit(Message::Submit),
        );

        let submit_label = if self.sending {
            i18n.tr("contact-sending")
        } else {
            i18n.tr("contact-submit")
        };
        let submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .on_press_maybe((!self.sending).then_some(Message::Submit))
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("contact-subtitle")).size(typography::BODY_LG))
            .push(name)
            .push(email)
            .push(message)
            .push(submit);

        Container::new(
            Container::new(content)
                .max_width(sizing::CONTACT_FORM_WIDTH)
                .padding(spacing::LG)
                .style(styles::container::panel),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
    }

    /// Label, input, and the error line under it.
    fn field<'a>(
        &'a self,
        i18n: &'a I18n,
        field: Field,
        input: iced::widget::TextInput<'a, Message>,
    ) -> Element<'a, Message> {
        let label_key = match field {
            Field::Name => "contact-name-label",
            Field::Email => "contact-email-label",
            Field::Message => "contact-message-label",
        };

        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY))
            .push(
                input
                    .padding(spacing::XS)
                    .size(typography::BODY_LG)
                    .width(Length::Fill),
            );

        if let Some(error) = self.errors.get(field) {
            let args = error.i18n_args();
            let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
            column = column.push(
                Text::new(i18n.tr_with_args(error.i18n_key(), &args))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        column.into()
    }
}

/// Simulates delivering a submission to a remote inbox.
pub async fn send(submission: ContactSubmission, delay: Duration) -> ContactSubmission {
    tokio::time::sleep(delay).await;
    tracing::info!(
        email = %submission.email,
        chars = submission.message.chars().count(),
        "contact request sent"
    );
    submission
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::new();
        state.update(Message::NameChanged("Ada".into()));
        state.update(Message::EmailChanged("ada@example.com".into()));
        state.update(Message::MessageChanged("Please call me back.".into()));
        state
    }

    #[test]
    fn submit_valid_form_emits_submission_and_locks_form() {
        let mut state = filled();

        let event = state.update(Message::Submit);

        assert!(matches!(event, Event::Submitted(ref s) if s.name == "Ada"));
        assert!(state.is_sending());
        assert_eq!(state.update(Message::Submit), Event::None);
    }

    #[test]
    fn submit_invalid_form_emits_errors() {
        let mut state = State::new();
        let event = state.update(Message::Submit);
        match event {
            Event::Rejected(errors) => assert_eq!(errors.count(), 3),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(state.errors().count(), 3);
        assert!(!state.is_sending());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = State::new();
        state.update(Message::Submit);
        state.update(Message::EmailChanged("a".into()));
        assert!(state.errors().email.is_none());
        assert!(state.errors().name.is_some());
    }

    #[test]
    fn finish_resets_form_and_sending_flag() {
        let mut state = filled();
        state.update(Message::Submit);
        assert!(state.is_sending());
        state.finish();
        assert_eq!(state.form(), &ContactForm::default());
        assert_eq!(state.errors(), &FieldErrors::default());
        assert!(!state.is_sending());
    }

    #[tokio::test(start_paused = true)]
    async fn send_waits_for_delay() {
        let submission = ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, team".into(),
        };
        let started = tokio::time::Instant::now();
        let sent = send(submission.clone(), Duration::from_millis(600)).await;
        assert_eq!(sent, submission);
        assert!(started.elapsed() >= Duration::from_millis(600));
    }
}
