// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the brand, the language switch, and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleTheme,
    LanguageChanged(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleTheme => Event::ToggleTheme,
        Message::SelectLanguage(locale) => Event::LanguageChanged(locale),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD);

    let mut languages = Row::new().spacing(spacing::XXS);
    for locale in ctx.i18n.available_locales() {
        let label = ctx.i18n.tr(&format!("language-name-{locale}"));
        let style = if locale == ctx.i18n.current_locale() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        languages = languages.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::SelectLanguage(locale.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    // The label names the theme the toggle switches to
    let theme_label = if ctx.theme_mode.is_dark() {
        ctx.i18n.tr("navbar-theme-light")
    } else {
        ctx.i18n.tr("navbar-theme-dark")
    };
    let theme_toggle = button(Text::new(theme_label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(languages)
        .push(theme_toggle);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}
