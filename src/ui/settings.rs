// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and theme mode.
//!
//! Changes are applied immediately and persisted by the parent; the screen
//! itself is stateless and renders from the live i18n and theme values.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    Back,
}

/// Process a settings message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
        Message::Back => Event::Back,
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::TITLE_SM))
        .spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translation of the language name, e.g. "language-name-fr"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = ctx.i18n.current_locale() == locale;
        let mut language_button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()))
            .padding([spacing::XS, spacing::MD]);

        if is_current_locale {
            language_button = language_button.style(styles::button::selected);
        } else {
            language_button = language_button.style(styles::button::secondary);
        }

        language_column = language_column.push(language_button);
    }

    let mut theme_row = Row::new().spacing(spacing::SM);
    for mode in ThemeMode::ALL {
        let mut mode_button = Button::new(Text::new(ctx.i18n.tr(mode.i18n_key())))
            .on_press(Message::ThemeModeSelected(mode))
            .padding([spacing::XS, spacing::MD]);

        if mode == ctx.theme_mode {
            mode_button = mode_button.style(styles::button::selected);
        } else {
            mode_button = mode_button.style(styles::button::secondary);
        }
        theme_row = theme_row.push(mode_button);
    }

    let theme_column = Column::new()
        .push(Text::new(ctx.i18n.tr("select-theme-label")).size(typography::TITLE_SM))
        .spacing(spacing::XS)
        .push(theme_row);

    let back = button(Text::new(ctx.i18n.tr("settings-back-button")))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    Column::new()
        .push(title)
        .push(language_column)
        .push(theme_column)
        .push(back)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_settings_returns_element() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
        });
    }

    #[test]
    fn language_selection_emits_event() {
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = update(Message::LanguageSelected(locale.clone()));
        match event {
            Event::LanguageChanged(selected) => assert_eq!(selected, locale),
            other => panic!("expected language change, got {other:?}"),
        }
    }

    #[test]
    fn theme_selection_emits_event() {
        let event = update(Message::ThemeModeSelected(ThemeMode::Dark));
        assert!(matches!(event, Event::ThemeModeChanged(ThemeMode::Dark)));
    }

    #[test]
    fn back_emits_event() {
        assert!(matches!(update(Message::Back), Event::Back));
    }
}
