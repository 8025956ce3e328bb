// SPDX-License-Identifier: MPL-2.0
//! About screen: application version and credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
}

/// Process an about message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Render the about screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let version = Text::new(format!("v{}", env!("CARGO_PKG_VERSION")))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let back = button(Text::new(ctx.i18n.tr("settings-back-button")))
        .on_press(Message::Back)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    Column::new()
        .push(title)
        .push(version)
        .push(description)
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
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn back_emits_event() {
        assert!(matches!(update(Message::Back), Event::Back));
    }
}
