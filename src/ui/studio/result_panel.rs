// SPDX-License-Identifier: MPL-2.0
//! Result panel: generate button, progress spinner, generated image with
//! save/copy actions, and inline error display.

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the result panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_generating: bool,
    pub spinner_rotation: f32,
    pub result: Option<&'a Handle>,
    pub error: Option<&'a Error>,
    pub show_error_details: bool,
    pub can_generate: bool,
}

/// Render the result panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("result-heading")).size(typography::TITLE_SM);

    let generate_label = Text::new(ctx.i18n.tr("generate-button")).size(typography::BODY);
    let generate = if ctx.can_generate {
        button(generate_label)
            .on_press(Message::Generate)
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::primary)
    } else {
        button(generate_label)
            .padding([spacing::SM, spacing::XL])
            .style(styles::button::disabled())
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(generate);

    if let Some(error) = ctx.error {
        content = content.push(view_error(&ctx, error));
    }

    let body: Element<'a, Message> = if ctx.is_generating {
        view_progress(&ctx)
    } else if let Some(handle) = ctx.result {
        view_result(&ctx, handle)
    } else if ctx.error.is_none() {
        Text::new(ctx.i18n.tr("result-placeholder"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            })
            .into()
    } else {
        text("").into()
    };
    content = content.push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// Spinner and caption while the transform request is in flight.
fn view_progress<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element();

    let caption = Text::new(ctx.i18n.tr("result-generating"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption)
        .into()
}

/// The generated image with its save and copy actions.
fn view_result<'a>(ctx: &ViewContext<'a>, handle: &Handle) -> Element<'a, Message> {
    let image = Image::new(handle.clone())
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT));

    let save = button(Text::new(ctx.i18n.tr("result-save-button")))
        .on_press(Message::SaveResult)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let copy = button(Text::new(ctx.i18n.tr("result-copy-button")))
        .on_press(Message::CopyResult)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let actions = Row::new().spacing(spacing::SM).push(save).push(copy);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(actions)
        .into()
}

/// Inline error card shown above the result area.
fn view_error<'a>(ctx: &ViewContext<'a>, error: &Error) -> Element<'a, Message> {
    let mut display: ErrorDisplay<Message> = ErrorDisplay::new(ErrorSeverity::Error)
        .title(ctx.i18n.tr("error-title"))
        .message(ctx.i18n.tr(error.i18n_key()))
        .details_visible(ctx.show_error_details)
        .details_labels(
            ctx.i18n.tr("error-show-details"),
            ctx.i18n.tr("error-hide-details"),
        );

    if let Some(details) = error.details() {
        display = display
            .details(details.to_string())
            .on_toggle_details(Message::ToggleErrorDetails);
    }

    display.view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_ctx(i18n: &I18n) -> ViewContext<'_> {
        ViewContext {
            i18n,
            is_generating: false,
            spinner_rotation: 0.0,
            result: None,
            error: None,
            show_error_details: false,
            can_generate: false,
        }
    }

    #[test]
    fn result_panel_renders_placeholder() {
        let i18n = I18n::default();
        let _element = view(base_ctx(&i18n));
    }

    #[test]
    fn result_panel_renders_progress() {
        let i18n = I18n::default();
        let mut ctx = base_ctx(&i18n);
        ctx.is_generating = true;
        let _element = view(ctx);
    }

    #[test]
    fn result_panel_renders_error_with_details() {
        let i18n = I18n::default();
        let error = Error::Network("HTTP 500: overloaded".into());
        let mut ctx = base_ctx(&i18n);
        ctx.error = Some(&error);
        ctx.show_error_details = true;
        let _element = view(ctx);
    }

    #[test]
    fn result_panel_renders_result() {
        let i18n = I18n::default();
        let handle = Handle::from_rgba(2, 2, vec![128u8; 16]);
        let mut ctx = base_ctx(&i18n);
        ctx.result = Some(&handle);
        ctx.can_generate = true;
        let _element = view(ctx);
    }
}
