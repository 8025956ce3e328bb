// SPDX-License-Identifier: MPL-2.0
//! Camera sub-flow panel: live preview, capture and close actions.
//!
//! Shown in place of the uploader while the camera is open. The preview is
//! the most recent frame published by the capture session; until the device
//! finishes opening a status line is shown instead, and open failures render
//! inline with their localized message.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::camera::FeedStatus;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the camera panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: &'a FeedStatus,
    pub preview: Option<&'a Handle>,
}

/// Render the camera panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("camera-heading")).size(typography::TITLE_SM);

    let preview: Element<'a, Message> = match (ctx.status, ctx.preview) {
        (FeedStatus::Failed(err), _) => Text::new(ctx.i18n.tr(err.i18n_key()))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
            .into(),
        (_, Some(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .into(),
        (FeedStatus::Opening, None) | (FeedStatus::Streaming { .. }, None) => {
            Text::new(ctx.i18n.tr("camera-opening"))
                .size(typography::BODY)
                .into()
        }
    };

    let can_capture =
        matches!(ctx.status, FeedStatus::Streaming { .. }) && ctx.preview.is_some();

    let capture_label = Text::new(ctx.i18n.tr("camera-capture-button"));
    let capture = if can_capture {
        button(capture_label)
            .on_press(Message::CapturePhoto)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
    } else {
        button(capture_label)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::disabled())
    };

    let close = button(Text::new(ctx.i18n.tr("camera-close-button")))
        .on_press(Message::CloseCamera)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(capture)
        .push(close);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(
            Container::new(preview)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaAccessError;

    #[test]
    fn camera_panel_renders_opening_state() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            status: &FeedStatus::Opening,
            preview: None,
        });
    }

    #[test]
    fn camera_panel_renders_failure_state() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            status: &FeedStatus::Failed(MediaAccessError::PermissionDenied),
            preview: None,
        });
    }

    #[test]
    fn camera_panel_renders_streaming_state() {
        let i18n = I18n::default();
        let handle = Handle::from_rgba(2, 2, vec![255u8; 16]);
        let _element = view(ViewContext {
            i18n: &i18n,
            status: &FeedStatus::Streaming {
                width: 2,
                height: 2,
            },
            preview: Some(&handle),
        });
    }
}
