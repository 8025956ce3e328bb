// SPDX-License-Identifier: MPL-2.0
//! Photo picker panel: drop zone, browse button, camera entry point.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::Photo;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the uploader.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photo: Option<&'a Photo>,
}

/// Render the upload panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("uploader-heading")).size(typography::TITLE_SM);

    let body: Element<'a, Message> = match ctx.photo {
        Some(photo) => view_selected(&ctx, photo),
        None => view_empty(&ctx),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// Drop zone with browse and camera actions, shown while no photo is chosen.
fn view_empty<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("uploader-drop-hint"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let browse = button(Text::new(ctx.i18n.tr("uploader-browse-button")))
        .on_press(Message::BrowsePhoto)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let camera = button(Text::new(ctx.i18n.tr("uploader-camera-button")))
        .on_press(Message::OpenCamera)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(browse)
        .push(camera);

    let zone = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(hint)
        .push(actions);

    Container::new(zone)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::drop_zone)
        .into()
}

/// Selected photo summary with a remove action.
fn view_selected<'a>(ctx: &ViewContext<'a>, photo: &'a Photo) -> Element<'a, Message> {
    let name = Text::new(photo.file_name.as_str()).size(typography::BODY);
    let size = Text::new(photo.size_label())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(name)
        .push(size);

    let remove = button(Text::new(ctx.i18n.tr("uploader-remove-button")))
        .on_press(Message::RemovePhoto)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(details)
        .push(remove);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::drop_zone)
        .into()
}
