// SPDX-License-Identifier: MPL-2.0
//! Style catalog panel: thumbnail grid plus the one-shot load-more action.

use super::Message;
use crate::catalog::StyleCatalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::collections::HashMap;

/// Styles per grid row.
const COLUMNS: usize = 3;

/// Contextual data needed to render the style picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a StyleCatalog,
    pub selected_style: Option<&'a str>,
    pub thumbnails: &'a HashMap<String, Handle>,
    pub is_loading_more: bool,
}

/// Render the style picker panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("styles-heading")).size(typography::TITLE_SM);

    let mut grid = Column::new().spacing(spacing::SM);
    for chunk in ctx.catalog.entries().chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for style in chunk {
            let selected = ctx.selected_style == Some(style.name.as_str());
            row = row.push(style_tile(
                &style.name,
                ctx.thumbnails.get(&style.name),
                selected,
            ));
        }
        grid = grid.push(row);
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(grid);

    // The load-more control disappears for good after one successful load.
    if ctx.catalog.can_load_more() {
        let label = if ctx.is_loading_more {
            ctx.i18n.tr("styles-loading-more")
        } else {
            ctx.i18n.tr("styles-load-more-button")
        };
        let mut load_more = button(Text::new(label)).padding([spacing::XS, spacing::MD]);
        if ctx.is_loading_more {
            load_more = load_more.style(styles::button::disabled());
        } else {
            load_more = load_more
                .on_press(Message::LoadMoreStyles)
                .style(styles::button::secondary);
        }
        content = content.push(
            Container::new(load_more)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// One selectable style: thumbnail (or placeholder) above the name.
fn style_tile<'a>(
    name: &'a str,
    thumbnail: Option<&Handle>,
    selected: bool,
) -> Element<'a, Message> {
    use crate::ui::design_tokens::sizing::STYLE_THUMB;

    let preview: Element<'a, Message> = match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(STYLE_THUMB))
            .height(Length::Fixed(STYLE_THUMB))
            .into(),
        None => Container::new(text(""))
            .width(Length::Fixed(STYLE_THUMB))
            .height(Length::Fixed(STYLE_THUMB))
            .style(placeholder_style)
            .into(),
    };

    let label = Text::new(name)
        .size(typography::CAPTION)
        .align_x(alignment::Horizontal::Center);

    let tile = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(preview)
        .push(label);

    let mut tile_button = button(tile)
        .on_press(Message::StyleSelected(name.to_string()))
        .padding(spacing::XS);

    if selected {
        tile_button = tile_button.style(styles::button::selected);
    } else {
        tile_button = tile_button.style(styles::button::secondary);
    }

    tile_button.into()
}

/// Neutral block standing in for a missing or unfetched thumbnail.
fn placeholder_style(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(palette_ext.background.strong.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
