// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card-like panel grouping one step of the flow.
pub fn panel(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        border: Border {
            color: palette_ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Dashed-look drop target for the uploader.
pub fn drop_zone(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.base.color)),
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Top navigation bar background.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        ..Default::default()
    }
}
