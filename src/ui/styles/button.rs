// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (Generate, Capture).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Secondary action button (Browse, Copy, Close camera).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette_ext.background.strong.color)),
            text_color: palette_ext.background.base.text,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        button::Status::Disabled => disabled_style(),
        _ => button::Style {
            background: Some(Background::Color(palette_ext.background.weak.color)),
            text_color: palette_ext.background.base.text,
            border: Border {
                color: palette_ext.background.strong.color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
    }
}

/// Toggle-style button rendered as selected (current style, current language).
pub fn selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_400,
            width: 2.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style closure for a permanently disabled button.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme, _status| disabled_style()
}

fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_400)),
        text_color: palette::GRAY_200,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
