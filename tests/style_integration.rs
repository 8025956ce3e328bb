// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::Theme;
use iced_atelier::ui::design_tokens::{opacity, palette, sizing, spacing};
use iced_atelier::ui::styles::{button, container};
use iced_atelier::ui::theming::ThemeMode;

#[test]
fn all_button_styles_compile() {
    let theme = Theme::Dark;

    // Smoke-test all button styles compile and are callable
    let _ = button::primary(&theme, iced::widget::button::Status::Active);
    let _ = button::secondary(&theme, iced::widget::button::Status::Hovered);
    let _ = button::selected(&theme, iced::widget::button::Status::Active);
    let _ = button::disabled()(&theme, iced::widget::button::Status::Disabled);
}

#[test]
fn all_container_styles_compile() {
    let theme = Theme::Light;

    let _ = container::panel(&theme);
    let _ = container::drop_zone(&theme);
    let _ = container::toolbar(&theme);
}

#[test]
fn design_tokens_are_accessible() {
    // Palette
    let _ = palette::PRIMARY_500;
    let _ = palette::WHITE;

    // Spacing
    let _ = spacing::MD;

    // Opacity
    let _ = opacity::OVERLAY_STRONG;

    // Sizing
    let _ = sizing::STYLE_THUMB;
}

#[test]
fn disabled_buttons_are_visually_muted() {
    let theme = Theme::Dark;
    let active = button::primary(&theme, iced::widget::button::Status::Active);
    let disabled = button::primary(&theme, iced::widget::button::Status::Disabled);
    assert_ne!(active.text_color, disabled.text_color);
}

#[test]
fn theme_modes_cover_light_and_dark() {
    assert!(!ThemeMode::Light.is_dark());
    assert!(ThemeMode::Dark.is_dark());
}
