// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`studio`] - Main screen: photo selection, style choice, generation
//! - [`settings`] - Application preferences (language, theme)
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod studio;
pub mod styles;
pub mod theming;
pub mod widgets;
