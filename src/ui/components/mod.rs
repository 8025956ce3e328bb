// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! - [`error_display`] - Consistent error presentation with severity levels,
//!   expandable technical details, and i18n support

pub mod error_display;
