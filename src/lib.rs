// SPDX-License-Identifier: MPL-2.0
//! `iced_atelier` is a photo-to-artwork studio built with the Iced GUI
//! framework.
//!
//! It lets the user pick or capture a photo, choose an artistic style, and
//! send both to a generative image API, then save or copy the stylized
//! result. The crate demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_atelier/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod generate;
pub mod i18n;
pub mod media;
pub mod ui;
