// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events (file drop, close request) and drives the
//! periodic tick used for camera preview refresh, spinner animation, and
//! toast auto-dismiss.

use super::{Message, Screen};
use crate::app::config::defaults::CAMERA_PREVIEW_INTERVAL_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick cadence while only toasts need servicing.
const NOTIFICATION_TICK_MS: u64 = 500;

/// Creates the native event subscription for the current screen.
///
/// File drops are only handled on the Studio screen. Window close requests
/// are handled on all screens so the camera can be released before exit.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Studio => event::listen_with(|event, _status, window_id| match &event {
            event::Event::Window(iced::window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            event::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path.clone()))
            }
            _ => None,
        }),
        Screen::Settings | Screen::About => {
            event::listen_with(|event, _status, window_id| match &event {
                event::Event::Window(iced::window::Event::CloseRequested) => {
                    Some(Message::WindowCloseRequested(window_id))
                }
                _ => None,
            })
        }
    }
}

/// Creates the periodic tick subscription.
///
/// Fast while the camera is open or a generation is running (preview and
/// spinner), slow while only notifications are pending, absent otherwise.
pub fn create_tick_subscription(
    needs_fast_tick: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if needs_fast_tick {
        time::every(Duration::from_millis(CAMERA_PREVIEW_INTERVAL_MS)).map(Message::Tick)
    } else if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
