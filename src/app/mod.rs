// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the studio and settings
//! views.
//!
//! The `App` struct wires together the domains (studio, localization,
//! settings) and translates messages into side effects like config
//! persistence, photo loading, or the transform request. This file
//! intentionally keeps policy decisions (window sizing, persistence format,
//! localization switching) close to the main update loop so it is easy to
//! audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::source::StyleSource;
use crate::generate::{self, GenerationClient};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::studio;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::warn;

/// Long-lived collaborators shared by the update handlers.
///
/// Cloning the pieces is cheap: `reqwest::Client` is an `Arc` internally and
/// the providers only wrap one.
pub struct Services {
    /// Shared HTTP client for style and thumbnail fetches.
    pub http: reqwest::Client,
    /// Provider for the one-shot extra style fetch.
    pub style_source: StyleSource,
    /// Transform request client; absent when no API key is configured.
    pub generation: Option<GenerationClient>,
}

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    studio: studio::State,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Loaded configuration, mutated and re-saved on preference changes.
    config: config::Config,
    services: Services,
    /// Persisted application state (last save directory, etc.).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("studio", &self.studio)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings.
///
/// `exit_on_close_request` is off so the close request reaches the update
/// loop, which releases the camera before closing.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let http = reqwest::Client::new();
        Self {
            i18n: I18n::default(),
            screen: Screen::Studio,
            studio: studio::State::new(),
            theme_mode: ThemeMode::System,
            menu_open: false,
            config: config::Config::default(),
            services: Services {
                http: http.clone(),
                style_source: StyleSource::from_config(http, None),
                generation: None,
            },
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off startup tasks: preview
    /// thumbnail fetches and, when a path was passed on the command line,
    /// the initial photo load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let http = reqwest::Client::new();
        let style_source = StyleSource::from_config(http.clone(), config.styles.endpoint.clone());

        let generation = match generate::api_key_from_env() {
            Some(key) => match GenerationClient::new(&config.generation, key) {
                Ok(client) => Some(client),
                Err(error) => {
                    warn!(%error, "building generation client failed");
                    None
                }
            },
            None => None,
        };
        let api_key_missing = generation.is_none();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            services: Services {
                http,
                style_source,
                generation,
            },
            config,
            ..Self::default()
        };

        // Load application state (last save directory, etc.)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if api_key_missing {
            app.notifications
                .push(notifications::Notification::warning(
                    "notification-api-key-missing",
                ));
        }

        // Fetch preview thumbnails for the built-in styles.
        let thumbnails_task = update::fetch_thumbnails(
            &app.services,
            app.studio.styles_needing_thumbnails(),
        );

        // Preload a photo passed on the command line.
        let preload_task = match flags.file_path {
            Some(path_str) => {
                let path = std::path::PathBuf::from(path_str);
                Task::perform(
                    async move { crate::media::load_photo(&path) },
                    Message::PhotoLoaded,
                )
            }
            None => Task::none(),
        };

        (app, Task::batch([thumbnails_task, preload_task]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.studio.photo() {
            Some(photo) => format!("{} - {}", photo.file_name, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.studio.needs_tick(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            studio: &mut self.studio,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            config: &mut self.config,
            services: &self.services,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Studio(studio_message) => {
                update::handle_studio_message(&mut ctx, studio_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, about_message),
            Message::Notification(notification_message) => {
                ctx.notifications.update(notification_message);
                Task::none()
            }
            Message::SwitchScreen(target) => {
                *ctx.screen = target;
                Task::none()
            }
            Message::Tick(_now) => update::handle_tick(&mut ctx),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::WindowCloseRequested(id) => {
                update::handle_window_close_requested(&mut ctx, id)
            }
            Message::PhotoDialogResult(path) => {
                update::handle_photo_dialog_result(&mut ctx, path)
            }
            Message::PhotoLoaded(result) => update::handle_photo_loaded(&mut ctx, result),
            Message::ExtraStylesFetched(result) => {
                update::handle_extra_styles_fetched(&mut ctx, result)
            }
            Message::ThumbnailFetched { name, bytes } => {
                update::handle_thumbnail_fetched(&mut ctx, name, bytes)
            }
            Message::GenerationCompleted(result) => {
                update::handle_generation_completed(&mut ctx, result)
            }
            Message::SaveDialogResult { path, image } => {
                update::handle_save_dialog_result(&mut ctx, path, image)
            }
            Message::ResultSaved(result) => update::handle_result_saved(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            studio: &self.studio,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}
