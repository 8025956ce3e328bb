// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main message handlers for different parts of the
//! application. Studio events become asynchronous tasks here (dialogs,
//! network calls, file writes); the studio component itself stays pure.

use super::{config, notifications, persisted_state, Message, Screen, Services};
use crate::catalog::StyleOption;
use crate::error::Error;
use crate::generate::GeneratedImage;
use crate::i18n::fluent::I18n;
use crate::media::{self, Photo};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::studio::{self, Event as StudioEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use tracing::warn;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub studio: &'a mut studio::State,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub config: &'a mut config::Config,
    pub services: &'a Services,
    pub app_state: &'a mut persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles studio component messages by translating emitted events into
/// side-effect tasks.
pub fn handle_studio_message(
    ctx: &mut UpdateContext<'_>,
    message: studio::Message,
) -> Task<Message> {
    match ctx.studio.update(message) {
        StudioEvent::None => Task::none(),
        StudioEvent::PickPhotoRequested => {
            open_photo_dialog(ctx.app_state.last_open_directory.clone())
        }
        StudioEvent::FetchExtraStylesRequested => {
            let source = ctx.services.style_source.clone();
            Task::perform(
                async move { source.fetch_extra().await },
                Message::ExtraStylesFetched,
            )
        }
        StudioEvent::GenerateRequested { photo, style } => {
            start_generation(ctx, photo, style)
        }
        StudioEvent::SaveRequested {
            image,
            default_name,
        } => open_save_dialog(image, default_name, ctx.app_state.last_save_directory.clone()),
        StudioEvent::CopyRequested(data_uri) => {
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-copy-success",
                ));
            iced::clipboard::write(data_uri)
        }
        StudioEvent::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::OpenSettings => *ctx.screen = Screen::Settings,
        NavbarEvent::OpenAbout => *ctx.screen = Screen::About,
    }
    Task::none()
}

/// Handles settings messages, applying and persisting preference changes.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
            persist_config(ctx);
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persist_config(ctx);
        }
        SettingsEvent::Back => *ctx.screen = Screen::Studio,
    }
    Task::none()
}

/// Handles about screen messages.
pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: about::Message,
) -> Task<Message> {
    match about::update(message) {
        AboutEvent::Back => *ctx.screen = Screen::Studio,
    }
    Task::none()
}

/// Handles the result of the open photo dialog.
pub fn handle_photo_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    if let Some(parent) = path.parent() {
        ctx.app_state.last_open_directory = Some(parent.to_path_buf());
        persist_state(ctx);
    }

    load_photo_task(path)
}

/// Handles a file dropped onto the window (Studio screen only).
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if *ctx.screen != Screen::Studio {
        return Task::none();
    }
    load_photo_task(path)
}

/// Handles the loaded (or failed) photo.
pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Photo, Error>,
) -> Task<Message> {
    match result {
        Ok(photo) => ctx.studio.set_photo(photo),
        Err(error) => ctx.studio.photo_load_failed(error),
    }
    Task::none()
}

/// Handles the outcome of the extra-style fetch and kicks off thumbnail
/// fetches for whatever was appended.
pub fn handle_extra_styles_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<StyleOption>, Error>,
) -> Task<Message> {
    let added = ctx.studio.apply_extra_styles(result);
    fetch_thumbnails(ctx.services, added)
}

/// Stores a fetched thumbnail; failures keep the placeholder tile.
pub fn handle_thumbnail_fetched(
    ctx: &mut UpdateContext<'_>,
    name: String,
    bytes: Option<Vec<u8>>,
) -> Task<Message> {
    if let Some(bytes) = bytes {
        ctx.studio.set_thumbnail(name, bytes);
    }
    Task::none()
}

/// Handles the completed transform request.
pub fn handle_generation_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<GeneratedImage, Error>,
) -> Task<Message> {
    let succeeded = result.is_ok();
    ctx.studio.finish_generation(result);
    if succeeded {
        ctx.notifications
            .push(notifications::Notification::success(
                "notification-generation-success",
            ));
    }
    Task::none()
}

/// Handles the Save As dialog result by writing the image to disk.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
    image: GeneratedImage,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    if let Some(parent) = path.parent() {
        ctx.app_state.last_save_directory = Some(parent.to_path_buf());
        persist_state(ctx);
    }

    Task::perform(
        async move {
            std::fs::write(&path, &image.bytes)
                .map(|()| path)
                .map_err(Error::from)
        },
        Message::ResultSaved,
    )
}

/// Surfaces the save outcome as a toast.
pub fn handle_result_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => ctx.notifications.push(
            notifications::Notification::success("notification-saved-to")
                .with_arg("path", path.to_string_lossy()),
        ),
        Err(error) => {
            warn!(%error, "saving generated image failed");
            ctx.notifications
                .push(notifications::Notification::error(
                    "notification-save-error",
                ));
        }
    }
    Task::none()
}

/// Periodic tick: toast expiry plus studio animation/camera polling.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    ctx.studio.tick();
    Task::none()
}

/// Window close: release the camera, then actually close.
pub fn handle_window_close_requested(
    ctx: &mut UpdateContext<'_>,
    id: iced::window::Id,
) -> Task<Message> {
    ctx.studio.shutdown();
    iced::window::close(id)
}

// ── Task builders ────────────────────────────────────────────────────────────

/// Builds the transform request task, or reports the missing API key.
fn start_generation(ctx: &mut UpdateContext<'_>, photo: Photo, style: String) -> Task<Message> {
    let Some(client) = ctx.services.generation.clone() else {
        ctx.studio.finish_generation(Err(Error::Config(
            "no API key configured".to_string(),
        )));
        ctx.notifications
            .push(notifications::Notification::warning(
                "notification-api-key-missing",
            ));
        return Task::none();
    };

    Task::perform(
        async move {
            client
                .transform(photo.to_base64(), photo.mime_type.clone(), style)
                .await
                .map_err(Error::from)
        },
        Message::GenerationCompleted,
    )
}

/// Loads a photo off the UI thread.
fn load_photo_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move { media::load_photo(&path) },
        Message::PhotoLoaded,
    )
}

/// Opens the photo picker dialog.
fn open_photo_dialog(last_open_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Choose a photo")
                .add_filter("Images", media::PICKER_EXTENSIONS);

            if let Some(dir) = last_open_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::PhotoDialogResult,
    )
}

/// Opens the Save As dialog for the generated image.
fn open_save_dialog(
    image: GeneratedImage,
    default_name: String,
    last_save_directory: Option<PathBuf>,
) -> Task<Message> {
    let extension = image.extension();
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Save Artwork As")
                .set_file_name(&default_name)
                .add_filter("Image", &[extension]);

            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::SaveDialogResult {
            path,
            image: image.clone(),
        },
    )
}

/// Fans out one fetch task per style preview.
pub fn fetch_thumbnails(services: &Services, styles: Vec<StyleOption>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = styles
        .into_iter()
        .filter_map(|style| {
            let url = style.preview_url?;
            let name = style.name;
            let client = services.http.clone();
            Some(Task::perform(
                async move {
                    let bytes = fetch_thumbnail(&client, &url).await;
                    (name, bytes)
                },
                |(name, bytes)| Message::ThumbnailFetched { name, bytes },
            ))
        })
        .collect();

    Task::batch(tasks)
}

/// Best-effort thumbnail download; any failure degrades to the placeholder.
async fn fetch_thumbnail(client: &reqwest::Client, url: &str) -> Option<Vec<u8>> {
    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.bytes().await.ok().map(|b| b.to_vec())
}

// ── Persistence helpers ──────────────────────────────────────────────────────

fn persist_config(ctx: &mut UpdateContext<'_>) {
    if let Err(error) = config::save(ctx.config) {
        warn!(%error, "persisting settings failed");
        ctx.notifications
            .push(notifications::Notification::warning(
                "notification-config-save-error",
            ));
    }
}

fn persist_state(ctx: &mut UpdateContext<'_>) {
    if let Some(warning_key) = ctx.app_state.save() {
        ctx.notifications
            .push(notifications::Notification::warning(warning_key));
    }
}
