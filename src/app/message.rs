// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::StyleOption;
use crate::error::Error;
use crate::generate::GeneratedImage;
use crate::media::Photo;
use crate::ui::about;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::studio;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Studio(studio::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Periodic tick for camera preview, spinner animation, and toast
    /// auto-dismiss.
    Tick(Instant),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
    /// Result from the open photo dialog.
    PhotoDialogResult(Option<PathBuf>),
    /// Result from loading a photo from disk.
    PhotoLoaded(Result<Photo, Error>),
    /// Result from the one-shot extra styles fetch.
    ExtraStylesFetched(Result<Vec<StyleOption>, Error>),
    /// Result from fetching one style preview thumbnail. `None` bytes mean
    /// the fetch failed; the tile keeps its placeholder.
    ThumbnailFetched {
        name: String,
        bytes: Option<Vec<u8>>,
    },
    /// Result from the transform request.
    GenerationCompleted(Result<GeneratedImage, Error>),
    /// Result from the Save As dialog, carrying the image to write.
    SaveDialogResult {
        path: Option<PathBuf>,
        image: GeneratedImage,
    },
    /// Result from writing the generated image to disk.
    ResultSaved(Result<PathBuf, Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo path to preload on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_ATELIER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ATELIER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
