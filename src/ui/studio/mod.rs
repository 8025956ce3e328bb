// SPDX-License-Identifier: MPL-2.0
//! The studio screen: pick a photo, pick a style, generate, admire.
//!
//! This component owns the whole interaction state machine (photo selection,
//! the camera sub-flow, the style catalog, the transform request) and
//! emits [`Event`]s for everything that needs an asynchronous side effect
//! (dialogs, network calls, clipboard). The parent turns events into tasks;
//! nothing in here blocks.
//!
//! Two invariants the update logic maintains:
//! - picking a new photo or style clears any previous result and error
//!   before a new generation can start;
//! - at most one transform request is in flight, enforced by disabling the
//!   submit path while `is_generating` is set.

mod camera_panel;
mod result_panel;
mod style_picker;
mod uploader;

use crate::catalog::{StyleCatalog, StyleOption};
use crate::error::Error;
use crate::generate::GeneratedImage;
use crate::i18n::fluent::I18n;
use crate::media::camera::{CameraSession, FeedStatus};
use crate::media::Photo;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Notification;
use crate::ui::widgets::animated_spinner;
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Row};
use iced::{Element, Length};
use std::collections::HashMap;

/// Camera sub-flow: closed, or open with a live session.
pub enum CameraState {
    Closed,
    Open {
        session: CameraSession,
        status: FeedStatus,
        preview: Option<Handle>,
    },
}

impl std::fmt::Debug for CameraState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraState::Closed => write!(f, "Closed"),
            CameraState::Open { status, .. } => write!(f, "Open({status:?})"),
        }
    }
}

/// Studio screen state.
pub struct State {
    photo: Option<Photo>,
    selected_style: Option<String>,
    catalog: StyleCatalog,
    result: Option<GeneratedImage>,
    /// Cached display handle for the current result.
    result_handle: Option<Handle>,
    error: Option<Error>,
    show_error_details: bool,
    is_generating: bool,
    is_loading_styles: bool,
    camera: CameraState,
    /// Preview thumbnails keyed by style name.
    thumbnails: HashMap<String, Handle>,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("photo", &self.photo.as_ref().map(|p| &p.file_name))
            .field("selected_style", &self.selected_style)
            .field("catalog_len", &self.catalog.len())
            .field("has_result", &self.result.is_some())
            .field("error", &self.error)
            .field("is_generating", &self.is_generating)
            .field("camera", &self.camera)
            .finish_non_exhaustive()
    }
}

/// Messages emitted by the studio widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the file picker.
    BrowsePhoto,
    /// Forget the selected photo.
    RemovePhoto,
    /// Open the camera sub-flow.
    OpenCamera,
    /// Close the camera without capturing.
    CloseCamera,
    /// Snapshot the current camera frame.
    CapturePhoto,
    StyleSelected(String),
    LoadMoreStyles,
    /// Submit the transform request.
    Generate,
    SaveResult,
    CopyResult,
    ToggleErrorDetails,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the photo file dialog.
    PickPhotoRequested,
    /// Fetch the one-shot extra style list.
    FetchExtraStylesRequested,
    /// Run the transform request.
    GenerateRequested { photo: Photo, style: String },
    /// Open the save dialog for the generated image.
    SaveRequested {
        image: GeneratedImage,
        default_name: String,
    },
    /// Put the given text on the clipboard.
    CopyRequested(String),
    /// Show a toast.
    Notify(Notification),
}

impl State {
    pub fn new() -> Self {
        Self {
            photo: None,
            selected_style: None,
            catalog: StyleCatalog::builtin(),
            result: None,
            result_handle: None,
            error: None,
            show_error_details: false,
            is_generating: false,
            is_loading_styles: false,
            camera: CameraState::Closed,
            thumbnails: HashMap::new(),
            spinner_rotation: 0.0,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BrowsePhoto => Event::PickPhotoRequested,
            Message::RemovePhoto => {
                self.photo = None;
                self.clear_outcome();
                Event::None
            }
            Message::OpenCamera => {
                if matches!(self.camera, CameraState::Closed) {
                    self.clear_outcome();
                    self.camera = CameraState::Open {
                        session: CameraSession::open(),
                        status: FeedStatus::Opening,
                        preview: None,
                    };
                }
                Event::None
            }
            Message::CloseCamera => {
                self.close_camera();
                Event::None
            }
            Message::CapturePhoto => self.capture_photo(),
            Message::StyleSelected(name) => {
                self.selected_style = Some(name);
                self.clear_outcome();
                Event::None
            }
            Message::LoadMoreStyles => {
                if self.catalog.can_load_more() && !self.is_loading_styles {
                    self.is_loading_styles = true;
                    Event::FetchExtraStylesRequested
                } else {
                    Event::None
                }
            }
            Message::Generate => self.request_generation(),
            Message::SaveResult => match &self.result {
                Some(image) => Event::SaveRequested {
                    image: image.clone(),
                    default_name: self.default_save_name(image),
                },
                None => Event::None,
            },
            Message::CopyResult => match &self.result {
                Some(image) => Event::CopyRequested(image.data_uri()),
                None => Event::None,
            },
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Event::None
            }
        }
    }

    fn request_generation(&mut self) -> Event {
        if self.is_generating {
            // The submit button is disabled while loading; this also guards
            // against a queued duplicate click.
            return Event::None;
        }

        match (&self.photo, &self.selected_style) {
            (Some(photo), Some(style)) => {
                let photo = photo.clone();
                let style = style.clone();
                self.clear_outcome();
                self.is_generating = true;
                self.spinner_rotation = 0.0;
                Event::GenerateRequested { photo, style }
            }
            _ => {
                self.result = None;
                self.result_handle = None;
                self.error = Some(Error::Validation);
                Event::None
            }
        }
    }

    fn capture_photo(&mut self) -> Event {
        let CameraState::Open { session, .. } = &self.camera else {
            return Event::None;
        };

        match session.capture() {
            Ok(photo) => {
                self.close_camera();
                self.set_photo(photo);
                Event::Notify(Notification::success("notification-photo-captured"))
            }
            Err(err) => {
                // Keep the camera open so the user can try again once the
                // feed has frames.
                self.error = Some(err);
                Event::None
            }
        }
    }

    fn close_camera(&mut self) {
        if let CameraState::Open { session, .. } =
            std::mem::replace(&mut self.camera, CameraState::Closed)
        {
            session.close();
        }
    }

    /// Clears result and error; every new selection goes through here before
    /// a new generation can be requested.
    fn clear_outcome(&mut self) {
        self.result = None;
        self.result_handle = None;
        self.error = None;
        self.show_error_details = false;
    }

    // ── Orchestration hooks used by the app update loop ──────────────────

    /// Installs a freshly picked, dropped, or captured photo.
    pub fn set_photo(&mut self, photo: Photo) {
        self.photo = Some(photo);
        self.clear_outcome();
    }

    /// Records a failed photo load.
    pub fn photo_load_failed(&mut self, error: Error) {
        self.error = Some(error);
    }

    /// Applies the outcome of the extra-style fetch. Returns the styles that
    /// were appended so their thumbnails can be fetched.
    pub fn apply_extra_styles(
        &mut self,
        outcome: Result<Vec<StyleOption>, Error>,
    ) -> Vec<StyleOption> {
        self.is_loading_styles = false;
        match outcome {
            Ok(extra) => self.catalog.merge_extra(extra),
            Err(error) => {
                self.error = Some(error);
                Vec::new()
            }
        }
    }

    /// Applies the outcome of the transform request.
    pub fn finish_generation(&mut self, outcome: Result<GeneratedImage, Error>) {
        self.is_generating = false;
        match outcome {
            Ok(image) => {
                self.result_handle = Some(Handle::from_bytes(image.bytes.clone()));
                self.result = Some(image);
                self.error = None;
            }
            Err(error) => {
                self.result = None;
                self.result_handle = None;
                self.error = Some(error);
            }
        }
    }

    /// Stores a fetched preview thumbnail.
    pub fn set_thumbnail(&mut self, name: String, bytes: Vec<u8>) {
        self.thumbnails.insert(name, Handle::from_bytes(bytes));
    }

    /// Styles whose thumbnails are still missing.
    pub fn styles_needing_thumbnails(&self) -> Vec<StyleOption> {
        self.catalog
            .entries()
            .iter()
            .filter(|s| s.preview_url.is_some() && !self.thumbnails.contains_key(&s.name))
            .cloned()
            .collect()
    }

    /// Whether the animation/polling tick should be running.
    pub fn needs_tick(&self) -> bool {
        self.is_generating || matches!(self.camera, CameraState::Open { .. })
    }

    /// Periodic tick: advances the spinner and refreshes the camera preview.
    pub fn tick(&mut self) {
        if self.is_generating {
            self.spinner_rotation = animated_spinner::advance_rotation(self.spinner_rotation);
        }

        if let CameraState::Open {
            session,
            status,
            preview,
        } = &mut self.camera
        {
            *status = session.status();
            if let Some(frame) = session.preview_frame() {
                *preview = Some(Handle::from_rgba(frame.width, frame.height, frame.rgba));
            }
        }
    }

    /// Releases scoped resources (the camera) on application teardown.
    pub fn shutdown(&mut self) {
        self.close_camera();
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn selected_style(&self) -> Option<&str> {
        self.selected_style.as_deref()
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    pub fn result(&self) -> Option<&GeneratedImage> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn is_loading_styles(&self) -> bool {
        self.is_loading_styles
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn can_generate(&self) -> bool {
        self.photo.is_some() && self.selected_style.is_some() && !self.is_generating
    }

    fn default_save_name(&self, image: &GeneratedImage) -> String {
        let stem = self
            .photo
            .as_ref()
            .map(|p| p.stem().to_string())
            .unwrap_or_else(|| "artistic-creation".to_string());
        let style = self
            .selected_style
            .as_deref()
            .unwrap_or("styled")
            .to_lowercase()
            .replace(' ', "-");
        format!("{stem}-{style}.{}", image.extension())
    }

    // ── View ─────────────────────────────────────────────────────────────

    /// Renders the two-column studio layout: controls on the left, result
    /// on the right.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let upload_section: Element<'a, Message> = match &self.camera {
            CameraState::Closed => uploader::view(uploader::ViewContext {
                i18n,
                photo: self.photo.as_ref(),
            }),
            CameraState::Open {
                status, preview, ..
            } => camera_panel::view(camera_panel::ViewContext {
                i18n,
                status,
                preview: preview.as_ref(),
            }),
        };

        let style_section = style_picker::view(style_picker::ViewContext {
            i18n,
            catalog: &self.catalog,
            selected_style: self.selected_style.as_deref(),
            thumbnails: &self.thumbnails,
            is_loading_more: self.is_loading_styles,
        });

        let result_section = result_panel::view(result_panel::ViewContext {
            i18n,
            is_generating: self.is_generating,
            spinner_rotation: self.spinner_rotation,
            result: self.result_handle.as_ref(),
            error: self.error.as_ref(),
            show_error_details: self.show_error_details,
            can_generate: self.can_generate(),
        });

        let controls = Column::new()
            .spacing(spacing::LG)
            .width(Length::FillPortion(1))
            .push(upload_section)
            .push(style_section);

        let row = Row::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(controls)
            .push(
                Container::new(result_section)
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
            );

        Container::new(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
