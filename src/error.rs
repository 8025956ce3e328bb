// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A photo and a style are both required before generating.
    Validation,
    /// Camera access failed (permission, device, or capture problem).
    MediaAccess(MediaAccessError),
    /// A network call failed (style fetch or transform request).
    Network(String),
    /// The generation API answered without an image part.
    EmptyResult,
    /// The selected file could not be read or is not a supported image.
    Decode(String),
    Io(String),
    Config(String),
}

/// Specific error types for camera access issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAccessError {
    /// The platform refused access to the camera.
    PermissionDenied,

    /// No usable camera device was found, or it is busy.
    DeviceUnavailable,

    /// The stream was open but a frame could not be captured or encoded.
    CaptureFailed(String),
}

impl MediaAccessError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaAccessError::PermissionDenied => "error-camera-permission",
            MediaAccessError::DeviceUnavailable => "error-camera-unavailable",
            MediaAccessError::CaptureFailed(_) => "error-camera-capture",
        }
    }

    /// Attempts to parse a raw backend error message into a specific
    /// `MediaAccessError`. The capture backend only reports strings, so
    /// categorization is by message content.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("permission")
            || msg_lower.contains("denied")
            || msg_lower.contains("not authorized")
        {
            return MediaAccessError::PermissionDenied;
        }

        if msg_lower.contains("not found")
            || msg_lower.contains("no device")
            || msg_lower.contains("busy")
            || msg_lower.contains("in use")
            || msg_lower.contains("could not open")
        {
            return MediaAccessError::DeviceUnavailable;
        }

        MediaAccessError::CaptureFailed(msg.to_string())
    }
}

impl fmt::Display for MediaAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaAccessError::PermissionDenied => write!(f, "Camera permission denied"),
            MediaAccessError::DeviceUnavailable => write!(f, "Camera unavailable"),
            MediaAccessError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Validation => "error-missing-selection",
            Error::MediaAccess(e) => e.i18n_key(),
            Error::Network(_) => "error-network",
            Error::EmptyResult => "error-generate-empty",
            Error::Decode(_) => "error-unsupported-image",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }

    /// Raw detail string for the collapsible "technical details" section,
    /// when the variant carries one.
    pub fn details(&self) -> Option<&str> {
        match self {
            Error::Network(msg)
            | Error::Decode(msg)
            | Error::Io(msg)
            | Error::Config(msg)
            | Error::MediaAccess(MediaAccessError::CaptureFailed(msg)) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation => write!(f, "Select a photo and an art style first"),
            Error::MediaAccess(e) => write!(f, "Camera Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::EmptyResult => write!(f, "The model did not return an image"),
            Error::Decode(e) => write!(f, "Image Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<MediaAccessError> for Error {
    fn from(err: MediaAccessError) -> Self {
        Error::MediaAccess(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn media_error_from_message_permission() {
        let err = MediaAccessError::from_message("Permission denied by portal");
        assert_eq!(err, MediaAccessError::PermissionDenied);
    }

    #[test]
    fn media_error_from_message_unavailable() {
        let err = MediaAccessError::from_message("Device 0 not found");
        assert_eq!(err, MediaAccessError::DeviceUnavailable);

        let err = MediaAccessError::from_message("resource busy");
        assert_eq!(err, MediaAccessError::DeviceUnavailable);
    }

    #[test]
    fn media_error_from_message_fallback_is_capture_failed() {
        let err = MediaAccessError::from_message("frame decode went sideways");
        assert!(matches!(err, MediaAccessError::CaptureFailed(_)));
    }

    #[test]
    fn error_i18n_keys_are_stable() {
        assert_eq!(Error::Validation.i18n_key(), "error-missing-selection");
        assert_eq!(Error::EmptyResult.i18n_key(), "error-generate-empty");
        assert_eq!(
            Error::MediaAccess(MediaAccessError::PermissionDenied).i18n_key(),
            "error-camera-permission"
        );
        assert_eq!(Error::Network("timeout".into()).i18n_key(), "error-network");
    }

    #[test]
    fn details_present_only_for_carrying_variants() {
        assert!(Error::Validation.details().is_none());
        assert!(Error::EmptyResult.details().is_none());
        assert_eq!(
            Error::Network("connection refused".into()).details(),
            Some("connection refused")
        );
    }
}
