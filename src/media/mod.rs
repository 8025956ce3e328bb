// SPDX-License-Identifier: MPL-2.0
//! Photo loading and encoding.
//!
//! A [`Photo`] is the unit the rest of the application works with: the raw
//! encoded bytes of a picture plus its file name and MIME type. Photos come
//! from the file picker, a window drop, or a camera capture, and are handed
//! to the generation client as a base64 payload.

pub mod camera;

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fs;
use std::path::Path;

/// Maximum accepted photo size. The generation API rejects oversized inline
/// payloads long before this, so the check is a fast local guard.
pub const MAX_PHOTO_BYTES: u64 = 20 * 1024 * 1024;

/// A selected or captured photo, owned wholesale by the studio screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// File name shown in the UI and used to derive the save name.
    pub file_name: String,
    /// MIME type sent alongside the payload.
    pub mime_type: String,
    /// Raw encoded image bytes.
    pub bytes: Vec<u8>,
}

impl Photo {
    /// File name without its extension, used for default save names.
    pub fn stem(&self) -> &str {
        self.file_name
            .split('.')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("artistic-creation")
    }

    /// Base64 payload for the transform request.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// Human-readable size, for the uploader caption.
    pub fn size_label(&self) -> String {
        let bytes = self.bytes.len() as f64;
        if bytes >= 1024.0 * 1024.0 {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        } else {
            format!("{:.0} KB", (bytes / 1024.0).max(1.0))
        }
    }
}

/// Formats the application accepts as input photos.
const SUPPORTED: &[(image_rs::ImageFormat, &str)] = &[
    (image_rs::ImageFormat::Jpeg, "image/jpeg"),
    (image_rs::ImageFormat::Png, "image/png"),
    (image_rs::ImageFormat::WebP, "image/webp"),
    (image_rs::ImageFormat::Gif, "image/gif"),
    (image_rs::ImageFormat::Bmp, "image/bmp"),
];

/// File extensions offered in the open dialog filter.
pub const PICKER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Returns the MIME type for a supported format, or `None` otherwise.
fn mime_for_format(format: image_rs::ImageFormat) -> Option<&'static str> {
    SUPPORTED
        .iter()
        .find(|(f, _)| *f == format)
        .map(|(_, mime)| *mime)
}

/// Loads a photo from disk, sniffing the format from the file content.
///
/// The extension is ignored for type detection; only the bytes decide.
/// Unsupported or unreadable content yields [`Error::Decode`].
pub fn load_photo(path: &Path) -> Result<Photo> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_PHOTO_BYTES {
        return Err(Error::Decode(format!(
            "file exceeds {} MB",
            MAX_PHOTO_BYTES / (1024 * 1024)
        )));
    }

    let bytes = fs::read(path)?;
    let format = image_rs::guess_format(&bytes)
        .map_err(|e| Error::Decode(format!("unrecognized image data: {e}")))?;
    let mime_type = mime_for_format(format)
        .ok_or_else(|| Error::Decode(format!("unsupported format: {format:?}")))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo")
        .to_string();

    Ok(Photo {
        file_name,
        mime_type: mime_type.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn png_bytes() -> Vec<u8> {
        let img = image_rs::DynamicImage::new_rgb8(4, 4);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image_rs::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn load_photo_detects_png() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("shot.png");
        fs::write(&path, png_bytes()).expect("write");

        let photo = load_photo(&path).expect("load");
        assert_eq!(photo.mime_type, "image/png");
        assert_eq!(photo.file_name, "shot.png");
        assert!(!photo.bytes.is_empty());
    }

    #[test]
    fn load_photo_ignores_lying_extension() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("shot.jpg");
        fs::write(&path, png_bytes()).expect("write");

        let photo = load_photo(&path).expect("load");
        assert_eq!(photo.mime_type, "image/png");
    }

    #[test]
    fn load_photo_rejects_non_image() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"definitely not pixels").expect("write");

        assert!(matches!(load_photo(&path), Err(Error::Decode(_))));
    }

    #[test]
    fn load_photo_missing_file_is_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("gone.png");
        assert!(matches!(load_photo(&path), Err(Error::Io(_))));
    }

    #[test]
    fn stem_strips_extension() {
        let photo = Photo {
            file_name: "holiday.photo.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![1],
        };
        assert_eq!(photo.stem(), "holiday");
    }

    #[test]
    fn stem_falls_back_for_dotfiles() {
        let photo = Photo {
            file_name: ".png".into(),
            mime_type: "image/png".into(),
            bytes: vec![1],
        };
        assert_eq!(photo.stem(), "artistic-creation");
    }

    #[test]
    fn base64_payload_round_trips() {
        use base64::Engine as _;
        let photo = Photo {
            file_name: "a.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0, 1, 2, 250],
        };
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(photo.to_base64())
            .expect("decode");
        assert_eq!(decoded, photo.bytes);
    }

    #[test]
    fn size_label_scales() {
        let small = Photo {
            file_name: "a.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0; 2048],
        };
        assert_eq!(small.size_label(), "2 KB");

        let big = Photo {
            file_name: "b.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0; 3 * 1024 * 1024],
        };
        assert_eq!(big.size_label(), "3.0 MB");
    }
}
