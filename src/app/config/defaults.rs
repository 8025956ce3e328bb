// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for defaults used across the application.

// ==========================================================================
// Generation Defaults
// ==========================================================================

/// Default base URL of the generative image API.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model used for image transformation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Default HTTP timeout for the transform request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

/// Minimum accepted request timeout.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum accepted request timeout.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Style Catalog Defaults
// ==========================================================================

/// Simulated network delay for the bundled style source (in milliseconds).
pub const BUNDLED_STYLES_DELAY_MS: u64 = 1000;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Preview refresh interval while the camera is open (in milliseconds).
pub const CAMERA_PREVIEW_INTERVAL_MS: u64 = 100;

/// JPEG quality used when encoding a captured frame.
pub const CAPTURE_JPEG_QUALITY: u8 = 90;
