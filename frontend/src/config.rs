//! Application configuration.
//!
//! Centralized configuration for the dashboard frontend. These are compiled
//! in; a deployment points `BACKEND_URL` at its API host.

/// Backend API base URL.
pub const BACKEND_URL: &str = dashboard_core::DEFAULT_API_URL;

/// localStorage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Maximum notices kept on screen.
pub const MAX_NOTICE_ENTRIES: usize = 20;

/// Notices disappear after this many milliseconds.
pub const NOTICE_DISMISS_MS: u32 = 6_000;

/// Edge length of preview thumbnails, in pixels.
pub const THUMBNAIL_SIZE: u32 = 100;

/// `accept` attribute of the file picker.
pub const ACCEPTED_FILE_TYPES: &str = "image/*,application/pdf";
