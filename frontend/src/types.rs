//! Frontend-only types.
//!
//! Domain types live in `dashboard_core`; this module holds what only the
//! browser needs.
//!
//! - **Notice Types** - Timestamped notices on screen
//! - **Error Types** - Session storage failures

use dashboard_core::Notice;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Notice Types
// =============================================================================

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// A notice as displayed in the notices panel.
#[derive(Clone, Debug, PartialEq)]
pub struct NoticeEntry {
    /// Key for list rendering and dismissal
    pub id: u64,
    pub notice: Notice,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl NoticeEntry {
    pub fn new(notice: Notice) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            notice,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Browser-side failures that are not part of the upload state machine.
#[derive(Clone, Debug)]
pub enum AppError {
    /// localStorage unavailable or refused the write.
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
