//! Error types for the dashboard client.
//!
//! - [`SelectionError`] - Project catalog lookups
//! - [`SubmitRejected`] - Upload attempts refused before any network call
//! - [`UploadError`] - Failures reported by the upload collaborator
//! - [`AccountError`] - Signup and login failures
//! - [`ConfigError`] - Invalid client configuration
//! - [`CliError`] - Top-level errors of the `dashboard` binary
//!
//! Conversions into [`CliError`] are provided via `From`, so `?` works across
//! the layers of the native driver.

use thiserror::Error;

use crate::models::ProjectId;

/// Failure text shown when the upload failed without a server message.
pub const GENERIC_UPLOAD_FAILURE: &str = "Error uploading files.";

/// Failure text shown when account requests fail outside the 400..=500 range.
pub const UNEXPECTED_ACCOUNT_FAILURE: &str = "An unexpected error occurred.";

// =============================================================================
// Selection Errors
// =============================================================================

/// Errors from the project selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The id is not part of the catalog.
    #[error("Unknown project: {0}")]
    UnknownProject(ProjectId),
}

// =============================================================================
// Submit Preconditions
// =============================================================================

/// Reasons a submit is refused locally. None of these reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// No project is selected.
    #[error("Please select a project first")]
    NoProjectSelected,

    /// Another upload is still in flight.
    #[error("An upload is already in progress")]
    Busy,
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors returned by an upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The request never reached the server, or no response came back.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a 4xx/5xx status.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// A file could not be turned into a multipart part.
    #[error("Could not read file '{name}': {message}")]
    File { name: String, message: String },
}

impl UploadError {
    /// Text surfaced to the user for this failure.
    ///
    /// Server messages are shown verbatim; everything else collapses to
    /// [`GENERIC_UPLOAD_FAILURE`].
    pub fn reason(&self) -> String {
        match self {
            UploadError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_UPLOAD_FAILURE.to_string(),
        }
    }
}

// =============================================================================
// Account Errors
// =============================================================================

/// Errors from account creation and login.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Form data failed local validation.
    #[error("{0}")]
    Invalid(String),

    /// The server rejected the request with a message (status 400..=500).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Transport failure or a response outside the known error range.
    #[error("An unexpected error occurred.")]
    Unexpected(String),
}

impl AccountError {
    /// Classify an HTTP error response.
    pub fn from_response(status: u16, message: Option<String>) -> Self {
        match message {
            Some(message) if (400..=500).contains(&status) => {
                AccountError::Rejected { status, message }
            }
            _ => AccountError::Unexpected(format!("status {}", status)),
        }
    }

    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The API base URL is unusable.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

// =============================================================================
// CLI Errors (top-level)
// =============================================================================

/// Top-level errors of the `dashboard` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("{0}")]
    Rejected(#[from] SubmitRejected),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    /// A form-level message already worded for the user.
    #[error("{0}")]
    Form(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload collaborators.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for account collaborators.
pub type AccountResult<T> = Result<T, AccountError>;

/// Result type for the CLI.
pub type CliResult<T> = Result<T, CliError>;
