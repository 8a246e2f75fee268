//! # Dashboard core - project selection, file intake and uploads
//!
//! Client-side state of the project dashboard: pick a project, stage images
//! and PDFs, and send them to the backend as one multipart request.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ File Intake  │   │   Project    │
//! │ (MIME, dedup │   │   Selector   │
//! │  previews)   │   │              │
//! └──────┬───────┘   └──────┬───────┘
//!        │   staged files   │ selection
//!        ▼                  ▼
//! ┌─────────────────────────────────┐      ┌──────────────────┐
//! │       Upload Orchestrator       │─────▶│ UploadClient     │
//! │  Idle → Uploading → Idle        │◀─────│ (gloo / reqwest) │
//! └────────────────┬────────────────┘      └──────────────────┘
//!                  ▼
//!          View Composition (pure)
//! ```
//!
//! The browser app (`dashboard-frontend`) and the `dashboard` CLI drive the
//! same [`Dashboard`] aggregate with different collaborators.
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Projects and the default catalog
//! - [`intake`] - MIME filter, previews, staged-file set
//! - [`selection`] - Project selector
//! - [`upload`] - Upload state machine and collaborator trait
//! - [`view`] - Render model derivation
//! - [`dashboard`] - Aggregate and event-loop submit driver
//! - [`routing`] - Route table and [`AuthContext`]
//! - [`account`] - Signup and login
//! - [`notice`] - User-facing notifications
//! - [`config`] - Backend URL
//! - `http`, `files` - reqwest collaborator and local files (feature `native`)

// Core modules
pub mod error;
pub mod models;
pub mod notice;

// Client state
pub mod intake;
pub mod selection;
pub mod upload;
pub mod view;
pub mod dashboard;

// Shell
pub mod routing;
pub mod account;
pub mod config;

// Native driver
#[cfg(feature = "native")]
pub mod http;
#[cfg(feature = "native")]
pub mod files;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    AccountError, AccountResult, CliError, CliResult, ConfigError, SelectionError,
    SubmitRejected, UploadError, UploadResult, GENERIC_UPLOAD_FAILURE,
    UNEXPECTED_ACCOUNT_FAILURE,
};

pub use models::{default_catalog, Project, ProjectId, DEFAULT_CATALOG};

pub use notice::{Notice, NoticeLevel};

pub use intake::{
    is_accepted_mime, is_image_mime, CandidateFile, FileIntake, IntakeSummary, NoPreviews,
    PreviewAllocator, StagedFile,
};

pub use selection::ProjectSelector;

pub use upload::{
    PayloadFile, UploadClient, UploadOrchestrator, UploadOutcome, UploadPayload, UploadState,
    FILE_FIELD, PROJECT_ID_FIELD, UPLOAD_PATH, UPLOAD_SUCCESS_MESSAGE,
};

pub use view::{
    compose, DashboardView, DetailPanel, PreviewEntry, PreviewKind, ProjectEntry, UploadButton,
    DETAILS_LINK_LABEL, DETAIL_PLACEHOLDER, UPLOADING_LABEL, UPLOAD_LABEL,
};

pub use dashboard::{submit, Dashboard};

pub use routing::{
    project_details_path, resolve_route, AppView, AuthContext, RouteResolution, DASHBOARD_PATH,
    HOME_PATH, LOGIN_PATH, SIGNUP_PATH,
};

pub use account::{
    log_in, parse_error_message, sign_up, AccountClient, Credentials, LoginOutcome,
    LoginResponse, NewUser, SignupOutcome, AUTH_PATH, USERS_PATH,
};

pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};

#[cfg(feature = "native")]
pub use http::HttpBackend;
#[cfg(feature = "native")]
pub use files::{detect_mime, load_candidates};
