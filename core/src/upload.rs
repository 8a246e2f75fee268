//! Upload orchestration.
//!
//! # State machine
//!
//! ```text
//!                 submit, no project: notice, no request
//!                ┌──────┐
//!                ▼      │
//!            ┌──────────┴┐   submit    ┌───────────┐   submit
//!  start ──▶ │   Idle    │ ──────────▶ │ Uploading │ ──────────▶ rejected (Busy)
//!            └───────────┘             └─────┬─────┘
//!                  ▲                         │ collaborator answers
//!                  │         ┌───────────────┴──────────────┐
//!                  │         ▼                              ▼
//!                  │   ┌─────────┐                 ┌────────────────┐
//!                  └── │ Success │                 │ Failed(reason) │ ──┐
//!                  │   └─────────┘                 └────────────────┘   │
//!                  └────────────────────────────────────────────────────┘
//! ```
//!
//! `Success` and `Failed` are reported through [`UploadOutcome`] and settle
//! back to `Idle` immediately; the orchestrator never stores them.

use serde_json::Value;

use crate::error::{SubmitRejected, UploadError, UploadResult};
use crate::intake::StagedFile;
use crate::models::Project;
use crate::notice::Notice;

/// Endpoint of the upload collaborator.
pub const UPLOAD_PATH: &str = "/api/files";

/// Multipart field carrying each file (repeated).
pub const FILE_FIELD: &str = "file";

/// Multipart text field carrying the project id.
pub const PROJECT_ID_FIELD: &str = "projectId";

/// Notice shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Files uploaded successfully!";

/// Lifecycle of the upload button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Success,
    Failed(String),
}

impl UploadState {
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }
}

/// One file of an [`UploadPayload`].
#[derive(Debug, Clone)]
pub struct PayloadFile<H> {
    pub handle: H,
    pub name: String,
    pub mime_type: String,
}

/// Everything the collaborator needs for one request, captured when the
/// upload starts. Later selection or staging changes do not affect it.
#[derive(Debug, Clone)]
pub struct UploadPayload<H> {
    pub project: Project,
    pub files: Vec<PayloadFile<H>>,
}

impl<H: Clone> UploadPayload<H> {
    pub fn capture(project: &Project, staged: &[StagedFile<H>]) -> Self {
        Self {
            project: project.clone(),
            files: staged
                .iter()
                .map(|f| PayloadFile {
                    handle: f.handle.clone(),
                    name: f.name.clone(),
                    mime_type: f.mime_type.clone(),
                })
                .collect(),
        }
    }
}

impl<H> UploadPayload<H> {
    /// Value of the `projectId` text part.
    pub fn project_id_field(&self) -> String {
        self.project.id.to_string()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }
}

/// Backend operation that stores files for a project.
///
/// Implementations send one multipart request to [`UPLOAD_PATH`] with a
/// [`FILE_FIELD`] part per file and a [`PROJECT_ID_FIELD`] text part. The
/// 2xx JSON body is returned as is.
#[allow(async_fn_in_trait)]
pub trait UploadClient<H> {
    async fn upload_files(&self, payload: &UploadPayload<H>) -> UploadResult<Value>;
}

/// Terminal result of one upload attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Succeeded { response: Value },
    Failed { reason: String, error: UploadError },
}

impl UploadOutcome {
    /// Classify a collaborator answer.
    pub fn from_result(result: UploadResult<Value>) -> Self {
        match result {
            Ok(response) => UploadOutcome::Succeeded { response },
            Err(error) => UploadOutcome::Failed {
                reason: error.reason(),
                error,
            },
        }
    }

    /// The transient state this attempt ended in.
    pub fn terminal_state(&self) -> UploadState {
        match self {
            UploadOutcome::Succeeded { .. } => UploadState::Success,
            UploadOutcome::Failed { reason, .. } => UploadState::Failed(reason.clone()),
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            UploadOutcome::Succeeded { .. } => Notice::success(UPLOAD_SUCCESS_MESSAGE),
            UploadOutcome::Failed { reason, .. } => Notice::error(reason.clone()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Succeeded { .. })
    }
}

impl SubmitRejected {
    /// Notice for the user. A busy rejection is silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitRejected::NoProjectSelected => Some(Notice::warning(self.to_string())),
            SubmitRejected::Busy => None,
        }
    }
}

/// Owner of [`UploadState`].
///
/// An upload is split in two synchronous halves, [`begin`](Self::begin) and
/// [`finish`](Self::finish), so an event loop can release its state between
/// them while the request is in flight. [`submit`](Self::submit) runs both
/// around a collaborator call.
#[derive(Debug, Default)]
pub struct UploadOrchestrator {
    state: UploadState,
}

impl UploadOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Check preconditions and move to `Uploading`.
    ///
    /// The busy check comes first: a submit during an upload must have no
    /// effect at all, not even a validation notice.
    pub fn begin<H: Clone>(
        &mut self,
        selection: Option<&Project>,
        staged: &[StagedFile<H>],
    ) -> Result<UploadPayload<H>, SubmitRejected> {
        if self.is_busy() {
            log::warn!("Upload already in progress, ignoring submit");
            return Err(SubmitRejected::Busy);
        }

        let project = selection.ok_or(SubmitRejected::NoProjectSelected)?;

        if staged.is_empty() {
            log::warn!("Submitting an empty file set for project {}", project.id);
        }

        self.state = UploadState::Uploading;
        log::info!(
            "📤 Uploading {} file(s) to project {} ({})",
            staged.len(),
            project.id,
            project.name
        );

        Ok(UploadPayload::capture(project, staged))
    }

    /// Record the collaborator's answer and settle back to `Idle`.
    pub fn finish(&mut self, result: UploadResult<Value>) -> UploadOutcome {
        if !self.is_busy() {
            log::warn!("Upload completion received while not uploading");
        }

        let outcome = UploadOutcome::from_result(result);
        match &outcome {
            UploadOutcome::Succeeded { response } => {
                log::info!("✅ Upload succeeded: {}", response)
            }
            UploadOutcome::Failed { error, .. } => log::error!("❌ Upload failed: {}", error),
        }

        self.state = UploadState::Idle;
        outcome
    }

    /// Run a whole upload against `client`.
    pub async fn submit<H, C>(
        &mut self,
        selection: Option<&Project>,
        staged: &[StagedFile<H>],
        client: &C,
    ) -> Result<UploadOutcome, SubmitRejected>
    where
        H: Clone,
        C: UploadClient<H>,
    {
        let payload = self.begin(selection, staged)?;
        let result = client.upload_files(&payload).await;
        Ok(self.finish(result))
    }
}
