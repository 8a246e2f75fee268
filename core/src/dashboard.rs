//! The dashboard aggregate: selector, intake and orchestrator behind one
//! value, plus the event-loop driver for submits.

use std::cell::RefCell;

use serde_json::Value;

use crate::error::{SelectionError, SubmitRejected, UploadResult};
use crate::intake::{CandidateFile, FileIntake, IntakeSummary, PreviewAllocator, StagedFile};
use crate::models::{Project, ProjectId};
use crate::notice::Notice;
use crate::selection::ProjectSelector;
use crate::upload::{UploadClient, UploadOrchestrator, UploadOutcome, UploadPayload, UploadState};
use crate::view::{compose, DashboardView};

/// Client state of the dashboard page.
///
/// Each component mutates only its own part; [`Dashboard::view`] reads all
/// of them. Notices produced along the way queue up until
/// [`Dashboard::take_notices`] drains them.
pub struct Dashboard<H, P: PreviewAllocator<H>> {
    selector: ProjectSelector,
    intake: FileIntake<H, P>,
    uploads: UploadOrchestrator,
    notices: Vec<Notice>,
}

impl<H, P: PreviewAllocator<H>> Dashboard<H, P> {
    pub fn new(catalog: Vec<Project>, previews: P) -> Self {
        Self {
            selector: ProjectSelector::new(catalog),
            intake: FileIntake::new(previews),
            uploads: UploadOrchestrator::new(),
            notices: Vec::new(),
        }
    }

    pub fn selector(&self) -> &ProjectSelector {
        &self.selector
    }

    pub fn intake(&self) -> &FileIntake<H, P> {
        &self.intake
    }

    pub fn staged(&self) -> &[StagedFile<H>] {
        self.intake.staged()
    }

    pub fn upload_state(&self) -> &UploadState {
        self.uploads.state()
    }

    /// Select a project. Allowed during an upload; the request in flight
    /// keeps the project it captured.
    pub fn select(&mut self, project: Project) {
        self.selector.select(project);
    }

    pub fn select_by_id(&mut self, id: ProjectId) -> Result<&Project, SelectionError> {
        self.selector.select_by_id(id)
    }

    /// Handle a drop or picker event.
    pub fn stage(
        &mut self,
        candidates: impl IntoIterator<Item = CandidateFile<H>>,
    ) -> IntakeSummary {
        let summary = self.intake.accept(candidates);
        if !summary.rejected.is_empty() {
            log::info!("Ignored unsupported files: {}", summary.rejected.join(", "));
        }
        summary
    }

    pub fn remove_file(&mut self, name: &str) -> bool {
        self.intake.remove(name).is_some()
    }

    /// First half of a submit. Queues the validation notice on rejection.
    pub fn begin_upload(&mut self) -> Result<UploadPayload<H>, SubmitRejected>
    where
        H: Clone,
    {
        let result = self
            .uploads
            .begin(self.selector.current(), self.intake.staged());

        if let Err(rejected) = &result {
            self.notices.extend(rejected.notice());
        }
        result
    }

    /// Second half of a submit: clear the staged set on success, keep it on
    /// failure, queue the outcome notice.
    ///
    /// Success clears the whole set, including files staged while the
    /// request was in flight.
    pub fn complete_upload(&mut self, result: UploadResult<Value>) -> UploadOutcome {
        let outcome = self.uploads.finish(result);
        if outcome.is_success() {
            self.intake.clear();
        }
        self.notices.push(outcome.notice());
        outcome
    }

    pub fn view(&self) -> DashboardView {
        compose(
            self.selector.catalog(),
            self.selector.current(),
            self.intake.staged(),
            self.uploads.state(),
        )
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

/// Submit from an event handler.
///
/// The dashboard is borrowed only for the synchronous halves, never across
/// the collaborator call, so other events (selection, drops, a second click)
/// can be handled while the request is in flight.
pub async fn submit<H, P, C>(
    dashboard: &RefCell<Dashboard<H, P>>,
    client: &C,
) -> Result<UploadOutcome, SubmitRejected>
where
    H: Clone,
    P: PreviewAllocator<H>,
    C: UploadClient<H>,
{
    let payload = dashboard.borrow_mut().begin_upload()?;
    let result = client.upload_files(&payload).await;
    Ok(dashboard.borrow_mut().complete_upload(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use crate::intake::tests::{image, pdf, TrackingPreviews};
    use crate::models::default_catalog;
    use crate::notice::NoticeLevel;
    use crate::upload::tests::ScriptedClient;
    use crate::view::{UPLOADING_LABEL, UPLOAD_LABEL};
    use futures::channel::oneshot;
    use std::cell::Cell;

    type TestDashboard = Dashboard<&'static str, TrackingPreviews>;

    fn dashboard() -> (TestDashboard, TrackingPreviews) {
        let previews = TrackingPreviews::default();
        (Dashboard::new(default_catalog(), previews.clone()), previews)
    }

    /// Collaborator that parks until the test releases it.
    struct GatedClient {
        gate: RefCell<Option<oneshot::Receiver<UploadResult<Value>>>>,
        calls: Cell<usize>,
    }

    impl UploadClient<&'static str> for GatedClient {
        async fn upload_files(
            &self,
            _payload: &UploadPayload<&'static str>,
        ) -> UploadResult<Value> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(UploadError::Transport("dropped".into()))),
                None => Ok(Value::Null),
            }
        }
    }

    #[tokio::test]
    async fn test_scenario_successful_upload() {
        let (mut board, previews) = dashboard();
        board.select_by_id(ProjectId(3)).unwrap();
        board.stage([image("photo.png", "png-bytes")]);
        assert_eq!(previews.live.borrow().len(), 1);

        let board = RefCell::new(board);
        let client = ScriptedClient::ok();
        let outcome = submit(&board, &client).await.unwrap();

        let mut board = board.into_inner();
        assert_eq!(outcome.terminal_state(), UploadState::Success);
        assert_eq!(board.upload_state(), &UploadState::Idle);
        assert!(board.staged().is_empty());
        assert!(previews.live.borrow().is_empty());
        assert_eq!(board.take_notices(), vec![Notice::success("Files uploaded successfully!")]);
        assert_eq!(client.calls.get(), 1);
        assert_eq!(client.seen.borrow()[0].0, "3");
    }

    #[tokio::test]
    async fn test_scenario_no_project_selected() {
        let (mut board, _) = dashboard();
        board.stage([image("photo.png", "png-bytes")]);

        let board = RefCell::new(board);
        let client = ScriptedClient::ok();
        let err = submit(&board, &client).await.unwrap_err();

        let mut board = board.into_inner();
        assert_eq!(err, SubmitRejected::NoProjectSelected);
        assert_eq!(client.calls.get(), 0);
        assert_eq!(board.upload_state(), &UploadState::Idle);
        assert_eq!(board.staged().len(), 1);

        let notices = board.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Please select a project first");
        assert_eq!(notices[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_scenario_server_rejects_file() {
        let (mut board, previews) = dashboard();
        board.select_by_id(ProjectId(1)).unwrap();
        board.stage([image("huge.png", "lots-of-bytes")]);

        let board = RefCell::new(board);
        let client = ScriptedClient::answering(Err(UploadError::Server {
            status: 413,
            message: Some("file too large".into()),
        }));
        let outcome = submit(&board, &client).await.unwrap();

        let mut board = board.into_inner();
        assert_eq!(outcome.terminal_state(), UploadState::Failed("file too large".into()));
        assert_eq!(board.upload_state(), &UploadState::Idle);
        assert_eq!(board.staged().len(), 1);
        assert_eq!(board.staged()[0].name, "huge.png");
        assert_eq!(previews.live.borrow().len(), 1);
        assert_eq!(board.take_notices(), vec![Notice::error("file too large")]);
    }

    #[tokio::test]
    async fn test_failure_preserves_staging_exactly() {
        let (mut board, _) = dashboard();
        board.select_by_id(ProjectId(2)).unwrap();
        board.stage([image("a.png", "a"), pdf("b.pdf"), image("c.png", "c")]);
        let before: Vec<_> = board
            .staged()
            .iter()
            .map(|f| (f.name.clone(), f.handle, f.preview_url.clone()))
            .collect();

        let board = RefCell::new(board);
        let client = ScriptedClient::answering(Err(UploadError::Transport("offline".into())));
        let outcome = submit(&board, &client).await.unwrap();
        assert_eq!(outcome.notice(), Notice::error("Error uploading files."));

        let after: Vec<_> = board
            .borrow()
            .staged()
            .iter()
            .map(|f| (f.name.clone(), f.handle, f.preview_url.clone()))
            .collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_second_submit_while_uploading_has_no_effect() {
        let (mut board, _) = dashboard();
        board.select_by_id(ProjectId(3)).unwrap();
        board.stage([image("photo.png", "png-bytes")]);
        let board = RefCell::new(board);

        let (tx, rx) = oneshot::channel();
        let client = GatedClient {
            gate: RefCell::new(Some(rx)),
            calls: Cell::new(0),
        };

        let first = submit(&board, &client);
        let second = async {
            // Runs while the first request is parked on the gate
            assert_eq!(board.borrow().upload_state(), &UploadState::Uploading);
            assert_eq!(board.borrow().view().upload_button.label, UPLOADING_LABEL);
            let rejected = submit(&board, &client).await;
            assert_eq!(client.calls.get(), 1);
            assert!(board.borrow_mut().take_notices().is_empty());
            tx.send(Ok(Value::Null)).unwrap();
            rejected
        };

        let (first, second) = futures::join!(first, second);
        assert!(first.unwrap().is_success());
        assert_eq!(second.unwrap_err(), SubmitRejected::Busy);
        assert_eq!(client.calls.get(), 1);
        assert_eq!(board.borrow().view().upload_button.label, UPLOAD_LABEL);
    }

    #[tokio::test]
    async fn test_reselecting_during_upload_keeps_captured_target() {
        let (mut board, _) = dashboard();
        board.select_by_id(ProjectId(3)).unwrap();
        board.stage([pdf("plan.pdf")]);

        let payload = board.begin_upload().unwrap();
        board.select_by_id(ProjectId(7)).unwrap();
        assert_eq!(payload.project_id_field(), "3");
        assert!(board.selector().is_selected(ProjectId(7)));

        board.complete_upload(Ok(Value::Null));
        assert_eq!(board.upload_state(), &UploadState::Idle);
    }

    #[test]
    fn test_success_clears_files_staged_mid_upload() {
        let (mut board, previews) = dashboard();
        board.select_by_id(ProjectId(2)).unwrap();
        board.stage([image("a.png", "a")]);

        let payload = board.begin_upload().unwrap();
        board.stage([image("late.png", "late")]);
        assert_eq!(payload.file_names().collect::<Vec<_>>(), ["a.png"]);

        board.complete_upload(Ok(Value::Null));
        assert!(board.staged().is_empty());
        assert!(previews.live.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_outstanding_previews() {
        let (mut board, previews) = dashboard();
        board.stage([image("a.png", "a"), image("b.png", "b")]);
        assert_eq!(previews.live.borrow().len(), 2);
        drop(board);
        assert!(previews.live.borrow().is_empty());
    }

    #[test]
    fn test_text_files_do_not_reach_the_view() {
        let (mut board, _) = dashboard();
        let summary = board.stage([CandidateFile::new("txt", "readme.txt", "text/plain")]);
        assert_eq!(summary.rejected.len(), 1);
        assert!(board.view().previews.is_empty());
    }
}
