//! The dashboard page: project selection, staging and upload.
//!
//! The [`Dashboard`] aggregate sits in a `StoredValue` owned by this page.
//! Event handlers mutate it synchronously and then republish the render
//! model; the network call runs between `begin_upload` and
//! `complete_upload` without holding the aggregate. Unmounting the page
//! drops the aggregate, which revokes every preview URL.

use dashboard_core::{
    default_catalog, CandidateFile, Dashboard, Notice, PreviewAllocator, ProjectId, UploadClient,
    UploadOutcome, UploadResult,
};
use leptos::*;
use serde_json::Value;
use web_sys::File;

use crate::components::{push_notices, Notices, ProjectInfo, ProjectList, UploadSection};
use crate::services::{BlobPreviews, GlooBackend};
use crate::BACKEND_URL;

type BrowserDashboard = Dashboard<File, BlobPreviews>;

/// Apply a finished upload and return the notices it produced.
///
/// The page may have been unmounted while the request ran; its aggregate
/// is gone then, but the outcome is still reported.
pub fn settle_upload<H, P>(
    state: StoredValue<Dashboard<H, P>>,
    result: UploadResult<Value>,
) -> Vec<Notice>
where
    H: 'static,
    P: PreviewAllocator<H> + 'static,
{
    let mut pending = Some(result);
    let settled = state.try_update_value(|d| {
        if let Some(result) = pending.take() {
            d.complete_upload(result);
        }
        d.take_notices()
    });

    match (settled, pending) {
        (Some(notices), _) => notices,
        (None, Some(result)) => {
            log::info!("Upload finished after the dashboard was closed");
            vec![UploadOutcome::from_result(result).notice()]
        }
        (None, None) => Vec::new(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let notices = expect_context::<Notices>();
    let state = store_value(BrowserDashboard::new(
        default_catalog(),
        BlobPreviews::default(),
    ));
    let (model, set_model) = create_signal(state.with_value(|d| d.view()));

    // Republish the render model and flush queued notices
    let refresh = move || {
        let queued = state
            .try_update_value(|d| d.take_notices())
            .unwrap_or_default();
        if let Some(view) = state.try_with_value(|d| d.view()) {
            let _ = set_model.try_set(view);
        }
        push_notices(notices, queued);
    };

    let on_select = move |id: ProjectId| {
        state.update_value(|d| {
            if let Err(e) = d.select_by_id(id) {
                log::warn!("{}", e);
            }
        });
        refresh();
    };

    let on_files = move |candidates: Vec<CandidateFile<File>>| {
        state.update_value(|d| {
            let summary = d.stage(candidates);
            log::debug!("📎 {} file(s) staged", summary.staged_count());
        });
        refresh();
    };

    let on_remove = move |name: String| {
        state.update_value(|d| {
            d.remove_file(&name);
        });
        refresh();
    };

    let on_upload = move |_: ()| {
        let begun = state.try_update_value(|d| d.begin_upload());
        refresh();

        let Some(Ok(payload)) = begun else {
            return;
        };

        spawn_local(async move {
            let backend = GlooBackend::from_url(BACKEND_URL);
            let result = backend.upload_files(&payload).await;
            push_notices(notices, settle_upload(state, result));
            refresh();
        });
    };

    view! {
        <div class="dashboard">
            <ProjectList
                projects=Signal::derive(move || model.with(|m| m.projects.clone()))
                on_select=on_select
            />
            <div class="dashboard-main">
                <ProjectInfo detail=Signal::derive(move || model.with(|m| m.detail.clone()))/>
                <UploadSection
                    previews=Signal::derive(move || model.with(|m| m.previews.clone()))
                    button=Signal::derive(move || model.with(|m| m.upload_button))
                    on_files=on_files
                    on_remove=on_remove
                    on_upload=on_upload
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{NoPreviews, UploadError, UPLOAD_SUCCESS_MESSAGE};

    type TestDashboard = Dashboard<&'static str, NoPreviews>;

    fn start_upload() -> StoredValue<TestDashboard> {
        let state = store_value(TestDashboard::new(default_catalog(), NoPreviews));
        state.update_value(|d| {
            d.select_by_id(ProjectId(1)).unwrap();
            d.stage([CandidateFile::new("bytes", "a.png", "image/png")]);
            d.begin_upload().unwrap();
        });
        state
    }

    #[test]
    fn test_settle_on_open_page_clears_staging() {
        let runtime = create_runtime();
        let state = start_upload();

        let notices = settle_upload(state, Ok(serde_json::json!({ "stored": 1 })));

        assert_eq!(notices, vec![Notice::success(UPLOAD_SUCCESS_MESSAGE)]);
        assert!(state.with_value(|d| d.staged().is_empty()));
        runtime.dispose();
    }

    #[test]
    fn test_upload_finishing_after_page_closed_still_notifies() {
        let runtime = create_runtime();
        let state = start_upload();
        state.dispose();

        let notices = settle_upload(
            state,
            Err(UploadError::Server {
                status: 500,
                message: Some("disk full".into()),
            }),
        );

        assert_eq!(notices, vec![Notice::error("disk full")]);
        runtime.dispose();
    }
}
