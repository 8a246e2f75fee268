//! View composition: what the dashboard renders, derived from state.
//!
//! [`compose`] has no side effects and keeps nothing between calls; callers
//! recompute it after every state change.

use crate::intake::StagedFile;
use crate::models::{Project, ProjectId};
use crate::routing::project_details_path;
use crate::upload::UploadState;

/// Upload button label when no upload is running.
pub const UPLOAD_LABEL: &str = "Upload Files";

/// Upload button label while uploading.
pub const UPLOADING_LABEL: &str = "Uploading...";

/// Detail panel text when nothing is selected.
pub const DETAIL_PLACEHOLDER: &str = "Select a project to view details";

/// Label of the detail page link.
pub const DETAILS_LINK_LABEL: &str = "View Project Details";

/// One row of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: ProjectId,
    pub name: String,
    pub active: bool,
}

/// Content of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    Project {
        title: String,
        summary: String,
        details_path: String,
    },
    Placeholder(&'static str),
}

/// How a staged file shows up in the preview grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    /// Thumbnail from a preview reference.
    Image { url: String },
    /// Name-only placeholder (PDFs, or images without a preview).
    Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewEntry {
    pub name: String,
    pub kind: PreviewKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadButton {
    pub enabled: bool,
    pub label: &'static str,
}

/// Everything the dashboard page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub projects: Vec<ProjectEntry>,
    pub detail: DetailPanel,
    pub previews: Vec<PreviewEntry>,
    pub upload_button: UploadButton,
}

pub fn compose<H>(
    catalog: &[Project],
    selection: Option<&Project>,
    staged: &[StagedFile<H>],
    state: &UploadState,
) -> DashboardView {
    let projects = catalog
        .iter()
        .map(|p| ProjectEntry {
            id: p.id,
            name: p.name.clone(),
            active: selection.is_some_and(|s| s.id == p.id),
        })
        .collect();

    let detail = match selection {
        Some(project) => DetailPanel::Project {
            title: project.name.clone(),
            summary: project.summary(),
            details_path: project_details_path(project.id),
        },
        None => DetailPanel::Placeholder(DETAIL_PLACEHOLDER),
    };

    let previews = staged
        .iter()
        .map(|f| PreviewEntry {
            name: f.name.clone(),
            kind: match (&f.preview_url, f.is_image()) {
                (Some(url), true) => PreviewKind::Image { url: url.clone() },
                _ => PreviewKind::Named,
            },
        })
        .collect();

    let upload_button = if state.is_busy() {
        UploadButton {
            enabled: false,
            label: UPLOADING_LABEL,
        }
    } else {
        UploadButton {
            enabled: true,
            label: UPLOAD_LABEL,
        }
    };

    DashboardView {
        projects,
        detail,
        previews,
        upload_button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_catalog;

    fn file(name: &str, mime: &str, preview: Option<&str>) -> StagedFile<()> {
        StagedFile {
            handle: (),
            name: name.into(),
            mime_type: mime.into(),
            preview_url: preview.map(String::from),
        }
    }

    #[test]
    fn test_nothing_selected() {
        let view = compose::<()>(&default_catalog(), None, &[], &UploadState::Idle);
        assert!(view.projects.iter().all(|p| !p.active));
        assert_eq!(view.detail, DetailPanel::Placeholder(DETAIL_PLACEHOLDER));
        assert!(view.previews.is_empty());
        assert_eq!(view.upload_button, UploadButton { enabled: true, label: UPLOAD_LABEL });
    }

    #[test]
    fn test_selected_project_is_highlighted_with_details() {
        let catalog = default_catalog();
        let view = compose::<()>(&catalog, Some(&catalog[2]), &[], &UploadState::Idle);

        let active: Vec<_> = view.projects.iter().filter(|p| p.active).map(|p| p.id).collect();
        assert_eq!(active, [ProjectId(3)]);
        assert_eq!(
            view.detail,
            DetailPanel::Project {
                title: "Analytics Project".into(),
                summary: "Details about Analytics Project".into(),
                details_path: "/project-details/3".into(),
            }
        );
    }

    #[test]
    fn test_preview_grid_entries() {
        let staged = [
            file("photo.png", "image/png", Some("blob:1")),
            file("brief.pdf", "application/pdf", None),
            file("raw.jpg", "image/jpeg", None),
        ];
        let view = compose(&[], None, &staged, &UploadState::Idle);
        assert_eq!(
            view.previews,
            vec![
                PreviewEntry {
                    name: "photo.png".into(),
                    kind: PreviewKind::Image { url: "blob:1".into() },
                },
                PreviewEntry { name: "brief.pdf".into(), kind: PreviewKind::Named },
                PreviewEntry { name: "raw.jpg".into(), kind: PreviewKind::Named },
            ]
        );
    }

    #[test]
    fn test_button_follows_upload_state() {
        let busy = compose::<()>(&[], None, &[], &UploadState::Uploading);
        assert_eq!(busy.upload_button, UploadButton { enabled: false, label: UPLOADING_LABEL });

        for state in [UploadState::Idle, UploadState::Success, UploadState::Failed("x".into())] {
            let view = compose::<()>(&[], None, &[], &state);
            assert_eq!(view.upload_button.label, UPLOAD_LABEL);
            assert!(view.upload_button.enabled);
        }
    }
}
