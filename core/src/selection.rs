//! Project selector: the catalog and the single selection slot.

use crate::error::SelectionError;
use crate::models::{default_catalog, Project, ProjectId};

/// Catalog of selectable projects plus the current selection.
#[derive(Debug, Clone)]
pub struct ProjectSelector {
    catalog: Vec<Project>,
    selected: Option<Project>,
}

impl ProjectSelector {
    pub fn new(catalog: Vec<Project>) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &[Project] {
        &self.catalog
    }

    /// Make `project` the current selection.
    pub fn select(&mut self, project: Project) {
        log::debug!("Selected project {} ({})", project.id, project.name);
        self.selected = Some(project);
    }

    /// Select the catalog entry with `id`.
    pub fn select_by_id(&mut self, id: ProjectId) -> Result<&Project, SelectionError> {
        let project = self
            .catalog
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(SelectionError::UnknownProject(id))?;
        log::debug!("Selected project {} ({})", project.id, project.name);
        Ok(&*self.selected.insert(project))
    }

    pub fn current(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: ProjectId) -> bool {
        self.selected.as_ref().is_some_and(|p| p.id == id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Default for ProjectSelector {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}
