//! Domain models: projects and the default catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(id: u32) -> Self {
        ProjectId(id)
    }
}

/// A selectable project.
///
/// Two projects are the same project when their ids match, whatever their
/// names say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Blurb shown in the detail panel.
    pub fn summary(&self) -> String {
        format!("Details about {}", self.name)
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

/// Catalog shipped with the client.
pub static DEFAULT_CATALOG: Lazy<Vec<Project>> = Lazy::new(|| {
    [
        (1, "Design Initiative"),
        (2, "Development Task"),
        (3, "Analytics Project"),
        (4, "Innovation Hub"),
        (5, "Research Study"),
        (6, "Solutions Series"),
        (7, "Strategy Plan"),
        (8, "Insights Report"),
        (9, "Expansion Effort"),
    ]
    .into_iter()
    .map(|(id, name)| Project::new(id, name))
    .collect()
});

/// Owned copy of [`DEFAULT_CATALOG`].
pub fn default_catalog() -> Vec<Project> {
    DEFAULT_CATALOG.clone()
}
