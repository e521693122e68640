//! Immutable dataset snapshot.
//!
//! A [`Snapshot`] holds one fetch's worth of projects (with their tasks) and
//! never changes afterwards. Aggregation, search, statistics, and the
//! assistant are all pure functions over a snapshot; a re-fetch produces a
//! whole new snapshot instead of mutating the old one in place.

use crate::entities::{FlatTask, Project};

/// One fetch's worth of projects and their tasks.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    projects: Vec<Project>,
}

impl Snapshot {
    /// Wrap an already-loaded project collection.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// All projects in fetch order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by identifier.
    pub fn project(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Narrow the snapshot to a single project, or keep the full set when
    /// no identifier is given. An unknown identifier narrows to nothing.
    pub fn scoped(&self, project_id: Option<i64>) -> Snapshot {
        match project_id {
            None => self.clone(),
            Some(id) => Snapshot::new(self.project(id).cloned().into_iter().collect()),
        }
    }

    /// Flatten every task out of its owning project, annotated with the
    /// owner's identity. Order follows project order, then task order
    /// within each project.
    pub fn flatten_tasks(&self) -> Vec<FlatTask> {
        self.projects
            .iter()
            .flat_map(|p| {
                p.tasks.iter().map(|t| FlatTask {
                    project_id: p.id,
                    project_name: p.name.clone(),
                    task: t.clone(),
                })
            })
            .collect()
    }

    /// Whether the snapshot holds no projects at all.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of projects in the snapshot.
    pub fn len(&self) -> usize {
        self.projects.len()
    }
}
