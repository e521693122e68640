use serde::{Deserialize, Serialize};

use super::Task;

/// A unit of work ownership containing zero or more tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier
    pub id: i64,
    /// Project name
    pub name: String,
    /// Project description
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit completion flag
    #[serde(default)]
    pub completed: bool,
    /// Start date as sent by the API (opaque text)
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date as sent by the API (opaque text); presence marks completion
    #[serde(default)]
    pub end_date: Option<String>,
    /// Tasks owned by this project. The list endpoint returns projects
    /// without tasks; the loader fills this in.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Whether the project counts as completed: either the explicit flag is
    /// set or an end date is present.
    pub fn is_completed(&self) -> bool {
        self.completed || self.end_date.is_some()
    }
}
