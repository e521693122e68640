use serde::{Deserialize, Serialize};

use super::Priority;

/// Distinguished status value marking a task as done.
pub const STATUS_COMPLETED: &str = "Completed";

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the owning project's collection
    pub id: i64,
    /// Task title
    pub title: String,
    /// Task description
    #[serde(default)]
    pub description: Option<String>,
    /// Raw priority text ("Urgent", "High", ...)
    #[serde(default)]
    pub priority: Option<String>,
    /// Free-form status text; "Completed" is distinguished
    #[serde(default)]
    pub status: Option<String>,
    /// Explicit completion flag
    #[serde(default)]
    pub completed: bool,
    /// Start date as sent by the API (opaque text)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Due date as sent by the API (opaque text)
    #[serde(default)]
    pub due_date: Option<String>,
    /// Comma-separated tags (opaque text)
    #[serde(default)]
    pub tags: Option<String>,
}

impl Task {
    /// Whether the task counts as completed: either the explicit flag is
    /// set or the status equals [`STATUS_COMPLETED`].
    pub fn is_completed(&self) -> bool {
        self.completed || self.status.as_deref() == Some(STATUS_COMPLETED)
    }

    /// The task's normalized priority, if the raw text matches a
    /// [`Priority`] member.
    pub fn priority_level(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(Priority::parse)
    }
}

/// A task annotated with its owning project's identity.
///
/// Denormalization for grouping and display only; ownership stays with the
/// project.
#[derive(Debug, Clone, Serialize)]
pub struct FlatTask {
    /// Owning project's identifier
    pub project_id: i64,
    /// Owning project's name
    pub project_name: String,
    /// The task itself
    #[serde(flatten)]
    pub task: Task,
}
