//! Summary statistics over a project collection.

use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregate::{aggregate_by, ChartSeries, GroupKey};
use crate::entities::Project;

/// Derived totals and distributions for a project scope (one project or
/// all of them).
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Number of projects in scope
    pub total_projects: usize,
    /// Projects completed by flag or end date
    pub completed_projects: usize,
    /// Tasks across all projects in scope
    pub total_tasks: usize,
    /// Tasks completed by flag or "Completed" status
    pub completed_tasks: usize,
    /// Completed-project percentage; 0 when there are no projects
    pub completion_rate: f64,
    /// Priority distribution (unprioritized tasks excluded)
    pub priority_counts: IndexMap<String, usize>,
    /// Status distribution ("Unknown" catch-all included)
    pub status_counts: IndexMap<String, usize>,
}

impl DashboardStats {
    /// Compute statistics over the given projects.
    pub fn compute(projects: &[Project]) -> Self {
        let total_projects = projects.len();
        let completed_projects = projects.iter().filter(|p| p.is_completed()).count();
        let tasks: Vec<_> = projects.iter().flat_map(|p| p.tasks.iter()).collect();
        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
        let completion_rate = if total_projects > 0 {
            (completed_projects as f64 / total_projects as f64) * 100.0
        } else {
            0.0
        };

        Self {
            total_projects,
            completed_projects,
            total_tasks,
            completed_tasks,
            completion_rate,
            priority_counts: aggregate_by(tasks.iter().copied(), GroupKey::Priority),
            status_counts: aggregate_by(tasks.iter().copied(), GroupKey::Status),
        }
    }

    /// Chart series for the status distribution.
    pub fn status_chart(&self) -> ChartSeries {
        ChartSeries::from_counts("Tasks by Status", &self.status_counts)
    }

    /// Chart series for the priority distribution.
    pub fn priority_chart(&self) -> ChartSeries {
        ChartSeries::from_counts("Tasks by Priority", &self.priority_counts)
    }
}
