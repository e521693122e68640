//! Rule-based assistant over the in-memory dataset.
//!
//! Not NLP: the input is lowered and tested against fixed keyword sets,
//! first matching rule wins. Replies are structured so the presentation
//! layer decides how to render them.

use indexmap::IndexMap;

use crate::aggregate::{aggregate_by, ChartSeries, GroupKey};
use crate::entities::FlatTask;
use crate::snapshot::Snapshot;
use crate::stats::DashboardStats;

/// A structured assistant reply.
#[derive(Debug, Clone)]
pub enum AssistantReply {
    /// Plain message (prompts, hints, "no data" fallbacks).
    Text(String),
    /// A chart with an introductory line.
    Chart { intro: String, series: ChartSeries },
    /// Priority label to count, first-observation order.
    PriorityCounts(IndexMap<String, usize>),
    /// All projects with their task counts.
    ProjectList(Vec<ProjectLine>),
    /// All tasks with owning-project annotation.
    TaskList(Vec<FlatTask>),
    /// Totals summary.
    Stats {
        total_projects: usize,
        total_tasks: usize,
        completed_tasks: usize,
    },
    /// Default help with example questions.
    Help,
}

/// One row of the assistant's project listing.
#[derive(Debug, Clone)]
pub struct ProjectLine {
    pub name: String,
    pub description: Option<String>,
    pub task_count: usize,
}

fn mentions_any(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input.contains(k))
}

/// Answer a question about the snapshot.
pub fn answer(input: &str, snapshot: &Snapshot) -> AssistantReply {
    if input.trim().is_empty() {
        return AssistantReply::Text("Please enter a message.".to_string());
    }
    let q = input.to_lowercase();
    let flatten = || snapshot.flatten_tasks();

    // Charts only when explicitly asked for.
    if mentions_any(&q, &["chart", "graph", "visual", "bar", "pie"]) {
        if q.contains("priority") {
            let tasks = flatten();
            let counts = aggregate_by(tasks.iter().map(|f| &f.task), GroupKey::Priority);
            return AssistantReply::Chart {
                intro: "Here is a bar chart of task priorities:".to_string(),
                series: ChartSeries::from_counts("Tasks by Priority", &counts),
            };
        }
        if q.contains("status") {
            let tasks = flatten();
            let counts = aggregate_by(tasks.iter().map(|f| &f.task), GroupKey::Status);
            return AssistantReply::Chart {
                intro: "Here is a pie chart of task statuses:".to_string(),
                series: ChartSeries::from_counts("Tasks by Status", &counts),
            };
        }
        return AssistantReply::Text(
            "I can show charts for priorities or task statuses. Try: \"Show me a priority chart\" \
             or \"Show me a status pie chart\"."
                .to_string(),
        );
    }

    if mentions_any(&q, &["priority", "priorities"]) {
        let tasks = flatten();
        let counts = aggregate_by(tasks.iter().map(|f| &f.task), GroupKey::Priority);
        if counts.is_empty() {
            return AssistantReply::Text("No priority data found.".to_string());
        }
        return AssistantReply::PriorityCounts(counts);
    }

    if mentions_any(&q, &["project", "projects"]) {
        if snapshot.is_empty() {
            return AssistantReply::Text("No projects found.".to_string());
        }
        return AssistantReply::ProjectList(
            snapshot
                .projects()
                .iter()
                .map(|p| ProjectLine {
                    name: p.name.clone(),
                    description: p.description.clone(),
                    task_count: p.tasks.len(),
                })
                .collect(),
        );
    }

    if mentions_any(&q, &["task", "tasks"]) {
        let tasks = flatten();
        if tasks.is_empty() {
            return AssistantReply::Text("No tasks found.".to_string());
        }
        return AssistantReply::TaskList(tasks);
    }

    if mentions_any(&q, &["stats", "statistic", "summary", "overview"]) {
        let stats = DashboardStats::compute(snapshot.projects());
        return AssistantReply::Stats {
            total_projects: stats.total_projects,
            total_tasks: stats.total_tasks,
            completed_tasks: stats.completed_tasks,
        };
    }

    AssistantReply::Help
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Project, Task};

    fn fixture() -> Snapshot {
        Snapshot::new(vec![Project {
            id: 1,
            name: "Alpha".to_string(),
            description: Some("first project".to_string()),
            completed: false,
            start_date: None,
            end_date: None,
            tasks: vec![Task {
                id: 10,
                title: "Design API".to_string(),
                description: None,
                priority: Some("High".to_string()),
                status: Some("Completed".to_string()),
                completed: false,
                start_date: None,
                due_date: None,
                tags: None,
            }],
        }])
    }

    #[test]
    fn blank_input_prompts_for_a_message() {
        assert!(matches!(
            answer("   ", &fixture()),
            AssistantReply::Text(msg) if msg == "Please enter a message."
        ));
    }

    #[test]
    fn chart_requests_pick_the_right_series() {
        match answer("show me a priority chart", &fixture()) {
            AssistantReply::Chart { series, .. } => {
                assert_eq!(series.labels, vec!["High"]);
            }
            other => panic!("expected chart, got {other:?}"),
        }
        match answer("status pie please", &fixture()) {
            AssistantReply::Chart { series, .. } => {
                assert_eq!(series.labels, vec!["Completed"]);
            }
            other => panic!("expected chart, got {other:?}"),
        }
        // Chart keyword without a known series: a hint, not a chart.
        assert!(matches!(
            answer("draw me a graph", &fixture()),
            AssistantReply::Text(_)
        ));
    }

    #[test]
    fn priority_question_without_chart_keyword_lists_counts() {
        match answer("what are the priorities?", &fixture()) {
            AssistantReply::PriorityCounts(counts) => assert_eq!(counts["High"], 1),
            other => panic!("expected counts, got {other:?}"),
        }
    }

    #[test]
    fn listing_rules_and_fallbacks() {
        match answer("list all projects", &fixture()) {
            AssistantReply::ProjectList(lines) => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].name, "Alpha");
                assert_eq!(lines[0].task_count, 1);
            }
            other => panic!("expected project list, got {other:?}"),
        }
        match answer("show me all tasks", &fixture()) {
            AssistantReply::TaskList(tasks) => {
                assert_eq!(tasks[0].project_name, "Alpha");
            }
            other => panic!("expected task list, got {other:?}"),
        }

        let empty = Snapshot::default();
        assert!(matches!(
            answer("projects", &empty),
            AssistantReply::Text(msg) if msg == "No projects found."
        ));
        assert!(matches!(
            answer("tasks", &empty),
            AssistantReply::Text(msg) if msg == "No tasks found."
        ));
        assert!(matches!(
            answer("priorities", &empty),
            AssistantReply::Text(msg) if msg == "No priority data found."
        ));
    }

    #[test]
    fn stats_and_default_help() {
        match answer("give me a summary", &fixture()) {
            AssistantReply::Stats {
                total_projects,
                total_tasks,
                completed_tasks,
            } => {
                assert_eq!(total_projects, 1);
                assert_eq!(total_tasks, 1);
                assert_eq!(completed_tasks, 1);
            }
            other => panic!("expected stats, got {other:?}"),
        }
        assert!(matches!(answer("hello there", &fixture()), AssistantReply::Help));
    }
}
