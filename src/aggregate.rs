//! Grouped counts over task collections.
//!
//! [`aggregate_by`] turns a flat task sequence into a label-to-count mapping
//! whose iteration order is first-observation order, which is also the chart
//! label order downstream. The two group keys deliberately treat missing
//! values differently; see [`GroupKey`].

use indexmap::IndexMap;
use serde::Serialize;

use crate::entities::{FlatTask, Priority, Task};

/// Task attribute to group by.
///
/// The missing-value policies differ per key and are both load-bearing:
/// priority is meaningful only when present, so unprioritized tasks are
/// skipped; status is always meaningful, so missing/empty status coalesces
/// into the `"Unknown"` bucket and every task is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Priority,
    Status,
}

/// Label used when grouping by status and the task has none.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Count tasks per observed label of the given attribute.
///
/// Labels are the raw observed field text, not normalized enum names, and
/// iterate in first-observation order.
pub fn aggregate_by<'a, I>(tasks: I, key: GroupKey) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut counts = IndexMap::new();
    for task in tasks {
        let label = match key {
            GroupKey::Priority => match task.priority.as_deref() {
                Some(p) if !p.is_empty() => p.to_string(),
                _ => continue,
            },
            GroupKey::Status => match task.status.as_deref() {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => UNKNOWN_LABEL.to_string(),
            },
        };
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Chart-ready projection of a counts mapping: parallel label and value
/// columns under a series name.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    /// Series name (e.g. "Tasks by Priority")
    pub name: String,
    /// Bucket labels in first-observation order
    pub labels: Vec<String>,
    /// Counts aligned with `labels`
    pub values: Vec<usize>,
}

impl ChartSeries {
    /// Build a series from a counts mapping, preserving its order.
    pub fn from_counts(name: impl Into<String>, counts: &IndexMap<String, usize>) -> Self {
        Self {
            name: name.into(),
            labels: counts.keys().cloned().collect(),
            values: counts.values().copied().collect(),
        }
    }

    /// Whether the series has no buckets.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Group tasks under every [`Priority`] member, pre-seeded so all columns
/// appear even when empty.
///
/// Unlike [`aggregate_by`], which buckets by observed raw text, the board
/// files each task under the member its raw priority normalizes to
/// (case- and whitespace-insensitive). Uncategorized tasks appear in no
/// column.
pub fn priority_board(tasks: &[FlatTask]) -> IndexMap<Priority, Vec<FlatTask>> {
    let mut board: IndexMap<Priority, Vec<FlatTask>> =
        Priority::ALL.into_iter().map(|p| (p, Vec::new())).collect();
    for flat in tasks {
        let Some(level) = flat.task.priority_level() else {
            continue;
        };
        if let Some(column) = board.get_mut(&level) {
            column.push(flat.clone());
        }
    }
    board
}
