//! Free-text search over projects and tasks.
//!
//! Matching is case-insensitive substring containment over project
//! name/description and task title/description. The scanner walks chars
//! directly instead of compiling the query into a pattern, so queries like
//! `"C++"` or `"a(b"` are matched literally and can never be misread as
//! pattern syntax.

use std::panic::{self, AssertUnwindSafe};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::entities::{FlatTask, Project};
use crate::snapshot::Snapshot;

/// Outcome of one search submission.
///
/// `Idle` (empty query, nothing searched) is distinct from `Results` with
/// zero matches: callers render a prompt for the former and a no-results
/// message for the latter. The computation is synchronous, so the in-flight
/// state never outlives the call and each submission's outcome simply
/// replaces the caller's previous one.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// No query entered; no search performed.
    Idle,
    /// Search ran to completion (possibly with zero matches).
    Results(SearchResult),
    /// Search computation failed; prior results are discarded.
    Failed(String),
}

/// Matched projects plus matched tasks grouped by owning project.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Projects whose name or description contains the query.
    pub matched_projects: Vec<Project>,
    /// Matched tasks keyed by owning project id, in flattened task order.
    pub tasks_by_project: IndexMap<i64, Vec<FlatTask>>,
}

impl SearchResult {
    /// Whether nothing at all matched.
    pub fn is_empty(&self) -> bool {
        self.matched_projects.is_empty() && self.tasks_by_project.is_empty()
    }

    /// Total number of matched tasks across all projects.
    pub fn task_count(&self) -> usize {
        self.tasks_by_project.values().map(Vec::len).sum()
    }
}

/// Run a search over the snapshot, absorbing any failure.
///
/// An empty query yields [`SearchOutcome::Idle`]. A panic anywhere in the
/// matching pass is caught and reported as [`SearchOutcome::Failed`] rather
/// than crashing the caller.
pub fn run_search(query: &str, snapshot: &Snapshot) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome::Idle;
    }
    match panic::catch_unwind(AssertUnwindSafe(|| search(query, snapshot))) {
        Ok(result) => {
            debug!(
                query,
                projects = result.matched_projects.len(),
                tasks = result.task_count(),
                "search completed"
            );
            SearchOutcome::Results(result)
        }
        Err(_) => SearchOutcome::Failed("Search failed.".to_string()),
    }
}

/// The matching pass itself: pure function of query and snapshot.
fn search(query: &str, snapshot: &Snapshot) -> SearchResult {
    let matched_projects: Vec<Project> = snapshot
        .projects()
        .iter()
        .filter(|p| {
            contains_ignore_case(&p.name, query)
                || p.description
                    .as_deref()
                    .is_some_and(|d| contains_ignore_case(d, query))
        })
        .cloned()
        .collect();

    let mut tasks_by_project: IndexMap<i64, Vec<FlatTask>> = IndexMap::new();
    for flat in snapshot.flatten_tasks() {
        let matched = contains_ignore_case(&flat.task.title, query)
            || flat
                .task
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, query));
        if matched {
            tasks_by_project
                .entry(flat.project_id)
                .or_default()
                .push(flat);
        }
    }

    SearchResult {
        matched_projects,
        tasks_by_project,
    }
}

/// One piece of a highlighted text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    /// The span's text, a contiguous slice of the input.
    pub text: String,
    /// Whether this span is a query occurrence to emphasize.
    pub matched: bool,
}

/// Split `text` into plain and matched spans, marking every
/// case-insensitive occurrence of `query`.
///
/// The spans concatenate back to exactly `text`. An empty query yields one
/// plain span. Occurrences are found left to right and do not overlap.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    if query.is_empty() || text.is_empty() {
        return vec![HighlightSpan {
            text: text.to_string(),
            matched: false,
        }];
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(len) = match_len_ignore_case(&text[pos..], query) {
            if plain_start < pos {
                spans.push(HighlightSpan {
                    text: text[plain_start..pos].to_string(),
                    matched: false,
                });
            }
            spans.push(HighlightSpan {
                text: text[pos..pos + len].to_string(),
                matched: true,
            });
            pos += len;
            plain_start = pos;
        } else {
            // Advance one char, staying on a boundary.
            pos += text[pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        spans.push(HighlightSpan {
            text: text[plain_start..].to_string(),
            matched: false,
        });
    }
    spans
}

/// Whether `hay` contains `needle`, ignoring case.
pub fn contains_ignore_case(hay: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let mut pos = 0;
    while pos < hay.len() {
        if match_len_ignore_case(&hay[pos..], needle).is_some() {
            return true;
        }
        pos += hay[pos..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// If `hay` starts with `needle` under char-wise lowercase comparison,
/// return the byte length of the matched prefix of `hay`.
fn match_len_ignore_case(hay: &str, needle: &str) -> Option<usize> {
    let mut hay_chars = hay.char_indices();
    let mut matched_end = 0;
    for nc in needle.chars() {
        let (idx, hc) = hay_chars.next()?;
        if !hc.to_lowercase().eq(nc.to_lowercase()) {
            return None;
        }
        matched_end = idx + hc.len_utf8();
    }
    Some(matched_end)
}
