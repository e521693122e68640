#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # pmdash
//!
//! Data core of a project-management dashboard: loads projects and tasks
//! from a remote REST API into an immutable snapshot, then derives
//! everything the presentation layer needs from pure functions over it.
//!
//! This crate provides:
//! - Priority/status distributions as chart-ready series
//! - Free-text search with match highlighting and per-project grouping
//! - Summary statistics (totals, completion rate)
//! - A rule-based assistant answering canned questions about the dataset
//!
//! ## Example
//!
//! ```rust,ignore
//! use pmdash::{ApiClient, DashboardStats, run_search};
//!
//! let client = ApiClient::new("https://api.example.com/prod")?;
//! let snapshot = client.load_snapshot().await?;
//!
//! let stats = DashboardStats::compute(snapshot.projects());
//! let outcome = run_search("alpha", &snapshot);
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Immutable dataset snapshot
pub mod snapshot;

// Grouped counts and chart series
pub mod aggregate;

// Free-text search and highlighting
pub mod search;

// Summary statistics
pub mod stats;

// Rule-based assistant
pub mod assistant;

// Upstream REST client
pub mod client;

// Re-export key types for convenience
pub use aggregate::{aggregate_by, priority_board, ChartSeries, GroupKey, UNKNOWN_LABEL};
pub use assistant::{answer, AssistantReply, ProjectLine};
pub use client::ApiClient;
pub use entities::{FlatTask, Priority, Project, Task, STATUS_COMPLETED};
pub use errors::{DashError, DashResult};
pub use search::{highlight, run_search, HighlightSpan, SearchOutcome, SearchResult};
pub use snapshot::Snapshot;
pub use stats::DashboardStats;
