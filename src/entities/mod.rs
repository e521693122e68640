//! Project and task entity definitions.
//!
//! These mirror the upstream REST API's JSON shapes. Every field beyond the
//! identifiers is optional on the wire: a partially-populated object
//! deserializes cleanly and the absent fields read as empty, never as an
//! error.

mod priority;
mod project;
mod task;

pub use priority::Priority;
pub use project::Project;
pub use task::{FlatTask, Task, STATUS_COMPLETED};
