use std::fmt;

use serde::{Deserialize, Serialize};

/// Task priority levels, from most to least urgent.
///
/// The upstream API transports priority as free text, so [`Priority::parse`]
/// is deliberately forgiving: comparison ignores case and all embedded
/// whitespace. Text that matches no member is uncategorized (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    Backlog,
}

impl Priority {
    /// All members in fixed enum order, used to pre-seed the priority board.
    pub const ALL: [Priority; 5] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::Backlog,
    ];

    /// Display label for the member.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Backlog => "Backlog",
        }
    }

    /// Parse raw priority text, ignoring case and all whitespace.
    ///
    /// Returns `None` for text that matches no member, including empty
    /// input. `"High"`, `"high"` and `" H i g h "` all parse to
    /// [`Priority::High`].
    pub fn parse(raw: &str) -> Option<Priority> {
        let folded: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        Priority::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == folded)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
