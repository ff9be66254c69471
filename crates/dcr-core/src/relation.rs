//! Relation kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six DCR relation kinds.
///
/// `Condition` and `Milestone` maps are keyed by the *constrained* event
/// (the map value holds the events gating it); the other four are keyed by
/// the *executing* event (the map value holds the events it affects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Condition,
    Response,
    Include,
    Exclude,
    Milestone,
    NoResponse,
}

impl RelationKind {
    /// All kinds, in the order used for reporting.
    pub const ALL: [RelationKind; 6] = [
        RelationKind::Condition,
        RelationKind::Response,
        RelationKind::Include,
        RelationKind::Exclude,
        RelationKind::Milestone,
        RelationKind::NoResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Condition => "condition",
            RelationKind::Response => "response",
            RelationKind::Include => "include",
            RelationKind::Exclude => "exclude",
            RelationKind::Milestone => "milestone",
            RelationKind::NoResponse => "no-response",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(RelationKind::Condition.to_string(), "condition");
        assert_eq!(RelationKind::NoResponse.to_string(), "no-response");
    }

    #[test]
    fn all_covers_six_kinds() {
        assert_eq!(RelationKind::ALL.len(), 6);
    }
}
