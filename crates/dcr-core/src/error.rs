//! Error types for graph construction.

use crate::event::Event;
use crate::relation::RelationKind;

/// Errors from relation and super-activity assignment.
///
/// All of these are configuration errors: they are rejected at assignment
/// time so they cannot surface as silent no-ops during execution.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("{relation} relation references undeclared event {event}")]
    UnknownEvent {
        relation: RelationKind,
        event: Event,
    },

    #[error("super-activity {0} is not a declared event")]
    UnknownSuperActivity(Event),

    #[error("super-activity {parent} has undeclared member {member}")]
    UnknownMember { parent: Event, member: Event },

    #[error("super-activity {0} has no member events")]
    EmptySuperActivity(Event),

    #[error("member {member} of super-activity {parent} is itself a super-activity; nesting is single-level")]
    NestedSuperActivity { parent: Event, member: Event },
}
