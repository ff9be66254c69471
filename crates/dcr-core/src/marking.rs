//! The runtime marking of a DCR graph.

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventSet};

/// The mutable runtime state of a graph: which events are included,
/// executed, and pending.
///
/// The three sets are independent — an event may be in any combination of
/// them (excluded-but-pending is legal and meaningful). The marking is the
/// only part of a graph that changes during execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marking {
    pub included: EventSet,
    pub executed: EventSet,
    pub pending: EventSet,
}

impl Marking {
    /// Create an empty marking.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard initial marking: every event included, nothing executed
    /// or pending.
    pub fn initial<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        Self {
            included: events.into_iter().cloned().collect(),
            executed: EventSet::new(),
            pending: EventSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::event_set;

    #[test]
    fn initial_includes_everything() {
        let events = event_set(["A", "B", "C"]);
        let marking = Marking::initial(&events);
        assert_eq!(marking.included, events);
        assert!(marking.executed.is_empty());
        assert!(marking.pending.is_empty());
    }

    #[test]
    fn excluded_but_pending_is_representable() {
        let mut marking = Marking::new();
        marking.pending.insert("A".to_string());
        assert!(!marking.included.contains("A"));
        assert!(marking.pending.contains("A"));
    }
}
