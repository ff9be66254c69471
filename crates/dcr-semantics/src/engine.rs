//! Enablement and execution over a DCR graph marking.

use dcr_core::{DcrGraph, Event, EventSet, Marking};

use crate::error::SemanticsError;

/// Compute the set of events currently enabled to occur.
///
/// Three filters, applied in order:
///
/// 1. **Base**: an event is enabled iff it is included and every event
///    conditioning it is either not included or already executed.
/// 2. **Milestone**: an event is dropped while any of its milestone events
///    is both included and pending.
/// 3. **Nested**: for every super-activity that is *not* enabled after the
///    first two filters, all of its members are dropped unconditionally —
///    the group's own enablement gates its members. Disabled
///    super-activities are snapshotted before any member is removed.
///
/// The marking is not touched.
pub fn enabled(graph: &DcrGraph) -> EventSet {
    let marking = graph.marking();
    let mut res = marking.included.clone();

    for (event, sources) in graph.conditions() {
        if !res.contains(event) {
            continue;
        }
        let blocked = sources
            .iter()
            .any(|c| marking.included.contains(c) && !marking.executed.contains(c));
        if blocked {
            res.remove(event);
        }
    }

    for (event, sources) in graph.milestones() {
        if !res.contains(event) {
            continue;
        }
        let blocked = sources
            .iter()
            .any(|m| marking.included.contains(m) && marking.pending.contains(m));
        if blocked {
            res.remove(event);
        }
    }

    let disabled: Vec<(&Event, &EventSet)> = graph
        .super_activities()
        .iter()
        .filter(|(super_id, _)| !res.contains(*super_id))
        .collect();
    for (_, members) in disabled {
        for member in members {
            res.remove(member);
        }
    }

    res
}

/// Apply the marking transition for one occurrence of `event`.
///
/// Callers must have checked `event` against [`enabled`]; this function does
/// not re-validate. Use [`try_execute`] at boundaries that need a checked
/// variant.
///
/// The no-response pre-pass runs first: every no-response target of `event`
/// loses its pending obligation, whether or not it is included. The base
/// step then marks `event` executed, clears its own pending obligation,
/// marks response targets pending, adds include targets to the included
/// set, and removes exclude targets from both the included and pending
/// sets. Exclusion is applied last, so a target named by both relations
/// ends up excluded.
///
/// The event's own pending obligation is cleared before response
/// propagation, so a self-response leaves the event owed again after it
/// runs.
pub fn execute(graph: &mut DcrGraph, event: &str) {
    let no_responses = graph.no_responses().get(event).cloned();
    let responses = graph.responses().get(event).cloned();
    let excludes = graph.excludes().get(event).cloned();
    let includes = graph.includes().get(event).cloned();

    let marking = graph.marking_mut();

    if let Some(targets) = no_responses {
        for target in &targets {
            marking.pending.remove(target);
        }
    }

    marking.executed.insert(event.to_string());
    marking.pending.remove(event);
    if let Some(targets) = responses {
        marking.pending.extend(targets.iter().cloned());
    }
    if let Some(targets) = includes {
        marking.included.extend(targets.iter().cloned());
    }
    if let Some(targets) = excludes {
        for target in &targets {
            marking.included.remove(target);
            marking.pending.remove(target);
        }
    }
}

/// Checked execution: verifies `event` is declared and currently enabled
/// before applying [`execute`]. On error the marking is untouched.
pub fn try_execute(graph: &mut DcrGraph, event: &str) -> Result<(), SemanticsError> {
    if !graph.events().contains(event) {
        return Err(SemanticsError::UnknownEvent(event.to_string()));
    }
    if !enabled(graph).contains(event) {
        return Err(SemanticsError::NotEnabled(event.to_string()));
    }
    execute(graph, event);
    Ok(())
}

/// A marking is accepting when no included event still owes a response.
pub fn is_accepting(graph: &DcrGraph) -> bool {
    let Marking {
        included, pending, ..
    } = graph.marking();
    pending.is_disjoint(included)
}
