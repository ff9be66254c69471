//! The DCR graph container — events, labels, relations, nesting, marking.
//!
//! Relation assignment is the construction-time surface: each setter
//! validates the raw mapping against the declared event universe, runs
//! nesting resolution, and stores the result wholesale (re-assignment
//! replaces, never merges). The marking is the only part that mutates after
//! construction, and only through the semantics engine.

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::event::{Event, EventSet, RelationMap};
use crate::marking::Marking;
use crate::nesting;
use crate::relation::RelationKind;

/// An extended DCR graph: base relations plus milestone, no-response, and
/// single-level super-activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DcrGraph {
    events: EventSet,
    labels: HashSet<String>,
    label_map: HashMap<Event, String>,
    marking: Marking,

    conditions: RelationMap,
    responses: RelationMap,
    includes: RelationMap,
    excludes: RelationMap,
    milestones: RelationMap,
    no_responses: RelationMap,

    super_activities: RelationMap,
}

impl DcrGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Event universe ---

    /// Declare an event with its display label.
    ///
    /// Newly declared events start included (the standard initial marking).
    /// Super-activity identifiers are declared the same way — they
    /// participate in the marking like any other event.
    pub fn add_event(&mut self, event: impl Into<Event>, label: impl Into<String>) {
        let event = event.into();
        let label = label.into();
        self.labels.insert(label.clone());
        self.label_map.insert(event.clone(), label);
        self.marking.included.insert(event.clone());
        self.events.insert(event);
    }

    /// The declared event universe.
    pub fn events(&self) -> &EventSet {
        &self.events
    }

    /// All declared labels.
    pub fn labels(&self) -> &HashSet<String> {
        &self.labels
    }

    /// The display label of an event, if declared.
    pub fn label_of(&self, event: &str) -> Option<&str> {
        self.label_map.get(event).map(String::as_str)
    }

    // --- Marking ---

    pub fn marking(&self) -> &Marking {
        &self.marking
    }

    pub fn marking_mut(&mut self) -> &mut Marking {
        &mut self.marking
    }

    // --- Relation assignment ---

    /// Assign one relation kind from a raw mapping.
    ///
    /// The mapping may reference super-activity identifiers on either side;
    /// it is stored in resolved form, referencing only base events. The
    /// assignment replaces any prior mapping for the kind.
    pub fn set_relation(
        &mut self,
        kind: RelationKind,
        mapping: RelationMap,
    ) -> Result<(), GraphError> {
        self.validate_mapping(kind, &mapping)?;
        let resolved = nesting::resolve(mapping, &self.super_activities);
        self.store_relation(kind, resolved);
        Ok(())
    }

    /// Store a relation mapping verbatim, without nesting resolution.
    ///
    /// For restoring a persisted graph: stored maps are already in their
    /// final form, and a map may legitimately key on a super-activity
    /// identifier when it was assigned before the super-activity map was
    /// declared. Re-resolving on load would rewrite such maps and change
    /// the graph's semantics. The mapping is still validated against the
    /// event universe.
    pub fn restore_relation(
        &mut self,
        kind: RelationKind,
        mapping: RelationMap,
    ) -> Result<(), GraphError> {
        self.validate_mapping(kind, &mapping)?;
        self.store_relation(kind, mapping);
        Ok(())
    }

    fn store_relation(&mut self, kind: RelationKind, mapping: RelationMap) {
        match kind {
            RelationKind::Condition => self.conditions = mapping,
            RelationKind::Response => self.responses = mapping,
            RelationKind::Include => self.includes = mapping,
            RelationKind::Exclude => self.excludes = mapping,
            RelationKind::Milestone => self.milestones = mapping,
            RelationKind::NoResponse => self.no_responses = mapping,
        }
    }

    pub fn set_conditions(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        self.set_relation(RelationKind::Condition, mapping)
    }

    pub fn set_responses(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        self.set_relation(RelationKind::Response, mapping)
    }

    pub fn set_includes(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        self.set_relation(RelationKind::Include, mapping)
    }

    pub fn set_excludes(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        self.set_relation(RelationKind::Exclude, mapping)
    }

    pub fn set_milestones(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        self.set_relation(RelationKind::Milestone, mapping)
    }

    pub fn set_no_responses(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        self.set_relation(RelationKind::NoResponse, mapping)
    }

    /// Assign the super-activity map.
    ///
    /// Every super-activity identifier and member must be a declared event,
    /// member sets must be non-empty, and nesting is single-level: a member
    /// may not itself be a super-activity key.
    pub fn set_super_activities(&mut self, mapping: RelationMap) -> Result<(), GraphError> {
        for (parent, members) in &mapping {
            if !self.events.contains(parent) {
                return Err(GraphError::UnknownSuperActivity(parent.clone()));
            }
            if members.is_empty() {
                return Err(GraphError::EmptySuperActivity(parent.clone()));
            }
            for member in members {
                if !self.events.contains(member) {
                    return Err(GraphError::UnknownMember {
                        parent: parent.clone(),
                        member: member.clone(),
                    });
                }
                if mapping.contains_key(member) {
                    return Err(GraphError::NestedSuperActivity {
                        parent: parent.clone(),
                        member: member.clone(),
                    });
                }
            }
        }
        self.super_activities = mapping;
        Ok(())
    }

    fn validate_mapping(&self, kind: RelationKind, mapping: &RelationMap) -> Result<(), GraphError> {
        for (source, targets) in mapping {
            if !self.events.contains(source) {
                return Err(GraphError::UnknownEvent {
                    relation: kind,
                    event: source.clone(),
                });
            }
            for target in targets {
                if !self.events.contains(target) {
                    return Err(GraphError::UnknownEvent {
                        relation: kind,
                        event: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    // --- Relation accessors ---

    /// The condition map, keyed by the constrained event.
    pub fn conditions(&self) -> &RelationMap {
        &self.conditions
    }

    pub fn responses(&self) -> &RelationMap {
        &self.responses
    }

    pub fn includes(&self) -> &RelationMap {
        &self.includes
    }

    pub fn excludes(&self) -> &RelationMap {
        &self.excludes
    }

    /// The milestone map, keyed by the constrained event.
    pub fn milestones(&self) -> &RelationMap {
        &self.milestones
    }

    pub fn no_responses(&self) -> &RelationMap {
        &self.no_responses
    }

    pub fn super_activities(&self) -> &RelationMap {
        &self.super_activities
    }

    /// The stored mapping for one relation kind.
    pub fn relation(&self, kind: RelationKind) -> &RelationMap {
        match kind {
            RelationKind::Condition => &self.conditions,
            RelationKind::Response => &self.responses,
            RelationKind::Include => &self.includes,
            RelationKind::Exclude => &self.excludes,
            RelationKind::Milestone => &self.milestones,
            RelationKind::NoResponse => &self.no_responses,
        }
    }

    /// Total number of constraints: the sum of target-set cardinalities
    /// over all six relation maps.
    pub fn constraint_count(&self) -> usize {
        RelationKind::ALL
            .iter()
            .map(|kind| self.relation(*kind).values().map(HashSet::len).sum::<usize>())
            .sum()
    }
}
