//! Super-activity resolution for relation assignments.
//!
//! A super-activity is a grouping identifier standing for a set of member
//! events. It is not a runtime primitive: any relation that references one
//! is rewritten here, at assignment time, so that stored relation maps only
//! ever mention base events.

use crate::event::{Event, RelationMap};

/// Rewrite `mapping` so it references no super-activity identifiers.
///
/// Two passes, in a fixed order:
///
/// 1. **Target-side**: every super-activity appearing in a target set is
///    replaced by its members. Each target set is expanded from a snapshot
///    of itself, never while being iterated.
/// 2. **Source-side**: every super-activity appearing as a key is fanned
///    out — each member receives its own copy of the (already expanded)
///    target set, and the super-activity key is removed. A member that
///    already had an entry is overwritten.
///
/// Target-side expansion must run first so that source-side fan-out hands
/// every member the fully expanded target set. Each member gets an
/// independent clone of that set; mutating one member's relations later
/// does not affect its co-members.
///
/// Resolution is idempotent: a mapping that mentions no super-activities
/// comes back unchanged.
pub fn resolve(mut mapping: RelationMap, super_activities: &RelationMap) -> RelationMap {
    // Pass 1: expand super-activities out of each target set.
    for targets in mapping.values_mut() {
        let snapshot: Vec<Event> = targets
            .iter()
            .filter(|t| super_activities.contains_key(*t))
            .cloned()
            .collect();
        for super_id in snapshot {
            targets.remove(&super_id);
            if let Some(members) = super_activities.get(&super_id) {
                targets.extend(members.iter().cloned());
            }
        }
    }

    // Pass 2: fan super-activity keys out to their members.
    let super_keys: Vec<Event> = mapping
        .keys()
        .filter(|k| super_activities.contains_key(*k))
        .cloned()
        .collect();
    for super_id in super_keys {
        let targets = match mapping.remove(&super_id) {
            Some(t) => t,
            None => continue,
        };
        if let Some(members) = super_activities.get(&super_id) {
            for member in members {
                mapping.insert(member.clone(), targets.clone());
            }
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::event_set;

    fn supers() -> RelationMap {
        let mut map = RelationMap::new();
        map.insert("A".to_string(), event_set(["B", "E"]));
        map
    }

    #[test]
    fn idempotent_on_base_events() {
        let mut raw = RelationMap::new();
        raw.insert("D".to_string(), event_set(["C", "F"]));
        let resolved = resolve(raw.clone(), &supers());
        assert_eq!(resolved, raw);
    }

    #[test]
    fn empty_mapping_resolves_empty() {
        let resolved = resolve(RelationMap::new(), &supers());
        assert!(resolved.is_empty());
    }

    #[test]
    fn target_side_expansion() {
        let mut raw = RelationMap::new();
        raw.insert("D".to_string(), event_set(["A", "F"]));
        let resolved = resolve(raw, &supers());
        assert_eq!(resolved["D"], event_set(["B", "E", "F"]));
        assert!(!resolved["D"].contains("A"));
    }

    #[test]
    fn source_side_expansion_removes_key() {
        let mut raw = RelationMap::new();
        raw.insert("A".to_string(), event_set(["C"]));
        let resolved = resolve(raw, &supers());
        assert!(!resolved.contains_key("A"));
        assert_eq!(resolved["B"], event_set(["C"]));
        assert_eq!(resolved["E"], event_set(["C"]));
    }

    #[test]
    fn members_receive_expanded_targets() {
        // The super-activity's own target set mentions another super; the
        // members must receive the expanded form.
        let mut two_supers = supers();
        two_supers.insert("S".to_string(), event_set(["X", "Y"]));
        let mut raw = RelationMap::new();
        raw.insert("A".to_string(), event_set(["S"]));
        let resolved = resolve(raw, &two_supers);
        assert_eq!(resolved["B"], event_set(["X", "Y"]));
        assert_eq!(resolved["E"], event_set(["X", "Y"]));
    }

    #[test]
    fn member_sets_are_independent() {
        let mut raw = RelationMap::new();
        raw.insert("A".to_string(), event_set(["C"]));
        let mut resolved = resolve(raw, &supers());
        if let Some(targets) = resolved.get_mut("B") {
            targets.insert("Z".to_string());
        }
        assert!(!resolved["E"].contains("Z"));
    }

    #[test]
    fn combined_scenario() {
        // A = {B, E}; raw responses A:{C}, D:{A, F}.
        let mut raw = RelationMap::new();
        raw.insert("A".to_string(), event_set(["C"]));
        raw.insert("D".to_string(), event_set(["A", "F"]));
        let resolved = resolve(raw, &supers());

        let mut expected = RelationMap::new();
        expected.insert("B".to_string(), event_set(["C"]));
        expected.insert("E".to_string(), event_set(["C"]));
        expected.insert("D".to_string(), event_set(["B", "E", "F"]));
        assert_eq!(resolved, expected);
    }

    #[test]
    fn member_entry_overwritten_by_fanout() {
        let mut raw = RelationMap::new();
        raw.insert("A".to_string(), event_set(["C"]));
        raw.insert("B".to_string(), event_set(["F"]));
        let resolved = resolve(raw, &supers());
        // B's own entry is replaced by the super-activity's relation.
        assert_eq!(resolved["B"], event_set(["C"]));
    }
}
