//! Event identifiers and the map/set aliases built over them.
//!
//! Events are opaque caller-supplied identifiers. Their display labels live
//! in the graph's label map and carry no semantic weight.

use std::collections::{HashMap, HashSet};

/// An event identifier.
pub type Event = String;

/// A set of events.
pub type EventSet = HashSet<Event>;

/// A relation map: source event → set of target events.
///
/// The same shape is used for the super-activity map (super id → members).
pub type RelationMap = HashMap<Event, EventSet>;

/// Build an [`EventSet`] from string literals. Test and construction helper.
pub fn event_set<I, S>(events: I) -> EventSet
where
    I: IntoIterator<Item = S>,
    S: Into<Event>,
{
    events.into_iter().map(Into::into).collect()
}
