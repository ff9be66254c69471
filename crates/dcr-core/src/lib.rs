//! Core data structures for Dynamic Condition Response (DCR) graphs.
//!
//! A DCR graph is a declarative process model: a set of events connected by
//! typed relations (condition, response, include, exclude) that constrain
//! when events may occur and what obligations their execution creates. This
//! crate implements the extended variant with milestone and no-response
//! relations plus single-level nested super-activities.
//!
//! The central type is [`DcrGraph`], which owns the event universe, the six
//! relation maps, the super-activity map, and the runtime [`Marking`]. Every
//! relation assignment passes through [`nesting::resolve`], so stored
//! relations only ever reference base events — nesting is modeling sugar
//! that is expanded eagerly at assignment time, and the execution semantics
//! (in `dcr-semantics`) never need nesting-aware logic for the four base
//! relations.

pub mod error;
pub mod event;
pub mod graph;
pub mod marking;
pub mod nesting;
pub mod relation;

pub use error::GraphError;
pub use event::{Event, EventSet, RelationMap};
pub use graph::DcrGraph;
pub use marking::Marking;
pub use relation::RelationKind;
