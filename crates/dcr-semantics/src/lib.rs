//! Execution semantics for extended DCR graphs.
//!
//! Stateless, pure functions over a [`DcrGraph`](dcr_core::DcrGraph) and its
//! marking: [`enabled`] computes the set of events currently permitted to
//! occur, [`execute`] applies the marking transition for one occurrence.
//! The extended rules (milestone, no-response, nested disablement) layer on
//! top of the base DCR semantics; nesting itself never appears here for the
//! four base relations because relation assignment already expanded it.

pub mod engine;
pub mod error;

pub use engine::{enabled, execute, is_accepting, try_execute};
pub use error::SemanticsError;
