//! Error types for checked execution.

use dcr_core::Event;

/// Errors from the checked execution boundary.
#[derive(Debug, thiserror::Error)]
pub enum SemanticsError {
    #[error("event {0} is not currently enabled")]
    NotEnabled(Event),

    #[error("event {0} is not declared in the graph")]
    UnknownEvent(Event),
}
