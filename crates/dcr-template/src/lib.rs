//! Template serialization and the `.dcr` container format.
//!
//! A template is the persisted dictionary form of a graph: one mapping per
//! relation kind plus the event universe, labels, super-activities, and
//! marking. A snapshot taken with [`Template::from_graph`] rebuilds
//! exactly via [`Template::build`] — stored relation maps are validated
//! and restored verbatim, never re-resolved, so a persistence round trip
//! cannot change a graph's semantics. Hand-written templates whose
//! mappings still reference super-activities go through
//! [`Template::build_resolved`], which runs the normal assignment path.
//!
//! ## File layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Magic: "DCR\0"               │  4 bytes
//! │ Version: major, minor        │  2 bytes
//! │ Flags, reserved              │  2 bytes
//! ├──────────────────────────────┤
//! │ event_count: u32 LE          │
//! │ constraint_count: u32 LE     │
//! │ payload_length: u32 LE       │
//! ├──────────────────────────────┤
//! │ JSON payload (template)      │
//! ├──────────────────────────────┤
//! │ Content hash (SHA-256)       │  32 bytes
//! └──────────────────────────────┘
//! ```

pub mod format;
pub mod template;

pub use format::DcrFile;
pub use template::{Template, TemplateError};
