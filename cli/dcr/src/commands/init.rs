//! `dcr init` — create a starter graph file.

use std::path::Path;

use anyhow::{bail, Result};

use dcr_core::{DcrGraph, RelationMap};

use super::save_graph;

/// Create a small review-flow graph and write it to `path`.
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let graph = starter_graph()?;
    save_graph(path, graph)?;
    println!("Created {}", path.display());
    println!("Try: dcr enabled {}", path.display());
    Ok(())
}

/// A minimal but non-trivial model: a Review super-activity whose members
/// both respond to Submit, gated by a condition from Submit.
fn starter_graph() -> Result<DcrGraph> {
    let mut graph = DcrGraph::new();
    graph.add_event("Submit", "Submit request");
    graph.add_event("Review", "Review");
    graph.add_event("Approve", "Approve request");
    graph.add_event("Reject", "Reject request");
    graph.add_event("Archive", "Archive case");

    let mut supers = RelationMap::new();
    supers.insert(
        "Review".to_string(),
        ["Approve", "Reject"].iter().map(|s| s.to_string()).collect(),
    );
    graph.set_super_activities(supers)?;

    let mut conditions = RelationMap::new();
    conditions.insert(
        "Review".to_string(),
        std::iter::once("Submit".to_string()).collect(),
    );
    graph.set_conditions(conditions)?;

    let mut responses = RelationMap::new();
    responses.insert(
        "Submit".to_string(),
        std::iter::once("Review".to_string()).collect(),
    );
    graph.set_responses(responses)?;

    let mut no_responses = RelationMap::new();
    no_responses.insert(
        "Archive".to_string(),
        ["Approve", "Reject"].iter().map(|s| s.to_string()).collect(),
    );
    graph.set_no_responses(no_responses)?;

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_graph_is_well_formed() {
        let graph = starter_graph().unwrap();
        assert_eq!(graph.events().len(), 5);
        // Relations on the Review group were fanned out to its members.
        assert!(!graph.conditions().contains_key("Review"));
        assert!(graph.conditions().contains_key("Approve"));
        assert!(graph.conditions().contains_key("Reject"));
        assert!(graph.responses()["Submit"].contains("Approve"));
    }

    #[test]
    fn init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.dcr");
        run(&path).unwrap();
        assert!(run(&path).is_err());
    }
}
