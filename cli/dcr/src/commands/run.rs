//! `dcr run` — execute an event sequence against a graph file.

use std::path::Path;

use anyhow::{Context, Result};

use dcr_semantics::{is_accepting, try_execute};

use super::{load_graph, save_graph};

/// Execute `events` in order, report the resulting marking, and optionally
/// write the updated graph back out.
pub fn run(input: &Path, events: &[String], output: Option<&Path>) -> Result<()> {
    let mut graph = load_graph(input)?;

    for event in events {
        try_execute(&mut graph, event).with_context(|| format!("executing {event}"))?;
        println!("executed {event}");
    }

    let marking = graph.marking();
    println!();
    println!("Included: {}", marking.included.len());
    println!("Executed: {}", marking.executed.len());
    println!("Pending:  {}", marking.pending.len());
    println!(
        "Accepting: {}",
        if is_accepting(&graph) { "yes" } else { "no" }
    );

    if let Some(out) = output {
        save_graph(out, graph)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcr_core::{DcrGraph, RelationMap};

    fn write_sample(path: &Path) {
        let mut graph = DcrGraph::new();
        graph.add_event("A", "A");
        graph.add_event("B", "B");
        let mut conditions = RelationMap::new();
        conditions.insert("B".to_string(), std::iter::once("A".to_string()).collect());
        graph.set_conditions(conditions).unwrap();
        save_graph(path, graph).unwrap();
    }

    #[test]
    fn run_sequence_and_persist() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.dcr");
        let output = dir.path().join("out.dcr");
        write_sample(&input);

        run(&input, &["A".to_string(), "B".to_string()], Some(&output)).unwrap();

        let updated = load_graph(&output).unwrap();
        assert!(updated.marking().executed.contains("A"));
        assert!(updated.marking().executed.contains("B"));
    }

    #[test]
    fn disabled_event_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.dcr");
        write_sample(&input);

        // B is condition-blocked until A runs.
        assert!(run(&input, &["B".to_string()], None).is_err());
    }
}
