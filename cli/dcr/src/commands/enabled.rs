//! `dcr enabled` — list the currently enabled events.

use std::path::Path;

use anyhow::Result;

use super::load_graph;

/// Print the enabled events of a graph file, sorted.
pub fn run(input: &Path) -> Result<()> {
    let graph = load_graph(input)?;
    let mut events: Vec<String> = dcr_semantics::enabled(&graph).into_iter().collect();
    events.sort_unstable();

    if events.is_empty() {
        println!("(no events enabled)");
    } else {
        for event in events {
            match graph.label_of(&event) {
                Some(label) if label != event => println!("{event}  ({label})"),
                _ => println!("{event}"),
            }
        }
    }
    Ok(())
}
