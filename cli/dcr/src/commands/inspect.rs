//! `dcr inspect` — show the structure and marking of a graph file.

use std::path::Path;

use anyhow::{Context, Result};

use dcr_core::RelationKind;
use dcr_template::Template;

use super::load_graph;

/// Inspect a graph file.
pub fn run(input: &Path, json: bool) -> Result<()> {
    let graph = load_graph(input)?;

    if json {
        let template = Template::from_graph(&graph);
        let out = serde_json::to_string_pretty(&template).context("rendering template")?;
        println!("{out}");
        return Ok(());
    }

    println!("--- Graph ({}) ---", input.display());
    println!("  Events:      {}", graph.events().len());
    println!("  Constraints: {}", graph.constraint_count());
    println!("  Super-activities: {}", graph.super_activities().len());
    println!();

    println!("Relations:");
    for kind in RelationKind::ALL {
        let count: usize = graph.relation(kind).values().map(|t| t.len()).sum();
        println!("  {:<12} {count}", kind.to_string());
    }
    println!();

    let marking = graph.marking();
    println!("Marking:");
    println!("  Included: {}", sorted_list(marking.included.iter()));
    println!("  Executed: {}", sorted_list(marking.executed.iter()));
    println!("  Pending:  {}", sorted_list(marking.pending.iter()));

    Ok(())
}

fn sorted_list<'a>(events: impl Iterator<Item = &'a String>) -> String {
    let mut list: Vec<&str> = events.map(String::as_str).collect();
    list.sort_unstable();
    list.join(", ")
}
