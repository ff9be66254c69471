//! CLI command implementations.

pub mod enabled;
pub mod init;
pub mod inspect;
pub mod run;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use dcr_core::DcrGraph;
use dcr_template::DcrFile;

/// Load a graph from a `.dcr` file.
pub fn load_graph(path: &Path) -> Result<DcrGraph> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file =
        DcrFile::from_bytes(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(file.graph)
}

/// Write a graph to a `.dcr` file.
pub fn save_graph(path: &Path, graph: DcrGraph) -> Result<()> {
    let bytes = DcrFile::new(graph)
        .to_bytes()
        .context("serializing graph")?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
