//! dcr CLI — command-line driver for extended DCR graphs.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dcr", version, about = "Extended DCR graph toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter .dcr graph file
    Init {
        /// Output path for the new graph file
        path: PathBuf,
    },
    /// Show events, relations, and the current marking of a graph
    Inspect {
        /// Input .dcr file
        input: PathBuf,
        /// Emit the template as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the currently enabled events
    Enabled {
        /// Input .dcr file
        input: PathBuf,
    },
    /// Execute a sequence of events against the graph
    Run {
        /// Input .dcr file
        input: PathBuf,
        /// Events to execute, in order
        events: Vec<String>,
        /// Write the updated graph to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(&path),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Enabled { input } => commands::enabled::run(&input),
        Commands::Run {
            input,
            events,
            output,
        } => commands::run::run(&input, &events, output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
