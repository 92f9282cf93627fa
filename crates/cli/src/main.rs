#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Phasegraph CLI: loads a configuration document and steps the graph.
//!
//! This binary is intentionally thin: it owns file reading, argument
//! parsing, and printing one line per tick. All runtime semantics live
//! in `phasegraph-core` and `phasegraph-config`.

use clap::Parser;
use std::path::PathBuf;

/// Load a phasegraph configuration document and step it.
#[derive(Parser)]
#[command(name = "phasegraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Step a hierarchical phase graph loaded from a JSON document")]
struct Cli {
    /// Path to the configuration document.
    config: PathBuf,

    /// Number of times to call `step`.
    #[arg(short, long, default_value_t = 1)]
    steps: usize,

    /// Log level: trace, debug, info, warn, error.
    #[arg(short = 'L', long, global = true, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    phasegraph_utils::setup_tracing(&cli.log_level);

    let source = match phasegraph_utils::read_file(&cli.config) {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!(
                path = %cli.config.display(),
                error = %err,
                "configuration file not loaded"
            );
            anyhow::bail!("could not read {}: {err}", cli.config.display());
        }
    };

    let mut graph = phasegraph_core::MultiPhaseGraph::new();
    phasegraph_config::load_into(&mut graph, &source)?;

    for _ in 0..cli.steps {
        let report = graph.step()?;
        println!(
            "phase_changed={} state_changed={} phase={} state={}",
            report.phase_changed,
            report.state_changed,
            report.phase_id.as_deref().unwrap_or("-"),
            report.state_id.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
