mod browse;
mod graph;
mod tui;

use anyhow::{Result, bail};
use clap::Parser;

use crate::graph::random::{self, DemoConfig};

#[derive(Parser)]
#[command(
    name = "rove",
    about = "Interactive terminal browser for directed graphs"
)]
struct Cli {
    /// Number of vertices in the generated graph
    #[arg(long, default_value_t = 12)]
    vertices: usize,
    /// Number of edge draws (duplicates collapse, so this is an upper bound)
    #[arg(long, default_value_t = 40)]
    edges: usize,
    /// Shortest vertex label
    #[arg(long, default_value_t = 4)]
    min_label: usize,
    /// Longest vertex label
    #[arg(long, default_value_t = 12)]
    max_label: usize,
    /// Seed for a reproducible graph
    #[arg(long)]
    seed: Option<u64>,
}

fn validate(cli: &Cli) -> Result<()> {
    if cli.vertices == 0 {
        bail!("--vertices must be at least 1");
    }
    if cli.min_label == 0 {
        bail!("--min-label must be at least 1");
    }
    if cli.max_label < cli.min_label {
        bail!("--max-label must not be smaller than --min-label");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    validate(&cli)?;

    let store = random::generate(DemoConfig {
        vertices: cli.vertices,
        edges: cli.edges,
        min_label: cli.min_label,
        max_label: cli.max_label,
        seed: cli.seed,
    });

    tui::session::run(store)
}
