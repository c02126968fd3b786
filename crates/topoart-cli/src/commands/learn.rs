//! Learn a vector stream and report the resulting network.

use anyhow::{Context, Result};
use colored::Colorize;
use topoart::prelude::*;

use super::train;

pub fn run(path: &str, complement: bool, output: Option<&str>) -> Result<()> {
    let net = train(path, complement)?;
    let stats = net.stats();

    println!();
    println!("{}", "Network".white().bold());
    println!("  {:<16} {}", "cycles", stats.cycle.to_string().cyan());
    println!("  {:<16} {}", "prototypes", stats.prototypes.to_string().cyan());
    println!("  {:<16} {}", "edges", stats.edges.to_string().cyan());
    println!("  {:<16} {}", "components", stats.components.to_string().cyan());
    println!("  {:<16} {}", "created", stats.total_created.to_string().dimmed());
    println!("  {:<16} {}", "pruned", stats.total_pruned.to_string().dimmed());

    if let Some(output) = output {
        let json = TopologySnapshot::capture(&net)
            .to_json()
            .context("Failed to serialize topology snapshot")?;
        std::fs::write(output, json).with_context(|| format!("Failed to write {output}"))?;
        println!();
        println!("{} Wrote topology snapshot to {}", "✓".green(), output.cyan());
    }

    Ok(())
}
