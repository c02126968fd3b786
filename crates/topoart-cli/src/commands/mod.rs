//! CLI command implementations.

pub mod init;
pub mod learn;
pub mod components;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use topoart::prelude::*;

use crate::config::Config;
use crate::input::read_vectors;

/// Load config and inputs, then learn every row in order.
pub(crate) fn train(path: &str, complement: bool) -> Result<StreamingTopoArt> {
    let config = Config::load()?;
    let complement = complement || config.input.complement_code;
    let rows = read_vectors(Path::new(path))?;

    println!(
        "{} Learning {} vectors from {}...",
        "→".blue(),
        rows.len().to_string().cyan(),
        path
    );

    let mut net = StreamingTopoArt::new(config.network)?;
    for (i, row) in rows.iter().enumerate() {
        let input = if complement {
            complement_code(row)
        } else {
            row.clone()
        };
        net.learn(&input)
            .with_context(|| format!("Failed to learn row {}", i + 1))?;
    }
    Ok(net)
}
