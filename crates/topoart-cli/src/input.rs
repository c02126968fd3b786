//! Reading input vectors from disk.
//!
//! `.json` files hold an array of arrays; anything else is read as CSV
//! with one vector per row. Blank lines and `#` comments are skipped,
//! and a first row with no numeric field at all is treated as a header.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

pub fn read_vectors(path: &Path) -> Result<Vec<Vec<f64>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let rows = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON vectors: {}", path.display()))?
    } else {
        parse_csv(&content).with_context(|| format!("Failed to parse CSV: {}", path.display()))?
    };
    info!(rows = rows.len(), path = %path.display(), "loaded input vectors");
    Ok(rows)
}

pub fn parse_csv(content: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    let lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    for (n, (line_no, line)) in lines.enumerate() {
        match parse_row(line) {
            Some(row) => rows.push(row),
            None if n == 0 && is_header(line) => continue,
            None => bail!("line {line_no}: expected comma-separated numbers, got {line:?}"),
        }
    }
    Ok(rows)
}

fn parse_row(line: &str) -> Option<Vec<f64>> {
    line.split(',')
        .map(|field| field.trim().parse::<f64>().ok())
        .collect()
}

fn is_header(line: &str) -> bool {
    line.split(',').all(|field| field.trim().parse::<f64>().is_err())
}
