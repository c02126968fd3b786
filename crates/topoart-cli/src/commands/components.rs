//! List connected components of the learned topology.

use anyhow::Result;
use colored::Colorize;

use super::train;

pub fn run(path: &str, complement: bool) -> Result<()> {
    let net = train(path, complement)?;
    let components = net.connected_components();

    println!(
        "{} {} connected components over {} prototypes:",
        "→".blue(),
        components.len().to_string().cyan(),
        net.prototypes().len()
    );
    println!();

    for (i, members) in components.iter().enumerate() {
        let tags: Vec<&str> = members.iter().map(|t| t.as_str()).collect();
        println!(
            "  {} {} {}",
            format!("{}.", i + 1).blue(),
            tags.join(", ").white().bold(),
            format!("({} prototypes)", members.len()).dimmed()
        );
    }

    Ok(())
}
