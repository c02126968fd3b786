//! TopoART CLI - learn a vector stream and inspect the resulting topology.

mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "topoart")]
#[command(author, version, about = "Streaming TopoART - online topology-learning clustering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (per-cycle trace)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default topoart.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Learn a stream of vectors and report the network
    Learn {
        /// CSV file (one vector per row) or JSON array of arrays
        path: String,

        /// Complement code each row before learning
        #[arg(short, long)]
        complement_code: bool,

        /// Write the topology snapshot as JSON to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Learn a stream and list the connected components
    Components {
        /// CSV file (one vector per row) or JSON array of arrays
        path: String,

        /// Complement code each row before learning
        #[arg(short, long)]
        complement_code: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Learn {
            path,
            complement_code,
            output,
        } => commands::learn::run(&path, complement_code, output.as_deref()),
        Commands::Components {
            path,
            complement_code,
        } => commands::components::run(&path, complement_code),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
