//! utilikit demo binary.
//!
//! Subcommands:
//! - `demo`: exercise the printing, text, and file modules
//! - `serve`: blocking single-client TCP echo server
//! - `connect`: matching TCP echo client

mod config;
mod demo;

use clap::Parser;
use config::{CliArgs, DemoCommand};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match args.command {
        DemoCommand::Demo => demo::run_demo(),
        DemoCommand::Serve { port } => demo::run_server(port)?,
        DemoCommand::Connect { host, port } => demo::run_client(&host, port)?,
    }

    Ok(())
}
