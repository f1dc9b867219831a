//! tcview CLI - inspect a Java toolchain the way build extensions see it

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("tcview=debug")
    } else {
        EnvFilter::new("tcview=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Show(args) => commands::show::execute(args, color),
        Commands::Get(args) => commands::get::execute(args, color),
        Commands::Fields => commands::fields::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
