// Copyright 2026 Lexiscope Contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, unused_imports)]

use anyhow::Result;
use clap::{Parser, Subcommand};

mod aggregate;
mod cli;
mod extract;
mod fetch;
mod model;
mod panel;
mod sources;

#[derive(Parser)]
#[command(
    name = "lexiscope",
    about = "Lexiscope — synonyms, definitions, and etymology in one lookup",
    version,
    after_help = "Run 'lexiscope lookup <word>' to aggregate all sources for a word."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word: synonyms, definitions, and etymology
    Lookup {
        /// Word or phrase to look up
        word: String,
        /// Per-request timeout in milliseconds
        #[arg(long, default_value = "10000")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("LEXISCOPE_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("LEXISCOPE_QUIET", "1");
    }

    let directive = if cli.verbose {
        "lexiscope=debug"
    } else {
        "lexiscope=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Lookup { word, timeout } => cli::lookup_cmd::run(&word, timeout).await,
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
