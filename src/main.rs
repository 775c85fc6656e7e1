// Copyright 2026 Termscout Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{Parser, Subcommand};
use termscout::cli;

#[derive(Parser)]
#[command(
    name = "termscout",
    about = "Termscout — scrape key academic dates from calendar pages",
    version
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
    /// Scrape a page (URL or local HTML file) for key dates
    Scrape {
        /// URL or path of the page to scrape
        target: String,
        /// Persist the results to the local date store
        #[arg(long)]
        save: bool,
        /// HTTP timeout in milliseconds
        #[arg(long, default_value = "10000")]
        timeout: u64,
    },
    /// Show stored date collections
    List {
        /// Only the collection for this URL (omit to list all)
        url: Option<String>,
    },
    /// Remove stored date collections (all of them when no URL is given)
    Clear {
        /// Only the collection for this URL
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "termscout=debug"
    } else {
        "termscout=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("directive is valid")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scrape {
            target,
            save,
            timeout,
        } => cli::scrape_cmd::run(&target, save, timeout, cli.json, cli.quiet).await,
        Commands::List { url } => cli::list_cmd::run(url.as_deref(), cli.json, cli.quiet),
        Commands::Clear { url } => cli::clear_cmd::run(url.as_deref(), cli.quiet),
    }
}
