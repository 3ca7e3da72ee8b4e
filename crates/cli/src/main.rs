//! Shopwindow CLI - Interactive terminal catalog browser.
//!
//! # Usage
//!
//! ```bash
//! # Browse the default catalog (https://fakestoreapi.com)
//! shopwindow
//!
//! # Browse a different catalog endpoint
//! shopwindow browse --base-url http://localhost:9000
//! ```
//!
//! # Session commands
//!
//! - `search <term>` - filter titles by a case-insensitive substring
//! - `category <name|all>` - filter by exact category
//! - `sort <none|asc|desc>` - sort by price
//! - `fav <id>` - toggle a favorite (persisted across sessions)
//! - `categories` - list available categories
//! - `clear` - reset search and category
//! - `retry` - reload the catalog after a failure
//! - `quit` - leave the session

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is the product here, not incidental debugging
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shopwindow")]
#[command(author, version, about = "Shopwindow terminal catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively (default)
    Browse {
        /// Override the catalog API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to info for our crates if RUST_LOG is unset
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopwindow=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Browse { base_url }) => commands::browse::run(base_url.as_deref()).await?,
        None => commands::browse::run(None).await?,
    }
    Ok(())
}
