//! Lychee CLI - draft composition and price tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a group draft and print the finalized payloads
//! lychee compose --file drafts/lyphone-15.json
//!
//! # Lenient surface (single named color allowed), pretty output
//! lychee compose --file draft.json --lenient --pretty
//!
//! # Also build the group request once the creation calls returned ids
//! lychee compose --file draft.json --ids p-101,p-102
//!
//! # Price codec utilities
//! lychee price encode 1000000
//! lychee price decode "1.000.000₫"
//! ```
//!
//! # Commands
//!
//! - `compose` - Replay a JSON group draft through the variant engine
//! - `price` - Encode/decode đồng display prices

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lychee")]
#[command(author, version, about = "Lychee catalog authoring tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a group draft through the variant engine
    Compose {
        /// Path to the JSON group draft
        #[arg(short, long)]
        file: String,

        /// Accept a single named color (public-surface policy)
        #[arg(long)]
        lenient: bool,

        /// Comma-separated product ids returned by the creation calls,
        /// in draft order; enables the group request output
        #[arg(long)]
        ids: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Price codec utilities
    Price {
        #[command(subcommand)]
        action: PriceAction,
    },
}

#[derive(Subcommand)]
enum PriceAction {
    /// Format a raw amount for display
    Encode {
        /// Raw numeric amount (e.g. 1000000)
        raw: String,
    },
    /// Parse a display price back to an integer
    Decode {
        /// Display price (e.g. "1.000.000₫")
        display: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Compose {
            file,
            lenient,
            ids,
            pretty,
        } => {
            let ids: Option<Vec<String>> = ids
                .map(|list| list.split(',').map(|id| id.trim().to_owned()).collect());
            commands::compose::run(&file, lenient, ids.as_deref(), pretty)?;
        }
        Commands::Price { action } => match action {
            PriceAction::Encode { raw } => commands::price::encode(&raw),
            PriceAction::Decode { display } => commands::price::decode(&display),
        },
    }
    Ok(())
}
