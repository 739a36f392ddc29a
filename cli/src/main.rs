//! CrushPact CLI - Command line interface for mutual crush discovery

// Clippy allows for the CLI crate
// needless_borrow warnings are common with dalek/solana-sdk ergonomics
#![allow(clippy::needless_borrows_for_generic_args)]
#![allow(clippy::needless_borrow)]
#![allow(dead_code)] // Public API items may not be used internally

use anyhow::Result;
use clap::{Parser, Subcommand};

mod api;
mod chain;
mod commands;
mod config;
mod crypto;
mod error;
mod index;
mod payload;
mod reconcile;
mod relay;
mod store;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod test_vectors;

#[cfg(test)]
mod fuzz_tests;

#[cfg(test)]
mod integration_tests;

use commands::*;

#[derive(Parser)]
#[command(name = "crushpact")]
#[command(version = "0.1.0")]
#[command(about = "Mutual crush discovery on Solana - nothing is revealed unless it's mutual")]
#[command(long_about = r#"
CrushPact lets you declare a crush that stays secret unless it is
reciprocated. Submissions ride one-time stealth keys and land in a
two-slot on-chain account addressed by an unlinkable tag; only when
both sides have submitted can either of them read the other's slot.

Quick Start:
  1. crushpact init --username you    Link your wallet
  2. crushpact search ada             Find someone
  3. crushpact crush ada              Submit your crush
  4. crushpact scan                   See if it's mutual
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend API base URL
    #[arg(long, global = true, default_value = "https://api.crushpact.app")]
    api_url: String,

    /// Solana RPC URL
    #[arg(long, global = true, default_value = "https://api.devnet.solana.com")]
    rpc_url: String,

    /// Path to wallet keypair file
    #[arg(long, global = true)]
    keypair: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Link your wallet and start a session
    Init {
        /// Your directory username
        #[arg(short, long)]
        username: String,

        /// Re-link over an existing session
        #[arg(short, long)]
        force: bool,
    },

    /// Search the user directory
    Search {
        /// Username or display-name fragment
        query: String,
    },

    /// Submit a crush on a user
    Crush {
        /// Target username or numeric id
        target: String,
    },

    /// Check pending crushes for new mutual matches
    Scan,

    /// List all your submissions and their states
    List,

    /// Check relay status of submissions
    Status {
        /// Specific transaction signature (default: all pending)
        #[arg(short, long)]
        signature: Option<String>,
    },

    /// Show configuration and session info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { username, force } => {
            init::run(&cli.api_url, cli.keypair.as_deref(), &username, force).await?;
        }
        Commands::Search { query } => {
            search::run(&cli.api_url, &query).await?;
        }
        Commands::Crush { target } => {
            crush::run(&cli.api_url, &cli.rpc_url, &target).await?;
        }
        Commands::Scan => {
            scan::run(&cli.api_url, &cli.rpc_url).await?;
        }
        Commands::List => {
            list::run(&cli.api_url).await?;
        }
        Commands::Status { signature } => {
            status::run(&cli.api_url, signature.as_deref()).await?;
        }
        Commands::Info => {
            info::run(&cli.api_url, &cli.rpc_url)?;
        }
    }

    Ok(())
}
