//! Show configuration and session info

use anyhow::Result;
use colored::Colorize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, signer::Signer};

use crate::chain::PROGRAM_ID;
use crate::config::{config_dir, load_session, load_wallet_keypair, session_file};
use crate::crypto::SessionKeys;

pub fn run(api_url: &str, rpc_url: &str) -> Result<()> {
    println!();
    println!("{}", "CrushPact Configuration".yellow().bold());
    println!();

    // Session info
    println!("{}:", "Session".cyan());
    match load_session() {
        Ok(session) => {
            println!("  {}", "ACTIVE".green());
            println!("  Username: {} (#{})", session.username, session.user_id);
            println!("  Since:    {}", session.created_at);
            match SessionKeys::from_encoded_signature(&session.signature) {
                Ok(keys) => println!("  Keys:     {}", keys.fingerprint()),
                Err(_) => println!("  Keys:     {}", "UNREADABLE (re-run init)".red()),
            }
        }
        Err(_) => {
            println!("  {}", "NOT CONFIGURED".red());
            println!("  Run 'crushpact init --username <name>' to sign in");
        }
    }
    println!();

    // Wallet
    println!("{}:", "Wallet".cyan());
    if let Ok(keypair) = load_wallet_keypair(None) {
        println!("  Address: {}", keypair.pubkey());

        // Try to get balance
        let client = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());
        if let Ok(balance) = client.get_balance(&keypair.pubkey()) {
            println!("  Balance: {} SOL", balance as f64 / 1_000_000_000.0);
        }
    } else {
        println!("  {}", "NOT CONFIGURED".red());
        println!("  Run 'solana-keygen new' to create a wallet");
    }
    println!();

    // Endpoints
    println!("{}:", "Endpoints".cyan());
    println!("  Backend: {api_url}");
    println!("  RPC:     {rpc_url}");
    println!();

    // Program ID
    println!("{}:", "Program ID".cyan());
    println!("  {PROGRAM_ID}");
    println!();

    // File locations
    println!("{}:", "File Locations".cyan());
    println!("  Config:  {}", config_dir().display());
    println!("  Session: {}", session_file().display());

    Ok(())
}
