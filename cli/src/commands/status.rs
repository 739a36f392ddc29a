//! Check relay status of submissions

use anyhow::{Context, Result};
use colored::Colorize;

use crate::api::{ApiClient, RelayStatus};
use crate::config::load_session;
use crate::crypto::SessionKeys;
use crate::store::{HttpIndexStore, IndexStore};

fn print_status(signature: &str, status: &RelayStatus) {
    let word = match status {
        RelayStatus::Pending => "PENDING".yellow(),
        RelayStatus::Confirmed => "CONFIRMED".green().bold(),
        RelayStatus::Failed { .. } => "FAILED".red().bold(),
    };
    println!("  {word}  {signature}");
    if let RelayStatus::Failed { reason } = status {
        println!("           {}", reason.red());
    }
}

pub async fn run(api_url: &str, signature: Option<&str>) -> Result<()> {
    let api = ApiClient::new(api_url);

    // A specific signature needs no session at all
    if let Some(signature) = signature {
        println!("{}", "Checking relay status...".cyan());
        let status = api.transaction_status(signature).await?;
        println!();
        print_status(signature, &status);
        return Ok(());
    }

    // Otherwise walk every pending submission in the index
    let session = load_session()?;
    let keys = SessionKeys::from_encoded_signature(&session.signature)
        .context("Stored session is unreadable; run 'crushpact init --force'")?;

    let store = HttpIndexStore::new(api.clone(), session.user_id);
    let entries = store.load(keys.index_key()).await?;

    let tracked: Vec<_> = entries
        .iter()
        .filter(|entry| entry.status.is_pending())
        .filter_map(|entry| entry.submit_signature.as_deref())
        .collect();

    if tracked.is_empty() {
        println!("{}", "No pending submissions to check.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Checking {} pending submission(s)...", tracked.len()).cyan()
    );
    println!();

    for signature in tracked {
        let status = api.transaction_status(signature).await?;
        print_status(signature, &status);
    }

    println!();
    println!(
        "{}",
        "Confirmed submissions become matches only via 'crushpact scan'.".dimmed()
    );

    Ok(())
}
