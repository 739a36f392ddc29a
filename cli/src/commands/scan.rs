//! Scan pending crushes for new mutual matches

use anyhow::{Context, Result};
use colored::Colorize;

use crate::api::ApiClient;
use crate::chain::RpcLedger;
use crate::config::load_session;
use crate::crypto::SessionKeys;
use crate::index::EntryStatus;
use crate::reconcile::reconcile_entries;
use crate::store::{HttpIndexStore, IndexStore};

pub async fn run(api_url: &str, rpc_url: &str) -> Result<()> {
    println!("{}", "Scanning for mutual matches...".cyan());

    let session = load_session()?;
    let keys = SessionKeys::from_encoded_signature(&session.signature)
        .context("Stored session is unreadable; run 'crushpact init --force'")?;

    let api = ApiClient::new(api_url);
    let store = HttpIndexStore::new(api, session.user_id);
    let mut entries = store.load(keys.index_key()).await?;

    if entries.is_empty() {
        println!();
        println!("{}", "No crushes submitted yet.".yellow());
        println!(
            "{}",
            "Start with 'crushpact search <name>' and 'crushpact crush <username>'.".dimmed()
        );
        return Ok(());
    }

    let pending = entries.iter().filter(|e| e.status.is_pending()).count();
    println!(
        "Checking {} pending of {} total submission(s)...",
        pending,
        entries.len()
    );

    let ledger = RpcLedger::new(rpc_url);
    let summary = reconcile_entries(&ledger, &mut entries).await?;

    if summary.newly_mutual > 0 || summary.anomalies > 0 {
        store.save(keys.index_key(), &entries).await?;
    }

    println!();

    if summary.newly_mutual > 0 {
        println!(
            "{}",
            format!("IT'S MUTUAL! {} new match(es):", summary.newly_mutual)
                .green()
                .bold()
        );
        println!();
    }

    for entry in &entries {
        if let EntryStatus::Mutual { our_id, their_id } = entry.status {
            println!(
                "  {} {} (#{})",
                "<3".green().bold(),
                entry.target.username,
                their_id
            );
            println!("     Their submission names you (#{our_id}) back.");
            println!();
        }
    }

    if summary.anomalies > 0 {
        println!(
            "{}",
            format!("{} pair(s) could not be read cleanly:", summary.anomalies).yellow()
        );
        for entry in &entries {
            if !entry.status.is_pending() && !matches!(entry.status, EntryStatus::Mutual { .. }) {
                println!(
                    "  {} -> {}",
                    entry.target.username,
                    entry.status.label().red()
                );
            }
        }
        println!();
    }

    if summary.newly_mutual == 0 && summary.anomalies == 0 {
        let still_pending = entries.iter().filter(|e| e.status.is_pending()).count();
        println!("{}", "No new matches.".yellow());
        println!(
            "{}",
            format!("{still_pending} crush(es) still waiting to be reciprocated.").dimmed()
        );
    }

    Ok(())
}
