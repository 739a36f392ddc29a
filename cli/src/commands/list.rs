//! List all crush submissions and their states

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::api::ApiClient;
use crate::config::load_session;
use crate::crypto::SessionKeys;
use crate::index::EntryStatus;
use crate::store::{HttpIndexStore, IndexStore};

fn colored_label(status: &EntryStatus) -> ColoredString {
    match status {
        EntryStatus::Pending => status.label().yellow(),
        EntryStatus::Mutual { .. } => status.label().green().bold(),
        _ => status.label().red(),
    }
}

pub async fn run(api_url: &str) -> Result<()> {
    let session = load_session()?;
    let keys = SessionKeys::from_encoded_signature(&session.signature)
        .context("Stored session is unreadable; run 'crushpact init --force'")?;

    let api = ApiClient::new(api_url);
    let store = HttpIndexStore::new(api, session.user_id);
    let entries = store.load(keys.index_key()).await?;

    println!();
    println!(
        "{}",
        format!("Crushes for {} (#{})", session.username, session.user_id)
            .yellow()
            .bold()
    );
    println!();

    if entries.is_empty() {
        println!("{}", "No crushes yet.".yellow());
        println!(
            "{}",
            "Submit one with 'crushpact crush <username>'.".dimmed()
        );
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{}. {} (#{}) [{}]",
            i + 1,
            entry.target.username,
            entry.target.user_id,
            colored_label(&entry.status)
        );
        println!("   Submitted: {}", entry.created_at);
        if let Some(signature) = &entry.submit_signature {
            println!("   {}", format!("Tx: {signature}").dimmed());
        }
        println!();
    }

    let mutual = entries
        .iter()
        .filter(|e| matches!(e.status, EntryStatus::Mutual { .. }))
        .count();
    let pending = entries.iter().filter(|e| e.status.is_pending()).count();

    println!(
        "{}",
        format!(
            "{} total: {} mutual, {} pending",
            entries.len(),
            mutual,
            pending
        )
        .green()
        .bold()
    );

    if pending > 0 {
        println!();
        println!(
            "{}",
            "Run 'crushpact scan' to re-check pending submissions.".dimmed()
        );
    }

    Ok(())
}
