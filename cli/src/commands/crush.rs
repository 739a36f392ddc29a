//! Submit a crush on a target user

use anyhow::{bail, Context, Result};
use colored::Colorize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::api::{ApiClient, UserRecord};
use crate::config::load_session;
use crate::crypto::{decode_identity_key, derive_pair, SessionKeys};
use crate::index::{find_by_tag, upsert_entry, CrushEntry, EntryStatus, TargetInfo};
use crate::payload::encrypt_payload;
use crate::relay::{build_submit_transaction, track_submission};
use crate::store::{HttpIndexStore, IndexStore};

pub async fn run(api_url: &str, rpc_url: &str, target: &str) -> Result<()> {
    println!("{}", "Preparing crush submission...".cyan());

    let session = load_session()?;
    let keys = SessionKeys::from_encoded_signature(&session.signature)
        .context("Stored session is unreadable; run 'crushpact init --force'")?;

    let api = ApiClient::new(api_url);
    let record = resolve_target(&api, target).await?;

    if record.id == session.user_id {
        bail!("Cannot submit a crush on yourself.");
    }

    let identity_encoded = match &record.identity_key {
        Some(key) => key.clone(),
        None => bail!(
            "'{}' has not linked a wallet yet, so no crush can reach them.",
            record.username
        ),
    };
    let target_key = decode_identity_key(&identity_encoded)?;

    // One stealth keypair and one pair secret per (us, them) direction
    let (stealth, pair) = derive_pair(&keys, &target_key)?;
    let tag_hex = hex::encode(pair.tag);

    let store = HttpIndexStore::new(api.clone(), session.user_id);
    let mut entries = store.load(keys.index_key()).await?;

    if let Some(existing) = find_by_tag(&entries, &tag_hex) {
        match &existing.status {
            EntryStatus::Mutual { .. } => {
                println!();
                println!(
                    "{}",
                    format!("Already mutual with {}!", record.username)
                        .green()
                        .bold()
                );
                return Ok(());
            }
            EntryStatus::Pending => {
                println!(
                    "{}",
                    format!("Resubmitting pending crush on {}...", record.username).yellow()
                );
            }
            other => bail!(
                "This pair is already settled ({}); nothing to submit.",
                other.label()
            ),
        }
    }

    let cipher = encrypt_payload(pair.key(), session.user_id, record.id, "")?;

    // Relayer fee-pays; we only need a fresh blockhash from RPC
    let fee_payer = api.fee_payer().await?;
    let rpc = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());
    let blockhash = rpc
        .get_latest_blockhash()
        .context("Failed to fetch a recent blockhash")?;

    let transaction = build_submit_transaction(&stealth, &fee_payer, &pair.tag, &cipher, blockhash)?;

    println!("Relaying submission...");
    let signature = api.relay_transaction(&transaction).await?;

    // Record the attempt before waiting on confirmation, so a crash here
    // cannot strand an unreadable on-chain slot
    let entry = CrushEntry::new(
        pair.tag,
        cipher,
        *pair.key(),
        TargetInfo {
            user_id: record.id,
            username: record.username.clone(),
            identity_key: identity_encoded,
        },
        Some(signature.clone()),
    );
    upsert_entry(&mut entries, entry);
    store.save(keys.index_key(), &entries).await?;

    println!("Waiting for confirmation...");
    track_submission(&api, &signature)
        .await
        .context("Submission did not confirm; re-check later with 'crushpact status'")?;

    println!();
    println!("{}", "Crush sealed and recorded on-chain.".green().bold());
    println!();
    println!("Target:    {} (#{})", record.username, record.id);
    println!("Tag:       {tag_hex}");
    println!("Submitted: {signature}");
    println!();
    println!(
        "{}",
        "Nobody learns a thing unless it's mutual. Check back with 'crushpact scan'.".dimmed()
    );

    Ok(())
}

/// Pick the target from the directory: exact username first, then a
/// numeric id match, then a lone candidate.
async fn resolve_target(api: &ApiClient, target: &str) -> Result<UserRecord> {
    let parsed_id = target.parse::<u32>().ok();
    let candidates = api
        .search_users(target)
        .await
        .context("Directory lookup failed")?;

    if let Some(record) = candidates
        .iter()
        .find(|user| user.username == target || parsed_id == Some(user.id))
    {
        return Ok(record.clone());
    }

    match candidates.len() {
        0 => bail!("No directory user matched '{target}'"),
        1 => Ok(candidates[0].clone()),
        _ => {
            println!("{}", "Ambiguous target. Candidates:".yellow());
            for user in &candidates {
                println!("  #{} {} ({})", user.id, user.username, user.display_name);
            }
            bail!("Give an exact username or numeric id");
        }
    }
}
