//! Link a wallet and start a session

use anyhow::{bail, Context, Result};
use colored::Colorize;
use solana_sdk::signer::Signer;

use crate::api::ApiClient;
use crate::config::{load_wallet_keypair, save_session, session_exists, Session};
use crate::crypto::{SessionKeys, SIGNIN_MESSAGE};

pub async fn run(
    api_url: &str,
    keypair_path: Option<&str>,
    username: &str,
    force: bool,
) -> Result<()> {
    println!("{}", "Linking wallet to CrushPact...".cyan());

    if session_exists() && !force {
        bail!("Already signed in. Use --force to re-link.");
    }

    // Find ourselves in the directory
    let api = ApiClient::new(api_url);
    let candidates = api
        .search_users(username)
        .await
        .context("Directory lookup failed")?;

    let record = candidates
        .iter()
        .find(|user| user.username == username)
        .ok_or_else(|| anyhow::anyhow!("No directory user named '{username}'"))?;

    // Sign the fixed message; every session key comes from this signature
    let wallet = load_wallet_keypair(keypair_path)?;
    let signature = wallet.sign_message(SIGNIN_MESSAGE).to_string();

    // The directory must list this wallet for the claimed username
    match record.identity_key.as_deref() {
        Some(listed) if listed == wallet.pubkey().to_string() => {}
        Some(_) => bail!(
            "Directory lists a different wallet for '{username}'. \
             Sign in with the linked wallet or update the directory."
        ),
        None => bail!(
            "'{username}' has no linked wallet in the directory yet. \
             Link one through your account settings first."
        ),
    }

    let keys = SessionKeys::from_encoded_signature(&signature)?;

    save_session(&Session {
        user_id: record.id,
        username: record.username.clone(),
        signature,
        created_at: chrono::Utc::now().to_rfc3339(),
    })?;

    println!();
    println!("{}", "Signed in!".green().bold());
    println!();
    println!("Username:    {}", record.username);
    println!("User id:     {}", record.id);
    println!("Wallet:      {}", wallet.pubkey());
    println!("Fingerprint: {}", keys.fingerprint());
    println!();
    println!(
        "{}",
        "Find someone with 'crushpact search <name>', then 'crushpact crush <username>'.".dimmed()
    );

    Ok(())
}
