//! Configuration and session storage for the CrushPact CLI

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Default directory for session state
const CONFIG_DIR: &str = ".crushpact";
const SESSION_FILE: &str = "session.json";

/// Stored sign-in session
#[derive(Serialize, Deserialize, Clone)]
pub struct Session {
    /// Directory id of the signed-in user
    pub user_id: u32,
    /// Username at sign-in time
    pub username: String,
    /// Wallet signature over the sign-in message (base-58 encoded); all
    /// session keys are re-derived from this every run
    pub signature: String,
    /// Creation timestamp
    pub created_at: String,
}

impl Drop for Session {
    fn drop(&mut self) {
        self.signature.zeroize();
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Could not find home directory")
        .join(CONFIG_DIR)
}

/// Get the session file path
pub fn session_file() -> PathBuf {
    config_dir().join(SESSION_FILE)
}

/// Check if a session exists
pub fn session_exists() -> bool {
    session_file().exists()
}

/// Save the session to disk
pub fn save_session(session: &Session) -> Result<()> {
    save_session_to(&session_file(), session)
}

pub(crate) fn save_session_to(path: &Path, session: &Session) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(session)?;

    // Set restrictive permissions on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, &json)?;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, &json)?;
    }

    Ok(())
}

/// Load the session from disk
pub fn load_session() -> Result<Session> {
    load_session_from(&session_file())
}

pub(crate) fn load_session_from(path: &Path) -> Result<Session> {
    if !path.exists() {
        bail!("No session found. Run 'crushpact init' first.");
    }

    let json = fs::read_to_string(path).context("Failed to read session file")?;
    let session: Session = serde_json::from_str(&json).context("Failed to parse session file")?;

    Ok(session)
}

/// Load wallet keypair from file or the default Solana CLI location
pub fn load_wallet_keypair(path: Option<&str>) -> Result<solana_sdk::signature::Keypair> {
    let keypair_path = match path {
        Some(p) => PathBuf::from(p),
        None => {
            // Default Solana keypair location
            dirs::home_dir()
                .expect("Could not find home directory")
                .join(".config")
                .join("solana")
                .join("id.json")
        }
    };

    if !keypair_path.exists() {
        bail!(
            "Wallet keypair not found at {:?}. Generate one with 'solana-keygen new' or specify path with --keypair",
            keypair_path
        );
    }

    let keypair_bytes = fs::read_to_string(&keypair_path)?;
    let bytes: Vec<u8> = serde_json::from_str(&keypair_bytes)?;
    let keypair = solana_sdk::signature::Keypair::from_bytes(&bytes)?;

    Ok(keypair)
}
