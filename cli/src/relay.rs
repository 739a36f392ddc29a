//! Submission transactions and relay tracking
//!
//! A submission is signed by the one-time stealth keypair and fee-paid
//! by the relayer, so the caller's wallet never touches the chain. The
//! client builds the transaction with the relayer as fee payer, signs
//! only its own slot, and hands the serialized result to the backend;
//! the relayer countersigns and broadcasts.

use std::str::FromStr;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
    transaction::Transaction,
};

use crate::api::{ApiClient, RelayStatus};
use crate::chain::{match_account_address, program_id};
use crate::crypto::StealthKeypair;
use crate::error::{CrushError, Result};
use crate::payload::CIPHER_SIZE;

/// submit_crush discriminator (sha256("global:submit_crush")[..8])
const SUBMIT_CRUSH_DISCRIMINATOR: [u8; 8] = [14, 193, 87, 181, 48, 255, 172, 112];

/// Delay between relay status polls
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Polls before giving up on a submission
pub const MAX_POLL_ATTEMPTS: u32 = 30;

/// Build and partially sign a submission, returning the base64
/// serialization the relay endpoint accepts.
///
/// The relayer's fee-payer signature slot is left empty; only the
/// stealth keypair signs here.
pub fn build_submit_transaction(
    stealth: &StealthKeypair,
    fee_payer: &str,
    tag: &[u8; 32],
    cipher: &[u8; CIPHER_SIZE],
    recent_blockhash: Hash,
) -> Result<String> {
    let keypair = stealth.to_solana_keypair()?;
    let fee_payer = Pubkey::from_str(fee_payer)
        .map_err(|e| CrushError::RelayError(format!("relayer fee payer address invalid: {e}")))?;

    let pair_account = match_account_address(tag)?;

    let mut data = Vec::with_capacity(8 + 32 + CIPHER_SIZE);
    data.extend_from_slice(&SUBMIT_CRUSH_DISCRIMINATOR);
    data.extend_from_slice(tag);
    data.extend_from_slice(cipher);

    let instruction = Instruction {
        program_id: program_id()?,
        accounts: vec![
            AccountMeta::new(pair_account, false),
            AccountMeta::new(Pubkey::new_from_array(stealth.public), true),
            AccountMeta::new(fee_payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    };

    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&fee_payer));
    transaction.partial_sign(&[&keypair], recent_blockhash);

    let serialized = bincode::serialize(&transaction)
        .map_err(|e| CrushError::RelayError(format!("transaction encode failed: {e}")))?;

    Ok(STANDARD.encode(serialized))
}

/// Where a tracked submission landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Confirmed,
    Failed { reason: String },
    TimedOut { last_error: Option<String> },
}

/// Bounded poll state for one relayed submission.
///
/// Each `tick` consumes one status observation and either stays quiet or
/// lands on a terminal outcome. A landed poller never fires again, so
/// whatever drives it (a timer loop here, a bare loop in tests) can stop
/// on the first `Some` without double-handling.
pub struct StatusPoller {
    attempts_left: u32,
    last_error: Option<String>,
    done: bool,
}

impl StatusPoller {
    pub fn new() -> Self {
        Self {
            attempts_left: MAX_POLL_ATTEMPTS,
            last_error: None,
            done: false,
        }
    }

    /// Advance by one observation.
    ///
    /// A fetch error is treated like a pending poll and retained for the
    /// timeout message; a later clean pending observation clears it.
    pub fn tick(&mut self, observed: Result<RelayStatus>) -> Option<PollOutcome> {
        if self.done {
            return None;
        }

        match observed {
            Ok(RelayStatus::Confirmed) => {
                self.done = true;
                return Some(PollOutcome::Confirmed);
            }
            Ok(RelayStatus::Failed { reason }) => {
                self.done = true;
                return Some(PollOutcome::Failed { reason });
            }
            Ok(RelayStatus::Pending) => self.last_error = None,
            Err(e) => self.last_error = Some(e.to_string()),
        }

        self.attempts_left -= 1;
        if self.attempts_left == 0 {
            self.done = true;
            return Some(PollOutcome::TimedOut {
                last_error: self.last_error.take(),
            });
        }
        None
    }
}

impl Default for StatusPoller {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a fresh poller against the relay until it lands.
pub async fn track_submission(api: &ApiClient, signature: &str) -> Result<()> {
    let mut poller = StatusPoller::new();

    loop {
        let observed = api.transaction_status(signature).await;
        match poller.tick(observed) {
            Some(PollOutcome::Confirmed) => return Ok(()),
            Some(PollOutcome::Failed { reason }) => {
                return Err(CrushError::RelayError(format!(
                    "submission failed on-chain: {reason}"
                )))
            }
            Some(PollOutcome::TimedOut { last_error }) => {
                let detail = match last_error {
                    Some(e) => format!(" (last error: {e})"),
                    None => String::new(),
                };
                return Err(CrushError::RelayError(format!(
                    "submission not confirmed after {MAX_POLL_ATTEMPTS} polls{detail}"
                )));
            }
            None => tokio::time::sleep(POLL_INTERVAL).await,
        }
    }
}
