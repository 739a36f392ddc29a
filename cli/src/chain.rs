//! Ledger-side view of a crush pair
//!
//! The on-chain program owns the authoritative two-slot account. This
//! module mirrors that state as a tagged machine, decodes raw account
//! bytes, derives the pair address for a routing tag, and puts the fetch
//! behind `MatchLedger` so reconciliation runs identically against live
//! RPC or an in-memory fake.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use borsh::BorshDeserialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::error::{CrushError, Result};
use crate::payload::CIPHER_SIZE;

/// Program that owns every crush pair account
pub const PROGRAM_ID: &str = "BXYvz9iasM3rWTE4aJepmaQ4hgFhbf1keSewhhhoEt1B";

/// PDA seed prefix, shared with the on-chain program
pub const MATCH_SEED: &[u8] = b"crush";

/// Account-format discriminator the runtime prepends; opaque here,
/// stripped before decoding
const DISCRIMINATOR_SIZE: usize = 8;

/// Client-side twin of the program's account layout, minus discriminator
#[derive(BorshDeserialize)]
struct RawMatchAccount {
    _bump: u8,
    filled: u8,
    cipher_one: [u8; 48],
    cipher_two: [u8; 48],
}

/// Fill state of one pair account
///
/// The transition walks `Empty -> OneSided -> Mutual` and stops; the
/// variants make "which slots exist" a compile-time question instead of
/// a counter to re-check everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    /// No submissions recorded
    Empty,
    /// One side has submitted
    OneSided { first: [u8; CIPHER_SIZE] },
    /// Both sides have submitted; terminal
    Mutual {
        first: [u8; CIPHER_SIZE],
        second: [u8; CIPHER_SIZE],
    },
}

impl MatchState {
    pub fn fill(&self) -> u8 {
        match self {
            MatchState::Empty => 0,
            MatchState::OneSided { .. } => 1,
            MatchState::Mutual { .. } => 2,
        }
    }

    /// Write-if-capacity transition, mirroring the program's rule: first
    /// write to slot one, second to slot two, anything later rejected.
    pub fn submit(self, cipher: [u8; CIPHER_SIZE]) -> Result<MatchState> {
        match self {
            MatchState::Empty => Ok(MatchState::OneSided { first: cipher }),
            MatchState::OneSided { first } => Ok(MatchState::Mutual {
                first,
                second: cipher,
            }),
            MatchState::Mutual { .. } => Err(CrushError::ReciprocityViolation(
                "pair account already holds two submissions".into(),
            )),
        }
    }

    /// Decode raw account bytes into pair state.
    pub fn from_account_bytes(data: &[u8]) -> Result<MatchState> {
        if data.len() < DISCRIMINATOR_SIZE {
            return Err(CrushError::ChainStateError(format!(
                "account data of {} bytes is shorter than the discriminator",
                data.len()
            )));
        }

        let raw = RawMatchAccount::try_from_slice(&data[DISCRIMINATOR_SIZE..])
            .map_err(|e| CrushError::ChainStateError(format!("account layout mismatch: {e}")))?;

        match raw.filled {
            0 => Ok(MatchState::Empty),
            1 => Ok(MatchState::OneSided {
                first: raw.cipher_one,
            }),
            2 => Ok(MatchState::Mutual {
                first: raw.cipher_one,
                second: raw.cipher_two,
            }),
            other => Err(CrushError::ChainStateError(format!(
                "fill count {other} is out of range"
            ))),
        }
    }

    /// Both slots, available only once the pair is mutual
    pub fn slots(&self) -> Option<(&[u8; CIPHER_SIZE], &[u8; CIPHER_SIZE])> {
        match self {
            MatchState::Mutual { first, second } => Some((first, second)),
            _ => None,
        }
    }
}

/// The program id, parsed
pub fn program_id() -> Result<Pubkey> {
    Pubkey::from_str(PROGRAM_ID)
        .map_err(|e| CrushError::ChainStateError(format!("bad program id constant: {e}")))
}

/// Derive the pair account address for a routing tag
pub fn match_account_address(tag: &[u8; 32]) -> Result<Pubkey> {
    let program_id = program_id()?;
    let (address, _bump) = Pubkey::find_program_address(&[MATCH_SEED, tag], &program_id);
    Ok(address)
}

// ============================================================================
// Ledger Interface
// ============================================================================

/// Read side of the ledger, as reconciliation sees it
#[async_trait]
pub trait MatchLedger {
    /// Fetch pair state for a tag; `None` when the account does not exist
    async fn fetch_match(&self, tag: &[u8; 32]) -> Result<Option<MatchState>>;
}

/// RPC-backed ledger reader
pub struct RpcLedger {
    client: RpcClient,
}

impl RpcLedger {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            client: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
        }
    }
}

#[async_trait]
impl MatchLedger for RpcLedger {
    async fn fetch_match(&self, tag: &[u8; 32]) -> Result<Option<MatchState>> {
        let address = match_account_address(tag)?;
        let response = self
            .client
            .get_account_with_commitment(&address, CommitmentConfig::confirmed())
            .map_err(|e| CrushError::ChainStateError(format!("account fetch failed: {e}")))?;

        match response.value {
            Some(account) => Ok(Some(MatchState::from_account_bytes(&account.data)?)),
            None => Ok(None),
        }
    }
}

/// In-memory ledger enforcing the same capacity rules, for tests
#[derive(Default)]
pub struct MemoryLedger {
    accounts: Mutex<HashMap<[u8; 32], MatchState>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a submission the way the program would
    pub fn submit(&self, tag: [u8; 32], cipher: [u8; CIPHER_SIZE]) -> Result<()> {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|_| CrushError::ChainStateError("ledger lock poisoned".into()))?;

        let current = accounts.entry(tag).or_insert(MatchState::Empty);
        let next = current.clone().submit(cipher)?;
        *current = next;
        Ok(())
    }
}

#[async_trait]
impl MatchLedger for MemoryLedger {
    async fn fetch_match(&self, tag: &[u8; 32]) -> Result<Option<MatchState>> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| CrushError::ChainStateError("ledger lock poisoned".into()))?;
        Ok(accounts.get(tag).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_bytes(bump: u8, filled: u8, one: [u8; 48], two: [u8; 48]) -> Vec<u8> {
        let mut data = vec![0u8; DISCRIMINATOR_SIZE];
        data.push(bump);
        data.push(filled);
        data.extend_from_slice(&one);
        data.extend_from_slice(&two);
        data
    }

    #[test]
    fn test_submit_walks_empty_to_mutual_in_order() {
        let first = [0x01u8; 48];
        let second = [0x02u8; 48];

        let state = MatchState::Empty.submit(first).unwrap();
        assert_eq!(state, MatchState::OneSided { first });

        let state = state.submit(second).unwrap();
        assert_eq!(state, MatchState::Mutual { first, second });
        assert_eq!(state.fill(), 2);
    }

    #[test]
    fn test_third_submit_is_reciprocity_violation() {
        let state = MatchState::Mutual {
            first: [0x01u8; 48],
            second: [0x02u8; 48],
        };

        let result = state.submit([0x03u8; 48]);
        assert!(matches!(result, Err(CrushError::ReciprocityViolation(_))));
    }

    #[test]
    fn test_decode_each_fill_level() {
        let one = [0xAAu8; 48];
        let two = [0xBBu8; 48];

        let state = MatchState::from_account_bytes(&account_bytes(7, 0, [0; 48], [0; 48])).unwrap();
        assert_eq!(state, MatchState::Empty);

        let state = MatchState::from_account_bytes(&account_bytes(7, 1, one, [0; 48])).unwrap();
        assert_eq!(state, MatchState::OneSided { first: one });

        let state = MatchState::from_account_bytes(&account_bytes(7, 2, one, two)).unwrap();
        assert_eq!(state, MatchState::Mutual { first: one, second: two });
    }

    #[test]
    fn test_decode_rejects_out_of_range_fill() {
        let result = MatchState::from_account_bytes(&account_bytes(7, 3, [0; 48], [0; 48]));
        assert!(matches!(result, Err(CrushError::ChainStateError(_))));
    }

    #[test]
    fn test_decode_rejects_short_data() {
        let result = MatchState::from_account_bytes(&[0u8; 4]);
        assert!(matches!(result, Err(CrushError::ChainStateError(_))));

        // Discriminator alone is not an account either.
        let result = MatchState::from_account_bytes(&[0u8; DISCRIMINATOR_SIZE]);
        assert!(matches!(result, Err(CrushError::ChainStateError(_))));
    }

    #[test]
    fn test_pair_address_deterministic_per_tag() {
        let tag_a = [0x11u8; 32];
        let tag_b = [0x12u8; 32];

        assert_eq!(
            match_account_address(&tag_a).unwrap(),
            match_account_address(&tag_a).unwrap()
        );
        assert_ne!(
            match_account_address(&tag_a).unwrap(),
            match_account_address(&tag_b).unwrap()
        );
    }

    #[tokio::test]
    async fn test_memory_ledger_capacity_rules() {
        let ledger = MemoryLedger::new();
        let tag = [0x21u8; 32];
        let first = [0x01u8; 48];
        let second = [0x02u8; 48];

        assert_eq!(ledger.fetch_match(&tag).await.unwrap(), None);

        ledger.submit(tag, first).unwrap();
        assert_eq!(
            ledger.fetch_match(&tag).await.unwrap(),
            Some(MatchState::OneSided { first })
        );

        ledger.submit(tag, second).unwrap();
        assert_eq!(
            ledger.fetch_match(&tag).await.unwrap(),
            Some(MatchState::Mutual { first, second })
        );

        // A rejected third write leaves the account unchanged.
        let result = ledger.submit(tag, [0x03u8; 48]);
        assert!(matches!(result, Err(CrushError::ReciprocityViolation(_))));
        assert_eq!(
            ledger.fetch_match(&tag).await.unwrap(),
            Some(MatchState::Mutual { first, second })
        );
    }

    #[test]
    fn test_slots_only_when_mutual() {
        assert!(MatchState::Empty.slots().is_none());
        assert!(MatchState::OneSided { first: [0; 48] }.slots().is_none());

        let state = MatchState::Mutual {
            first: [0x01u8; 48],
            second: [0x02u8; 48],
        };
        let (first, second) = state.slots().unwrap();
        assert_eq!(first, &[0x01u8; 48]);
        assert_eq!(second, &[0x02u8; 48]);
    }
}
