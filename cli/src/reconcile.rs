//! Match reconciliation
//!
//! A scan walks every pending attempt, fetches its pair account, and
//! decides what the fill level means for this side. Until both slots are
//! filled nothing is learned and nothing is decrypted; once the pair is
//! full, our own slot is located by cipher comparison and the other slot
//! is opened with the stored pair key.

use subtle::ConstantTimeEq;

use crate::chain::{MatchLedger, MatchState};
use crate::error::Result;
use crate::index::{CrushEntry, EntryStatus};
use crate::payload::{decrypt_payload, CIPHER_SIZE};

/// What one look at a pair account concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Fewer than two submissions; nothing to learn yet
    StillPending,
    /// Counterpart slot opened; ids are (theirs, the one they targeted)
    Mutual { their_id: u32, targeted_id: u32 },
    /// Pair is full but neither slot matches our recorded cipher
    ForeignSlots,
    /// Pair is full and our slot found, but the other would not decrypt
    UndecryptableCounterpart,
}

/// Classify a full or partial pair account against our own submission.
///
/// Slot comparison is constant-time; the counterpart payload is only
/// touched when the pair is full and our slot is identified.
pub fn resolve_mutual(
    our_cipher: &[u8; CIPHER_SIZE],
    pair_key: &[u8; 32],
    state: &MatchState,
) -> ReconcileOutcome {
    let (first, second) = match state.slots() {
        Some(slots) => slots,
        None => return ReconcileOutcome::StillPending,
    };

    let counterpart = if bool::from(our_cipher.ct_eq(first)) {
        second
    } else if bool::from(our_cipher.ct_eq(second)) {
        first
    } else {
        return ReconcileOutcome::ForeignSlots;
    };

    match decrypt_payload(pair_key, counterpart) {
        Ok((their_id, targeted_id)) => ReconcileOutcome::Mutual {
            their_id,
            targeted_id,
        },
        Err(_) => ReconcileOutcome::UndecryptableCounterpart,
    }
}

/// Totals from one reconciliation pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Pending entries examined
    pub checked: usize,
    /// Entries that flipped to mutual this pass
    pub newly_mutual: usize,
    /// Full pairs that could not be read cleanly
    pub anomalies: usize,
}

/// Re-examine every pending entry against the ledger, updating statuses
/// in place.
///
/// Terminal entries (mutual or anomalous) are left untouched, so a pass
/// is idempotent and safe to repeat on any schedule.
pub async fn reconcile_entries<L>(ledger: &L, entries: &mut [CrushEntry]) -> Result<ReconcileSummary>
where
    L: MatchLedger + ?Sized,
{
    let mut summary = ReconcileSummary::default();

    for entry in entries.iter_mut() {
        if !entry.status.is_pending() {
            continue;
        }
        summary.checked += 1;

        let tag = entry.tag_bytes()?;
        let state = match ledger.fetch_match(&tag).await? {
            Some(state) => state,
            None => continue,
        };

        if state.fill() < 2 {
            continue;
        }

        let pair_key = match entry.pair_key_bytes()? {
            Some(key) => key,
            None => {
                entry.status = EntryStatus::MutualKeyMissing;
                summary.anomalies += 1;
                continue;
            }
        };

        let our_cipher = entry.cipher_bytes()?;
        match resolve_mutual(&our_cipher, &pair_key, &state) {
            ReconcileOutcome::Mutual {
                their_id,
                targeted_id,
            } => {
                entry.status = EntryStatus::Mutual {
                    our_id: targeted_id,
                    their_id,
                };
                summary.newly_mutual += 1;
            }
            ReconcileOutcome::ForeignSlots => {
                entry.status = EntryStatus::MutualDecryptionKeyMismatch;
                summary.anomalies += 1;
            }
            ReconcileOutcome::UndecryptableCounterpart => {
                entry.status = EntryStatus::MutualDecryptionFailed;
                summary.anomalies += 1;
            }
            ReconcileOutcome::StillPending => {}
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::MemoryLedger;
    use crate::index::TargetInfo;
    use crate::payload::encrypt_payload;

    const PAIR_KEY: [u8; 32] = [0x5Au8; 32];

    fn entry_for(tag: [u8; 32], cipher: [u8; 48]) -> CrushEntry {
        CrushEntry::new(
            tag,
            cipher,
            PAIR_KEY,
            TargetInfo {
                user_id: 200,
                username: "robin".to_string(),
                identity_key: "9abc".to_string(),
            },
            None,
        )
    }

    fn our_cipher() -> [u8; 48] {
        encrypt_payload(&PAIR_KEY, 100, 200, "").unwrap()
    }

    fn their_cipher() -> [u8; 48] {
        encrypt_payload(&PAIR_KEY, 200, 100, "").unwrap()
    }

    #[test]
    fn test_resolve_pending_below_capacity() {
        let ours = our_cipher();

        let outcome = resolve_mutual(&ours, &PAIR_KEY, &MatchState::Empty);
        assert_eq!(outcome, ReconcileOutcome::StillPending);

        let outcome = resolve_mutual(
            &ours,
            &PAIR_KEY,
            &MatchState::OneSided { first: ours },
        );
        assert_eq!(outcome, ReconcileOutcome::StillPending);
    }

    #[test]
    fn test_resolve_mutual_either_slot_order() {
        let ours = our_cipher();
        let theirs = their_cipher();

        // We submitted first.
        let outcome = resolve_mutual(
            &ours,
            &PAIR_KEY,
            &MatchState::Mutual {
                first: ours,
                second: theirs,
            },
        );
        assert_eq!(
            outcome,
            ReconcileOutcome::Mutual {
                their_id: 200,
                targeted_id: 100
            }
        );

        // They submitted first.
        let outcome = resolve_mutual(
            &ours,
            &PAIR_KEY,
            &MatchState::Mutual {
                first: theirs,
                second: ours,
            },
        );
        assert_eq!(
            outcome,
            ReconcileOutcome::Mutual {
                their_id: 200,
                targeted_id: 100
            }
        );
    }

    #[test]
    fn test_resolve_foreign_slots() {
        let ours = our_cipher();
        let outcome = resolve_mutual(
            &ours,
            &PAIR_KEY,
            &MatchState::Mutual {
                first: [0xE1u8; 48],
                second: [0xE2u8; 48],
            },
        );
        assert_eq!(outcome, ReconcileOutcome::ForeignSlots);
    }

    #[test]
    fn test_resolve_undecryptable_counterpart() {
        let ours = our_cipher();
        let outcome = resolve_mutual(
            &ours,
            &PAIR_KEY,
            &MatchState::Mutual {
                first: ours,
                second: [0xE3u8; 48],
            },
        );
        assert_eq!(outcome, ReconcileOutcome::UndecryptableCounterpart);
    }

    #[tokio::test]
    async fn test_pass_flips_pending_to_mutual() {
        let ledger = MemoryLedger::new();
        let tag = [0x31u8; 32];
        let ours = our_cipher();
        let theirs = their_cipher();

        ledger.submit(tag, ours).unwrap();
        ledger.submit(tag, theirs).unwrap();

        let mut entries = vec![entry_for(tag, ours)];
        let summary = reconcile_entries(&ledger, &mut entries).await.unwrap();

        assert_eq!(summary.checked, 1);
        assert_eq!(summary.newly_mutual, 1);
        assert_eq!(summary.anomalies, 0);
        assert_eq!(
            entries[0].status,
            EntryStatus::Mutual {
                our_id: 100,
                their_id: 200
            }
        );
    }

    #[tokio::test]
    async fn test_pass_leaves_one_sided_pending() {
        let ledger = MemoryLedger::new();
        let tag = [0x32u8; 32];
        let ours = our_cipher();

        ledger.submit(tag, ours).unwrap();

        let mut entries = vec![entry_for(tag, ours)];
        let summary = reconcile_entries(&ledger, &mut entries).await.unwrap();

        assert_eq!(summary.checked, 1);
        assert_eq!(summary.newly_mutual, 0);
        assert!(entries[0].status.is_pending());
    }

    #[tokio::test]
    async fn test_pass_skips_absent_account() {
        let ledger = MemoryLedger::new();
        let mut entries = vec![entry_for([0x33u8; 32], our_cipher())];

        let summary = reconcile_entries(&ledger, &mut entries).await.unwrap();
        assert_eq!(summary.checked, 1);
        assert!(entries[0].status.is_pending());
    }

    #[tokio::test]
    async fn test_pass_is_idempotent_on_terminal_entries() {
        let ledger = MemoryLedger::new();
        let tag = [0x34u8; 32];
        let ours = our_cipher();

        ledger.submit(tag, ours).unwrap();
        ledger.submit(tag, their_cipher()).unwrap();

        let mut entries = vec![entry_for(tag, ours)];
        reconcile_entries(&ledger, &mut entries).await.unwrap();
        let settled = entries[0].status.clone();

        let summary = reconcile_entries(&ledger, &mut entries).await.unwrap();
        assert_eq!(summary.checked, 0);
        assert_eq!(summary.newly_mutual, 0);
        assert_eq!(entries[0].status, settled);
    }

    #[tokio::test]
    async fn test_pass_flags_missing_pair_key() {
        let ledger = MemoryLedger::new();
        let tag = [0x35u8; 32];
        let ours = our_cipher();

        ledger.submit(tag, ours).unwrap();
        ledger.submit(tag, their_cipher()).unwrap();

        let mut entry = entry_for(tag, ours);
        entry.pair_key = None;
        let mut entries = vec![entry];

        let summary = reconcile_entries(&ledger, &mut entries).await.unwrap();
        assert_eq!(summary.anomalies, 1);
        assert_eq!(entries[0].status, EntryStatus::MutualKeyMissing);
    }

    #[tokio::test]
    async fn test_pass_flags_foreign_full_pair() {
        let ledger = MemoryLedger::new();
        let tag = [0x36u8; 32];

        ledger.submit(tag, [0xD1u8; 48]).unwrap();
        ledger.submit(tag, [0xD2u8; 48]).unwrap();

        let mut entries = vec![entry_for(tag, our_cipher())];
        let summary = reconcile_entries(&ledger, &mut entries).await.unwrap();

        assert_eq!(summary.anomalies, 1);
        assert_eq!(
            entries[0].status,
            EntryStatus::MutualDecryptionKeyMismatch
        );
    }
}
