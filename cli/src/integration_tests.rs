//! Integration tests for the CrushPact CLI
//!
//! These tests verify complete end-to-end flows:
//! - Sign-in → derivation → submission → reciprocation → reconciliation
//! - Index persistence through the sealed blob store
//! - Session file save → load → key re-derivation
//! - Anomaly handling across module boundaries

#[cfg(test)]
mod e2e_tests {
    use crate::chain::MemoryLedger;
    use crate::config::{load_session_from, save_session_to, Session};
    use crate::crypto::{derive_pair, SessionKeys, SIGNIN_MESSAGE};
    use crate::index::{upsert_entry, CrushEntry, EntryStatus, TargetInfo};
    use crate::payload::encrypt_payload;
    use crate::reconcile::reconcile_entries;
    use crate::store::{IndexStore, MemoryIndexStore};
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;
    use tempfile::tempdir;

    // ==================== Test Fixtures ====================

    /// One directory user: a wallet, the session keys its sign-in
    /// signature yields, and the identity key others derive toward
    struct Party {
        session: SessionKeys,
        identity: [u8; 32],
        user_id: u32,
    }

    fn party(user_id: u32) -> Party {
        let wallet = Keypair::new();
        let signature: [u8; 64] = wallet
            .sign_message(SIGNIN_MESSAGE)
            .as_ref()
            .try_into()
            .expect("signature is 64 bytes");

        Party {
            session: SessionKeys::from_signature_bytes(&signature),
            identity: wallet.pubkey().to_bytes(),
            user_id,
        }
    }

    fn target_for(party: &Party, username: &str) -> TargetInfo {
        TargetInfo {
            user_id: party.user_id,
            username: username.to_string(),
            identity_key: bs58::encode(party.identity).into_string(),
        }
    }

    // ==================== Mutual Discovery Flow ====================

    /// Test the complete flow: derive → submit → record → reciprocate →
    /// scan → mutual, with the index sealed between every step
    #[tokio::test]
    async fn test_full_mutual_discovery_flow() {
        let alex = party(100);
        let robin = party(200);

        let ledger = MemoryLedger::new();
        let store = MemoryIndexStore::new();

        // Alex derives toward Robin and takes the first slot.
        let (_, pair) = derive_pair(&alex.session, &robin.identity).expect("Should derive pair");
        let our_cipher = encrypt_payload(pair.key(), alex.user_id, robin.user_id, "")
            .expect("Should encrypt payload");
        ledger.submit(pair.tag, our_cipher).expect("Should take first slot");

        // The attempt lands in Alex's sealed index.
        let mut entries = store
            .load(alex.session.index_key())
            .await
            .expect("Should load index");
        upsert_entry(
            &mut entries,
            CrushEntry::new(
                pair.tag,
                our_cipher,
                *pair.key(),
                target_for(&robin, "robin"),
                None,
            ),
        );
        store
            .save(alex.session.index_key(), &entries)
            .await
            .expect("Should save index");

        // A scan before reciprocation learns nothing.
        let mut entries = store
            .load(alex.session.index_key())
            .await
            .expect("Should reload index");
        let summary = reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.checked, 1);
        assert_eq!(summary.newly_mutual, 0);
        assert!(entries[0].status.is_pending());

        // Robin reciprocates at the same tag with the recovered pair key.
        let their_cipher = encrypt_payload(pair.key(), robin.user_id, alex.user_id, "")
            .expect("Should encrypt payload");
        ledger
            .submit(pair.tag, their_cipher)
            .expect("Should take second slot");

        // The next scan flips the entry and the result is persisted.
        let summary = reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.newly_mutual, 1);
        assert_eq!(
            entries[0].status,
            EntryStatus::Mutual {
                our_id: 100,
                their_id: 200
            }
        );
        store
            .save(alex.session.index_key(), &entries)
            .await
            .expect("Should save index");

        // The settled status survives the blob roundtrip.
        let reloaded = store
            .load(alex.session.index_key())
            .await
            .expect("Should reload index");
        assert_eq!(
            reloaded[0].status,
            EntryStatus::Mutual {
                our_id: 100,
                their_id: 200
            }
        );
    }

    /// Test several attempts tracked independently: only the reciprocated
    /// one flips, the other stays pending
    #[tokio::test]
    async fn test_only_reciprocated_attempt_flips() {
        let alex = party(100);
        let robin = party(200);
        let casey = party(300);

        let ledger = MemoryLedger::new();

        let (_, pair_robin) = derive_pair(&alex.session, &robin.identity).expect("Should derive");
        let (_, pair_casey) = derive_pair(&alex.session, &casey.identity).expect("Should derive");
        assert_ne!(pair_robin.tag, pair_casey.tag);

        let cipher_robin = encrypt_payload(pair_robin.key(), 100, 200, "").expect("Should encrypt");
        let cipher_casey = encrypt_payload(pair_casey.key(), 100, 300, "").expect("Should encrypt");
        ledger.submit(pair_robin.tag, cipher_robin).expect("Should submit");
        ledger.submit(pair_casey.tag, cipher_casey).expect("Should submit");

        // Only Robin reciprocates.
        let reply = encrypt_payload(pair_robin.key(), 200, 100, "").expect("Should encrypt");
        ledger.submit(pair_robin.tag, reply).expect("Should submit");

        let mut entries = vec![
            CrushEntry::new(
                pair_robin.tag,
                cipher_robin,
                *pair_robin.key(),
                target_for(&robin, "robin"),
                None,
            ),
            CrushEntry::new(
                pair_casey.tag,
                cipher_casey,
                *pair_casey.key(),
                target_for(&casey, "casey"),
                None,
            ),
        ];

        let summary = reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.checked, 2);
        assert_eq!(summary.newly_mutual, 1);
        assert_eq!(
            entries[0].status,
            EntryStatus::Mutual {
                our_id: 100,
                their_id: 200
            }
        );
        assert!(entries[1].status.is_pending());
    }

    /// Test a settled entry stays settled through seal, reload, and
    /// another scan
    #[tokio::test]
    async fn test_scan_after_reload_stays_settled() {
        let alex = party(100);
        let robin = party(200);

        let ledger = MemoryLedger::new();
        let store = MemoryIndexStore::new();

        let (_, pair) = derive_pair(&alex.session, &robin.identity).expect("Should derive");
        let ours = encrypt_payload(pair.key(), 100, 200, "").expect("Should encrypt");
        let theirs = encrypt_payload(pair.key(), 200, 100, "").expect("Should encrypt");
        ledger.submit(pair.tag, ours).expect("Should submit");
        ledger.submit(pair.tag, theirs).expect("Should submit");

        let mut entries = vec![CrushEntry::new(
            pair.tag,
            ours,
            *pair.key(),
            target_for(&robin, "robin"),
            None,
        )];
        reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        store
            .save(alex.session.index_key(), &entries)
            .await
            .expect("Should save");

        // A later session reloads and scans again; nothing changes.
        let mut entries = store
            .load(alex.session.index_key())
            .await
            .expect("Should reload");
        let summary = reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.checked, 0);
        assert_eq!(summary.newly_mutual, 0);
        assert_eq!(
            entries[0].status,
            EntryStatus::Mutual {
                our_id: 100,
                their_id: 200
            }
        );
    }

    /// Test resubmitting to a known tag refreshes the record instead of
    /// duplicating it
    #[tokio::test]
    async fn test_resubmission_updates_entry_in_place() {
        let alex = party(100);
        let robin = party(200);
        let store = MemoryIndexStore::new();

        let (_, pair) = derive_pair(&alex.session, &robin.identity).expect("Should derive");
        let cipher = encrypt_payload(pair.key(), 100, 200, "").expect("Should encrypt");

        // First attempt confirmed without a recorded signature.
        let mut entries = Vec::new();
        upsert_entry(
            &mut entries,
            CrushEntry::new(pair.tag, cipher, *pair.key(), target_for(&robin, "robin"), None),
        );
        store
            .save(alex.session.index_key(), &entries)
            .await
            .expect("Should save");

        // The retry lands on the same tag with a signature attached.
        let retry_cipher = encrypt_payload(pair.key(), 100, 200, "").expect("Should encrypt");
        let mut entries = store
            .load(alex.session.index_key())
            .await
            .expect("Should reload");
        upsert_entry(
            &mut entries,
            CrushEntry::new(
                pair.tag,
                retry_cipher,
                *pair.key(),
                target_for(&robin, "robin"),
                Some("5ignature".to_string()),
            ),
        );
        store
            .save(alex.session.index_key(), &entries)
            .await
            .expect("Should save");

        let reloaded = store
            .load(alex.session.index_key())
            .await
            .expect("Should reload");
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].submit_signature, Some("5ignature".to_string()));
        assert_eq!(reloaded[0].cipher_bytes().unwrap(), retry_cipher);
    }

    // ==================== Session Persistence ====================

    /// Test session file save → load → key re-derivation
    #[test]
    fn test_session_file_roundtrip() {
        let temp_dir = tempdir().expect("Should create temp dir");
        let path = temp_dir.path().join("session.json");

        let wallet = Keypair::new();
        let signature = wallet.sign_message(SIGNIN_MESSAGE).to_string();

        let session = Session {
            user_id: 4242,
            username: "alex".to_string(),
            signature: signature.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        save_session_to(&path, &session).expect("Should save session");

        let loaded = load_session_from(&path).expect("Should load session");
        assert_eq!(loaded.user_id, 4242);
        assert_eq!(loaded.username, "alex");
        assert_eq!(loaded.signature, signature);

        // The reloaded signature re-derives the same keys.
        let original = SessionKeys::from_encoded_signature(&signature).expect("Should derive");
        let rederived =
            SessionKeys::from_encoded_signature(&loaded.signature).expect("Should derive");
        assert_eq!(original.fingerprint(), rederived.fingerprint());
        assert_eq!(original.index_key(), rederived.index_key());
    }

    /// Test the session file is written private on Unix
    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().expect("Should create temp dir");
        let path = temp_dir.path().join("session.json");

        let session = Session {
            user_id: 1,
            username: "alex".to_string(),
            signature: "sig".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        save_session_to(&path, &session).expect("Should save session");

        let mode = std::fs::metadata(&path)
            .expect("Should stat session file")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    /// Test loading a missing session points the user at init
    #[test]
    fn test_missing_session_is_an_error() {
        let temp_dir = tempdir().expect("Should create temp dir");

        let result = load_session_from(&temp_dir.path().join("absent.json"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("crushpact init"));
    }

    // ==================== Anomaly Paths ====================

    /// Test a full pair written by strangers is flagged, never mistaken
    /// for a match
    #[tokio::test]
    async fn test_foreign_pair_account_is_flagged() {
        let alex = party(100);
        let robin = party(200);
        let ledger = MemoryLedger::new();

        let (_, pair) = derive_pair(&alex.session, &robin.identity).expect("Should derive");

        // Two submissions Alex never made already fill the account.
        ledger.submit(pair.tag, [0xD1u8; 48]).expect("Should submit");
        ledger.submit(pair.tag, [0xD2u8; 48]).expect("Should submit");

        let cipher = encrypt_payload(pair.key(), 100, 200, "").expect("Should encrypt");
        let mut entries = vec![CrushEntry::new(
            pair.tag,
            cipher,
            *pair.key(),
            target_for(&robin, "robin"),
            None,
        )];

        let summary = reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.anomalies, 1);
        assert_eq!(entries[0].status, EntryStatus::MutualDecryptionKeyMismatch);
    }

    /// Test a lost pair key is flagged once and the flag survives the
    /// blob roundtrip
    #[tokio::test]
    async fn test_lost_pair_key_flag_persists() {
        let alex = party(100);
        let robin = party(200);
        let ledger = MemoryLedger::new();
        let store = MemoryIndexStore::new();

        let (_, pair) = derive_pair(&alex.session, &robin.identity).expect("Should derive");
        let ours = encrypt_payload(pair.key(), 100, 200, "").expect("Should encrypt");
        ledger.submit(pair.tag, ours).expect("Should submit");
        ledger
            .submit(pair.tag, encrypt_payload(pair.key(), 200, 100, "").expect("Should encrypt"))
            .expect("Should submit");

        let mut entry =
            CrushEntry::new(pair.tag, ours, *pair.key(), target_for(&robin, "robin"), None);
        entry.pair_key = None;
        let mut entries = vec![entry];

        let summary = reconcile_entries(&ledger, &mut entries)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.anomalies, 1);
        assert_eq!(entries[0].status, EntryStatus::MutualKeyMissing);

        store
            .save(alex.session.index_key(), &entries)
            .await
            .expect("Should save");
        let mut reloaded = store
            .load(alex.session.index_key())
            .await
            .expect("Should reload");
        assert_eq!(reloaded[0].status, EntryStatus::MutualKeyMissing);

        // The flag is terminal; another scan does not revisit it.
        let summary = reconcile_entries(&ledger, &mut reloaded)
            .await
            .expect("Should reconcile");
        assert_eq!(summary.checked, 0);
        assert_eq!(summary.anomalies, 0);
    }
}
