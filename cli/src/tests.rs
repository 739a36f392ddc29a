//! Comprehensive tests for the CrushPact CLI
//!
//! Tests cover:
//! - Session key derivation from wallet signatures
//! - The full two-party crush protocol
//! - Cross-module payload and index behavior
//! - Hardening properties (zeroization, key separation)

#[cfg(test)]
mod protocol_tests {
    use crate::chain::MatchState;
    use crate::crypto::{derive_pair, SessionKeys};
    use crate::payload::{decrypt_payload, encrypt_payload};
    use crate::reconcile::{resolve_mutual, ReconcileOutcome};
    use ed25519_dalek::{PublicKey, SecretKey};

    /// Long-term identity public key from a fixed seed
    fn identity_pub(seed: [u8; 32]) -> [u8; 32] {
        let secret = SecretKey::from_bytes(&seed).unwrap();
        PublicKey::from(&secret).to_bytes()
    }

    #[test]
    fn test_two_party_discovery_at_one_tag() {
        // A signs in and derives toward B
        let session_a = SessionKeys::from_signature_bytes(&[0x11u8; 64]);
        let b_identity = identity_pub([0x22u8; 32]);
        let (_stealth_a, pair_a) = derive_pair(&session_a, &b_identity).unwrap();

        // A submits first
        let cipher_a = encrypt_payload(pair_a.key(), 100, 200, "").unwrap();
        let state = MatchState::Empty.submit(cipher_a).unwrap();

        // B reciprocates at the same tag with the recovered pair key
        let cipher_b = encrypt_payload(pair_a.key(), 200, 100, "").unwrap();
        let state = state.submit(cipher_b).unwrap();

        // A reads B's slot
        let outcome = resolve_mutual(&cipher_a, pair_a.key(), &state);
        assert_eq!(
            outcome,
            ReconcileOutcome::Mutual {
                their_id: 200,
                targeted_id: 100
            }
        );

        // And B reads A's slot with the same key
        let outcome = resolve_mutual(&cipher_b, pair_a.key(), &state);
        assert_eq!(
            outcome,
            ReconcileOutcome::Mutual {
                their_id: 100,
                targeted_id: 200
            }
        );
    }

    #[test]
    fn test_one_sided_submission_reveals_nothing() {
        let session_a = SessionKeys::from_signature_bytes(&[0x11u8; 64]);
        let b_identity = identity_pub([0x22u8; 32]);
        let (_stealth_a, pair_a) = derive_pair(&session_a, &b_identity).unwrap();

        let cipher_a = encrypt_payload(pair_a.key(), 100, 200, "").unwrap();
        let state = MatchState::Empty.submit(cipher_a).unwrap();

        // With only one slot filled there is nothing to resolve, even
        // for the submitter holding the pair key.
        let outcome = resolve_mutual(&cipher_a, pair_a.key(), &state);
        assert_eq!(outcome, ReconcileOutcome::StillPending);
    }

    #[test]
    fn test_independent_directions_use_distinct_tags() {
        // A->B and B->A involve different scalars and different points,
        // so blind double-initiation lands on two separate accounts.
        let session_a = SessionKeys::from_signature_bytes(&[0x11u8; 64]);
        let session_b = SessionKeys::from_signature_bytes(&[0x77u8; 64]);
        let a_identity = identity_pub([0x21u8; 32]);
        let b_identity = identity_pub([0x22u8; 32]);

        let (_, pair_ab) = derive_pair(&session_a, &b_identity).unwrap();
        let (_, pair_ba) = derive_pair(&session_b, &a_identity).unwrap();

        assert_ne!(pair_ab.tag, pair_ba.tag);
        assert_ne!(pair_ab.key(), pair_ba.key());
    }

    #[test]
    fn test_distinct_targets_distinct_pairs() {
        let session = SessionKeys::from_signature_bytes(&[0x11u8; 64]);
        let first = identity_pub([0x22u8; 32]);
        let second = identity_pub([0x23u8; 32]);

        let (stealth_one, pair_one) = derive_pair(&session, &first).unwrap();
        let (stealth_two, pair_two) = derive_pair(&session, &second).unwrap();

        assert_ne!(stealth_one.public, stealth_two.public);
        assert_ne!(pair_one.tag, pair_two.tag);
        assert_ne!(pair_one.key(), pair_two.key());
    }

    #[test]
    fn test_stale_pair_key_cannot_read_counterpart() {
        let session = SessionKeys::from_signature_bytes(&[0x11u8; 64]);
        let target = identity_pub([0x22u8; 32]);
        let (_, pair) = derive_pair(&session, &target).unwrap();

        let cipher_ours = encrypt_payload(pair.key(), 1, 2, "").unwrap();
        let cipher_theirs = encrypt_payload(pair.key(), 2, 1, "").unwrap();
        let state = MatchState::Mutual {
            first: cipher_ours,
            second: cipher_theirs,
        };

        // Slot location still works byte-wise, but the wrong key fails
        // AEAD authentication on the counterpart slot.
        let wrong_key = [0x99u8; 32];
        let outcome = resolve_mutual(&cipher_ours, &wrong_key, &state);
        assert_eq!(outcome, ReconcileOutcome::UndecryptableCounterpart);
    }

    #[test]
    fn test_third_party_learns_nothing_from_a_full_pair() {
        let session_a = SessionKeys::from_signature_bytes(&[0x11u8; 64]);
        let session_c = SessionKeys::from_signature_bytes(&[0xC0u8; 64]);
        let b_identity = identity_pub([0x22u8; 32]);

        let (_, pair_ab) = derive_pair(&session_a, &b_identity).unwrap();
        let (_, pair_cb) = derive_pair(&session_c, &b_identity).unwrap();

        // C's own derivation toward the same target routes elsewhere.
        assert_ne!(pair_ab.tag, pair_cb.tag);

        // And C's key opens neither slot of the A/B pair.
        let cipher_a = encrypt_payload(pair_ab.key(), 100, 200, "").unwrap();
        let cipher_b = encrypt_payload(pair_ab.key(), 200, 100, "").unwrap();
        assert!(decrypt_payload(pair_cb.key(), &cipher_a).is_err());
        assert!(decrypt_payload(pair_cb.key(), &cipher_b).is_err());
    }
}

#[cfg(test)]
mod session_tests {
    use crate::crypto::{SessionKeys, SIGNIN_MESSAGE};
    use solana_sdk::signer::{keypair::Keypair, Signer};

    #[test]
    fn test_wallet_signature_roundtrip_through_display_form() {
        let wallet = Keypair::new();
        let signature = wallet.sign_message(SIGNIN_MESSAGE).to_string();

        let from_encoded = SessionKeys::from_encoded_signature(&signature).unwrap();

        let raw: [u8; 64] = wallet
            .sign_message(SIGNIN_MESSAGE)
            .as_ref()
            .try_into()
            .unwrap();
        let from_bytes = SessionKeys::from_signature_bytes(&raw);

        assert_eq!(from_encoded.master(), from_bytes.master());
        assert_eq!(from_encoded.index_key(), from_bytes.index_key());
    }

    #[test]
    fn test_different_wallets_different_sessions() {
        let one = SessionKeys::from_encoded_signature(
            &Keypair::new().sign_message(SIGNIN_MESSAGE).to_string(),
        )
        .unwrap();
        let two = SessionKeys::from_encoded_signature(
            &Keypair::new().sign_message(SIGNIN_MESSAGE).to_string(),
        )
        .unwrap();

        assert_ne!(one.master(), two.master());
        assert_ne!(one.index_key(), two.index_key());
        assert_ne!(one.fingerprint(), two.fingerprint());
    }

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let keys = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        let fingerprint = keys.fingerprint();

        assert_eq!(fingerprint, keys.fingerprint());
        assert_eq!(fingerprint.len(), 16);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[cfg(test)]
mod index_flow_tests {
    use crate::crypto::SessionKeys;
    use crate::index::{
        decrypt_index, encrypt_index, upsert_entry, CrushEntry, EntryStatus, TargetInfo,
    };

    fn entry_targeting(name: &str, user_id: u32, tag_byte: u8) -> CrushEntry {
        CrushEntry::new(
            [tag_byte; 32],
            [0x10u8; 48],
            [0x20u8; 32],
            TargetInfo {
                user_id,
                username: name.to_string(),
                identity_key: "11111111111111111111111111111111".to_string(),
            },
            Some("5sig".to_string()),
        )
    }

    #[test]
    fn test_index_sealed_under_session_key_survives_resession() {
        // Same wallet signature on a later day reopens the same blob.
        let today = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        let later = SessionKeys::from_signature_bytes(&[0x42u8; 64]);

        let entries = vec![
            entry_targeting("ada", 7, 0x01),
            entry_targeting("防弾少年団", 8, 0x02),
        ];
        let blob = encrypt_index(&entries, today.index_key()).unwrap();

        let reopened = decrypt_index(&blob, later.index_key()).unwrap();
        assert_eq!(reopened, entries);
        assert_eq!(reopened[1].target.username, "防弾少年団");
    }

    #[test]
    fn test_resubmission_replaces_not_duplicates() {
        let mut entries = vec![entry_targeting("ada", 7, 0x01)];

        let mut replacement = entry_targeting("ada", 7, 0x01);
        replacement.status = EntryStatus::Mutual {
            our_id: 1,
            their_id: 7,
        };
        upsert_entry(&mut entries, replacement);

        assert_eq!(entries.len(), 1);
        assert!(matches!(
            entries[0].status,
            EntryStatus::Mutual { their_id: 7, .. }
        ));
    }

    #[test]
    fn test_index_entries_for_many_targets_coexist() {
        let keys = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        let mut entries = Vec::new();
        for i in 0..20u8 {
            upsert_entry(&mut entries, entry_targeting("user", u32::from(i), i));
        }

        let blob = encrypt_index(&entries, keys.index_key()).unwrap();
        let reopened = decrypt_index(&blob, keys.index_key()).unwrap();
        assert_eq!(reopened.len(), 20);
    }
}

#[cfg(test)]
mod security_tests {
    use crate::crypto::{derive_pair, SessionKeys};
    use ed25519_dalek::{PublicKey, SecretKey};
    use zeroize::Zeroize;

    #[test]
    fn test_master_and_index_key_are_separated() {
        let keys = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        assert_ne!(keys.master(), keys.index_key());
    }

    #[test]
    fn test_pair_key_differs_from_tag() {
        let session = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        let secret = SecretKey::from_bytes(&[0x22u8; 32]).unwrap();
        let target = PublicKey::from(&secret).to_bytes();

        let (_, pair) = derive_pair(&session, &target).unwrap();
        assert_ne!(pair.key(), &pair.tag);
    }

    #[test]
    fn test_stealth_key_is_not_the_identity_key() {
        let session = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        let secret = SecretKey::from_bytes(&[0x22u8; 32]).unwrap();
        let target = PublicKey::from(&secret).to_bytes();

        let (stealth, _) = derive_pair(&session, &target).unwrap();
        assert_ne!(stealth.public, target);
        assert_ne!(&stealth.public, session.master());
    }

    #[test]
    fn test_zeroize_works_on_secrets() {
        let mut secret = [0x42u8; 32];
        secret.zeroize();
        assert!(secret.iter().all(|&b| b == 0));
    }
}

#[cfg(test)]
mod edge_case_tests {
    use crate::crypto::{derive_pair, SessionKeys};
    use ed25519_dalek::{PublicKey, SecretKey};

    fn identity_pub(seed: [u8; 32]) -> [u8; 32] {
        let secret = SecretKey::from_bytes(&seed).unwrap();
        PublicKey::from(&secret).to_bytes()
    }

    #[test]
    fn test_derivation_with_extreme_signatures() {
        let low = SessionKeys::from_signature_bytes(&[0x01u8; 64]);
        let high = SessionKeys::from_signature_bytes(&[0xFFu8; 64]);
        let target = identity_pub([0x22u8; 32]);

        let (_, pair_low) = derive_pair(&low, &target).unwrap();
        let (_, pair_high) = derive_pair(&high, &target).unwrap();

        assert_ne!(pair_low.tag, pair_high.tag);
    }

    #[test]
    fn test_derivation_with_extreme_identity_seeds() {
        let session = SessionKeys::from_signature_bytes(&[0x42u8; 64]);

        let near_zero = identity_pub([
            0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0,
        ]);
        let near_max = identity_pub([0xFEu8; 32]);

        let (_, pair_zero) = derive_pair(&session, &near_zero).unwrap();
        let (_, pair_max) = derive_pair(&session, &near_max).unwrap();

        assert_ne!(pair_zero.tag, pair_max.tag);
    }

    #[test]
    fn test_many_sequential_derivations_stay_deterministic() {
        let session = SessionKeys::from_signature_bytes(&[0x42u8; 64]);
        let target = identity_pub([0x22u8; 32]);

        let (stealth_first, pair_first) = derive_pair(&session, &target).unwrap();

        // No hidden state may creep into the derivation
        for i in 0..100 {
            let (stealth, pair) = derive_pair(&session, &target).unwrap();
            assert_eq!(stealth.public, stealth_first.public, "iteration {i}");
            assert_eq!(pair.tag, pair_first.tag, "iteration {i}");
            assert_eq!(pair.key(), pair_first.key(), "iteration {i}");
        }
    }
}
