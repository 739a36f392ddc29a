//! Property-based fuzzing tests for CrushPact protocol operations
//!
//! These tests use proptest to verify protocol properties hold for arbitrary inputs.
//! Properties tested:
//! - Derivation determinism: the same signature and target always yield the same keys
//! - Pair separation: distinct targets and distinct wallets land on distinct tags
//! - Payload integrity: identifier pairs survive the fixed-size cipher, wrong keys fail
//! - Index roundtrip: arbitrary entry sets survive the sealed blob codec
//! - Slot capacity: a match account never accepts a third submission

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use crate::chain::MatchState;
    use crate::crypto::{derive_pair, PairSecret, SessionKeys};
    use crate::error::CrushError;
    use crate::index::{decrypt_index, encrypt_index, CrushEntry, TargetInfo};
    use crate::payload::{decrypt_payload, encrypt_payload, CIPHER_SIZE};
    use ed25519_dalek::{PublicKey, SecretKey};

    // Strategy for generating arbitrary 32-byte values (seeds and keys)
    fn arbitrary_seed() -> impl Strategy<Value = [u8; 32]> {
        prop::array::uniform32(any::<u8>())
    }

    // Strategy for generating arbitrary 64-byte wallet signatures
    fn arbitrary_signature() -> impl Strategy<Value = [u8; 64]> {
        (arbitrary_seed(), arbitrary_seed()).prop_map(|(lo, hi)| {
            let mut signature = [0u8; 64];
            signature[..32].copy_from_slice(&lo);
            signature[32..].copy_from_slice(&hi);
            signature
        })
    }

    // Strategy for generating valid identity keys (every seed maps onto the curve)
    fn arbitrary_identity() -> impl Strategy<Value = [u8; 32]> {
        arbitrary_seed().prop_map(|seed| {
            let secret = SecretKey::from_bytes(&seed).expect("any 32 bytes seed an ed25519 key");
            PublicKey::from(&secret).to_bytes()
        })
    }

    // Strategy for generating two distinct identity keys
    fn distinct_identities() -> impl Strategy<Value = ([u8; 32], [u8; 32])> {
        (arbitrary_identity(), arbitrary_identity())
            .prop_filter("distinct identities", |(a, b)| a != b)
    }

    // Strategy for generating arbitrary 48-byte wire ciphers
    fn arbitrary_cipher() -> impl Strategy<Value = [u8; CIPHER_SIZE]> {
        (arbitrary_seed(), prop::array::uniform16(any::<u8>())).prop_map(|(head, tail)| {
            let mut cipher = [0u8; CIPHER_SIZE];
            cipher[..32].copy_from_slice(&head);
            cipher[32..].copy_from_slice(&tail);
            cipher
        })
    }

    // Strategy for generating stored attempt records
    fn arbitrary_entry() -> impl Strategy<Value = CrushEntry> {
        (
            arbitrary_seed(),
            arbitrary_cipher(),
            arbitrary_seed(),
            any::<u32>(),
            "[a-z0-9_]{1,24}",
        )
            .prop_map(|(tag, cipher, pair_key, user_id, username)| {
                let identity_key = bs58::encode(tag).into_string();
                CrushEntry::new(
                    tag,
                    cipher,
                    pair_key,
                    TargetInfo {
                        user_id,
                        username,
                        identity_key,
                    },
                    None,
                )
            })
    }

    proptest! {
        /// Property: Session Derivation Determinism
        /// The same wallet signature always yields the same master secret,
        /// index key, and fingerprint, and the two keys never coincide.
        #[test]
        fn prop_session_derivation_determinism(signature in arbitrary_signature()) {
            let first = SessionKeys::from_signature_bytes(&signature);
            let second = SessionKeys::from_signature_bytes(&signature);

            prop_assert_eq!(first.master(), second.master());
            prop_assert_eq!(first.index_key(), second.index_key());
            prop_assert_eq!(first.fingerprint(), second.fingerprint());

            prop_assert_ne!(first.master(), first.index_key(), "domain separation must hold");
        }

        /// Property: Pair Derivation Determinism
        /// The same session and target always reproduce the same stealth
        /// keypair, pair key, and routing tag.
        #[test]
        fn prop_pair_derivation_determinism(
            signature in arbitrary_signature(),
            identity in arbitrary_identity(),
        ) {
            let session = SessionKeys::from_signature_bytes(&signature);

            let (stealth1, pair1) = derive_pair(&session, &identity)
                .expect("derivation should succeed for valid identities");
            let (stealth2, pair2) = derive_pair(&session, &identity)
                .expect("derivation should succeed for valid identities");

            prop_assert_eq!(stealth1.public, stealth2.public);
            prop_assert_eq!(pair1.key(), pair2.key());
            prop_assert_eq!(pair1.tag, pair2.tag);
        }

        /// Property: Target Separation
        /// Attempts toward different targets never share a stealth key,
        /// pair key, or tag, so one account cannot link two crushes.
        #[test]
        fn prop_distinct_targets_distinct_pairs(
            signature in arbitrary_signature(),
            (identity_a, identity_b) in distinct_identities(),
        ) {
            let session = SessionKeys::from_signature_bytes(&signature);

            let (stealth_a, pair_a) = derive_pair(&session, &identity_a)
                .expect("derivation should succeed");
            let (stealth_b, pair_b) = derive_pair(&session, &identity_b)
                .expect("derivation should succeed");

            prop_assert_ne!(stealth_a.public, stealth_b.public);
            prop_assert_ne!(pair_a.key(), pair_b.key());
            prop_assert_ne!(pair_a.tag, pair_b.tag);
        }

        /// Property: Wallet Separation
        /// Different wallet signatures yield different sessions, and their
        /// attempts toward the same target stay unlinkable.
        #[test]
        fn prop_distinct_signatures_distinct_sessions(
            signature_a in arbitrary_signature(),
            signature_b in arbitrary_signature(),
            identity in arbitrary_identity(),
        ) {
            prop_assume!(signature_a != signature_b);

            let session_a = SessionKeys::from_signature_bytes(&signature_a);
            let session_b = SessionKeys::from_signature_bytes(&signature_b);

            prop_assert_ne!(session_a.master(), session_b.master());
            prop_assert_ne!(session_a.index_key(), session_b.index_key());

            let (_, pair_a) = derive_pair(&session_a, &identity).expect("derivation");
            let (_, pair_b) = derive_pair(&session_b, &identity).expect("derivation");
            prop_assert_ne!(pair_a.tag, pair_b.tag);
        }

        /// Property: Tag Reconstruction
        /// A stored pair key rebuilds exactly the tag it was derived with,
        /// and the public tag never equals the secret key.
        #[test]
        fn prop_tag_rebuilds_from_stored_key(shared in arbitrary_seed()) {
            let pair = PairSecret::derive(&shared);
            let rebuilt = PairSecret::from_key(*pair.key());

            prop_assert_eq!(rebuilt.tag, pair.tag);
            prop_assert_eq!(rebuilt.key(), pair.key());
            prop_assert_ne!(&pair.tag, pair.key());
        }

        /// Property: Fingerprint Shape
        /// Fingerprints are always 16 lowercase hex characters.
        #[test]
        fn prop_fingerprint_shape(signature in arbitrary_signature()) {
            let fingerprint = SessionKeys::from_signature_bytes(&signature).fingerprint();

            prop_assert_eq!(fingerprint.len(), 16);
            prop_assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        /// Property: Payload Roundtrip
        /// Any identifier pair survives encryption under any key, and the
        /// wire form is always exactly 48 bytes.
        #[test]
        fn prop_payload_roundtrip(
            key in arbitrary_seed(),
            own_id in any::<u32>(),
            target_id in any::<u32>(),
        ) {
            let cipher = encrypt_payload(&key, own_id, target_id, "")
                .expect("empty note always fits");

            prop_assert_eq!(cipher.len(), CIPHER_SIZE);
            prop_assert_eq!(decrypt_payload(&key, &cipher).expect("own key decrypts"), (own_id, target_id));
        }

        /// Property: Wrong Key Rejection
        /// A cipher never authenticates under a key other than the one
        /// that sealed it.
        #[test]
        fn prop_wrong_key_rejection(
            key in arbitrary_seed(),
            other_key in arbitrary_seed(),
            own_id in any::<u32>(),
            target_id in any::<u32>(),
        ) {
            prop_assume!(key != other_key);

            let cipher = encrypt_payload(&key, own_id, target_id, "").expect("encryption");
            prop_assert!(decrypt_payload(&other_key, &cipher).is_err());
        }

        /// Property: Tamper Rejection
        /// Flipping any single byte of the wire form fails authentication,
        /// nonce and tag bytes included.
        #[test]
        fn prop_tamper_rejection(
            key in arbitrary_seed(),
            own_id in any::<u32>(),
            target_id in any::<u32>(),
            position in 0usize..CIPHER_SIZE,
        ) {
            let mut cipher = encrypt_payload(&key, own_id, target_id, "").expect("encryption");
            cipher[position] ^= 0x01;

            prop_assert!(decrypt_payload(&key, &cipher).is_err());
        }

        /// Property: Note Capacity Gate
        /// Any non-empty note overflows the fixed geometry and fails with
        /// a capacity error before touching the cipher.
        #[test]
        fn prop_note_capacity_gate(
            key in arbitrary_seed(),
            own_id in any::<u32>(),
            target_id in any::<u32>(),
            note in "[ -~]{1,40}",
        ) {
            let result = encrypt_payload(&key, own_id, target_id, &note);
            prop_assert!(matches!(result, Err(CrushError::CapacityError(_))));
        }

        /// Property: Index Roundtrip
        /// Any entry list survives the sealed blob codec under its own
        /// index key, field for field.
        #[test]
        fn prop_index_roundtrip(
            index_key in arbitrary_seed(),
            entries in prop::collection::vec(arbitrary_entry(), 0..8),
        ) {
            let blob = encrypt_index(&entries, &index_key).expect("sealing");
            let decrypted = decrypt_index(&blob, &index_key).expect("unsealing");

            prop_assert_eq!(decrypted, entries);
        }

        /// Property: Index Key Isolation
        /// A sealed blob never opens under a different index key.
        #[test]
        fn prop_index_wrong_key_rejection(
            index_key in arbitrary_seed(),
            other_key in arbitrary_seed(),
            entries in prop::collection::vec(arbitrary_entry(), 1..4),
        ) {
            prop_assume!(index_key != other_key);

            let blob = encrypt_index(&entries, &index_key).expect("sealing");
            prop_assert!(decrypt_index(&blob, &other_key).is_err());
        }

        /// Property: Slot Capacity
        /// A match account accepts exactly two submissions in order and
        /// always rejects a third.
        #[test]
        fn prop_match_slot_capacity(
            first in arbitrary_cipher(),
            second in arbitrary_cipher(),
            third in arbitrary_cipher(),
        ) {
            let state = MatchState::Empty.submit(first).expect("first submission fills slot one");
            prop_assert_eq!(state.fill(), 1);

            let state = state.submit(second).expect("second submission fills slot two");
            prop_assert_eq!(state.fill(), 2);

            match &state {
                MatchState::Mutual { first: one, second: two } => {
                    prop_assert_eq!(one, &first);
                    prop_assert_eq!(two, &second);
                }
                other => prop_assert!(false, "expected mutual state, got {:?}", other),
            }

            let result = state.submit(third);
            prop_assert!(matches!(result, Err(CrushError::ReciprocityViolation(_))));
        }
    }

    /// Regression test: the capacity boundary sits exactly at the empty note
    #[test]
    fn test_note_capacity_boundary() {
        let key = [0x42u8; 32];

        assert!(encrypt_payload(&key, 1, 2, "").is_ok());
        assert!(matches!(
            encrypt_payload(&key, 1, 2, "x"),
            Err(CrushError::CapacityError(_))
        ));
    }

    /// Regression test: a truncated blob fails closed instead of producing entries
    #[test]
    fn test_truncated_index_blob_fails_closed() {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let index_key = [0x42u8; 32];
        let blob = encrypt_index(&[], &index_key).unwrap();

        // Keep valid base64 and a full nonce, cut into the ciphertext.
        let raw = STANDARD.decode(&blob).unwrap();
        let truncated = STANDARD.encode(&raw[..raw.len() - 4]);

        assert!(decrypt_index(&truncated, &index_key).is_err());
    }
}
