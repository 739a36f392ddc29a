//! CrushPact derivation test vectors
//!
//! Fixed-input vectors pinning every derivation step: a wallet signature
//! that always produces the same master secret must keep producing the
//! same stealth keys, pair keys, routing tags, and pair account
//! addresses across releases, or existing submissions become unreadable.

#[cfg(test)]
#[allow(clippy::needless_borrows_for_generic_args)]
mod crush_test_vectors {
    use crate::chain::match_account_address;
    use crate::crypto::{PairSecret, SessionKeys, StealthKeypair};
    use crate::payload::{decrypt_payload, encrypt_payload};

    /// Signature bytes used throughout: sixty-four 0x11 bytes
    const SIGNATURE: [u8; 64] = [0x11u8; 64];

    /// SHA-256 of SIGNATURE
    const MASTER_HEX: &str = "9aed5fce4bb60c40cb8a2983b43540adb4c8ac8aa1ef1f20de57526f9ed86e38";

    /// SHA-256("HOT" || master)
    const INDEX_KEY_HEX: &str =
        "41c530f2b40f4358ad8bddcc8547cee0e2298646809b00006da2d0e044248ed7";

    /// Test Vector 1: Master secret and index key from a fixed signature
    #[test]
    fn test_vector_1_session_key_derivation() {
        let keys = SessionKeys::from_signature_bytes(&SIGNATURE);

        assert_eq!(hex::encode(keys.master()), MASTER_HEX);
        assert_eq!(hex::encode(keys.index_key()), INDEX_KEY_HEX);
    }

    /// Test Vector 2: Both wire encodings of a signature reach the same keys
    ///
    /// Wallets hand signatures over as base-58 or base-64 strings; the
    /// decode path must accept either and land on byte-identical keys.
    #[test]
    fn test_vector_2_signature_decode_forms() {
        let base58_form =
            "LnrbZDPq59Ywk2Ddy9zVxg7KVaDBPRpikn7V7A3ZWgEb2JK6JYLkQKJCbqyeji46k7svBPp5UsFu4v4mh1DGzTJ";
        let base64_form =
            "EREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREREQ==";

        let from_base58 = SessionKeys::from_encoded_signature(base58_form).unwrap();
        let from_base64 = SessionKeys::from_encoded_signature(base64_form).unwrap();

        assert_eq!(hex::encode(from_base58.master()), MASTER_HEX);
        assert_eq!(hex::encode(from_base64.master()), MASTER_HEX);
    }

    /// Test Vector 3: Stealth keypair for a fixed (master, target) pair
    ///
    /// seed = HMAC-SHA256(key = master, msg = target identity key), then
    /// standard ed25519 public key derivation from that seed.
    #[test]
    fn test_vector_3_stealth_derivation() {
        let session = SessionKeys::from_signature_bytes(&SIGNATURE);
        let target = [0x22u8; 32];

        let stealth = StealthKeypair::derive(&session, &target).unwrap();

        assert_eq!(
            hex::encode(stealth.seed()),
            "20a3cea3fc9ca6514e7f6ca6b1ddc1e202d45996141e5dc5fe8c489a6208a150"
        );
        assert_eq!(
            hex::encode(stealth.public),
            "174595d624c9bb8f2d51c3f333771dcb424ca565e245daa19a9d1a8f1979bf48"
        );
    }

    /// Test Vector 4: Pair key and routing tag from a fixed shared secret
    ///
    /// pair key = SHA-256(shared || "pair"); tag = SHA-256("tag" || pair key)
    #[test]
    fn test_vector_4_pair_key_and_tag() {
        let shared = [0x33u8; 32];
        let pair = PairSecret::derive(&shared);

        assert_eq!(
            hex::encode(pair.key()),
            "2ab52dacdb34dbcdf099cf95f4432f3b586538e78b62830828ea242735331867"
        );
        assert_eq!(
            hex::encode(pair.tag),
            "c724b897c494503a18125682cea95fde9cb7b7a51977753c865d2f58da0a1b97"
        );

        // Rebuilding from the stored key recovers the identical tag.
        let rebuilt = PairSecret::from_key(*pair.key());
        assert_eq!(rebuilt.tag, pair.tag);
    }

    /// Test Vector 5: Session fingerprint display form
    #[test]
    fn test_vector_5_fingerprint() {
        let keys = SessionKeys::from_signature_bytes(&SIGNATURE);
        assert_eq!(keys.fingerprint(), "2e3b17f65578e671");
    }

    /// Test Vector 6: Submission instruction prefix on the wire
    #[test]
    fn test_vector_6_submit_instruction_prefix() {
        use crate::relay::build_submit_transaction;
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        use solana_sdk::{hash::Hash, pubkey::Pubkey, transaction::Transaction};

        let session = SessionKeys::from_signature_bytes(&SIGNATURE);
        let stealth = StealthKeypair::derive(&session, &[0x22u8; 32]).unwrap();

        let encoded = build_submit_transaction(
            &stealth,
            &Pubkey::new_unique().to_string(),
            &[0xAAu8; 32],
            &[0xBBu8; 48],
            Hash::new_unique(),
        )
        .unwrap();

        let transaction: Transaction =
            bincode::deserialize(&STANDARD.decode(encoded).unwrap()).unwrap();
        let data = &transaction.message.instructions[0].data;

        // sha256("global:submit_crush")[..8]
        assert_eq!(&data[..8], &[14, 193, 87, 181, 48, 255, 172, 112]);
    }

    /// Test Vector 7: Pair account address for the vector tag
    #[test]
    fn test_vector_7_pair_account_address() {
        use std::str::FromStr;
        use solana_sdk::pubkey::Pubkey;

        let tag: [u8; 32] = hex::decode(
            "c724b897c494503a18125682cea95fde9cb7b7a51977753c865d2f58da0a1b97",
        )
        .unwrap()
        .try_into()
        .unwrap();

        let address = match_account_address(&tag).unwrap();
        assert_eq!(
            address,
            Pubkey::from_str("8rWuow7YryagWU4rmEkFZKWwRSASkwobtW3NsDG7miGN").unwrap()
        );
    }

    /// Test Vector 8: Identifier extremes survive the payload
    #[test]
    fn test_vector_8_identifier_extremes() {
        let pair_key = [0x44u8; 32];

        for (own, target) in [(0u32, u32::MAX), (u32::MAX, 0), (1, 1)] {
            let cipher = encrypt_payload(&pair_key, own, target, "").unwrap();
            assert_eq!(decrypt_payload(&pair_key, &cipher).unwrap(), (own, target));
        }
    }

    /// Test Vector 9: Sealed index blob shape
    ///
    /// base64(nonce || ciphertext) with a 12-byte nonce and a 16-byte
    /// authentication tag; two seals of the same list must differ.
    #[test]
    fn test_vector_9_index_blob_shape() {
        use crate::index::{decrypt_index, encrypt_index};
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let key = [0x55u8; 32];
        let blob_one = encrypt_index(&[], &key).unwrap();
        let blob_two = encrypt_index(&[], &key).unwrap();

        assert_ne!(blob_one, blob_two);

        let raw = STANDARD.decode(&blob_one).unwrap();
        // 12-byte nonce, empty JSON list "[]", 16-byte tag
        assert_eq!(raw.len(), 12 + 2 + 16);

        assert!(decrypt_index(&blob_one, &key).unwrap().is_empty());
    }

    /// Test Vector 10: Repeated full derivations stay byte-stable
    #[test]
    fn test_vector_10_derivation_stress() {
        for _ in 0..50 {
            let session = SessionKeys::from_signature_bytes(&SIGNATURE);
            let stealth = StealthKeypair::derive(&session, &[0x22u8; 32]).unwrap();

            assert_eq!(hex::encode(session.master()), MASTER_HEX);
            assert_eq!(
                hex::encode(stealth.public),
                "174595d624c9bb8f2d51c3f333771dcb424ca565e245daa19a9d1a8f1979bf48"
            );
        }
    }
}
