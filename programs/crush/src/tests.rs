//! Unit tests for the crush matching program
//!
//! These tests verify the two-slot transition rules without requiring BPF
//! compilation.

#[cfg(test)]
mod unit_tests {
    use crate::CrushAccount;

    fn fresh_account() -> CrushAccount {
        CrushAccount {
            bump: 0,
            filled: 0,
            cipher_one: [0u8; 48],
            cipher_two: [0u8; 48],
        }
    }

    // ==================== Capacity Tests ====================

    #[test]
    fn test_first_submission_fills_slot_one() {
        let mut account = fresh_account();
        let cipher = [0xAAu8; 48];

        assert!(account.record(cipher).is_ok());
        assert_eq!(account.filled, 1);
        assert_eq!(account.cipher_one, cipher);
        assert_eq!(account.cipher_two, [0u8; 48]);
    }

    #[test]
    fn test_second_submission_fills_slot_two() {
        let mut account = fresh_account();
        let first = [0xAAu8; 48];
        let second = [0xBBu8; 48];

        account.record(first).unwrap();
        assert!(account.record(second).is_ok());

        assert_eq!(account.filled, 2);
        assert_eq!(account.cipher_one, first);
        assert_eq!(account.cipher_two, second);
    }

    #[test]
    fn test_slots_keep_submission_order() {
        let mut account = fresh_account();
        let first = [0x01u8; 48];
        let second = [0x02u8; 48];

        account.record(first).unwrap();
        account.record(second).unwrap();

        // Slot one is always the earlier submission, never reordered.
        assert_eq!(account.cipher_one, first);
        assert_eq!(account.cipher_two, second);
    }

    #[test]
    fn test_third_submission_rejected() {
        let mut account = fresh_account();
        let first = [0xAAu8; 48];
        let second = [0xBBu8; 48];
        let third = [0xCCu8; 48];

        account.record(first).unwrap();
        account.record(second).unwrap();

        let result = account.record(third);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejected_submission_leaves_account_unchanged() {
        let mut account = fresh_account();
        let first = [0xAAu8; 48];
        let second = [0xBBu8; 48];

        account.record(first).unwrap();
        account.record(second).unwrap();
        let _ = account.record([0xCCu8; 48]);

        assert_eq!(account.filled, 2);
        assert_eq!(account.cipher_one, first);
        assert_eq!(account.cipher_two, second);
    }

    #[test]
    fn test_fill_counter_never_exceeds_two() {
        let mut account = fresh_account();

        for i in 0..10u8 {
            let _ = account.record([i; 48]);
        }
        assert_eq!(account.filled, 2);
    }

    // ==================== Layout Tests ====================

    #[test]
    fn test_account_size_matches_layout() {
        // discriminator + bump + filled + two 48-byte slots
        assert_eq!(CrushAccount::SIZE, 8 + 1 + 1 + 48 + 48);
        assert_eq!(CrushAccount::SIZE, 106);
    }

    #[test]
    fn test_seed_prefix() {
        assert_eq!(CrushAccount::SEED, b"crush");
    }

    #[test]
    fn test_identical_ciphers_occupy_both_slots() {
        // Both sides submitting byte-identical ciphers is degenerate but
        // legal at this layer; dedup is not the ledger's job.
        let mut account = fresh_account();
        let cipher = [0x5Au8; 48];

        account.record(cipher).unwrap();
        account.record(cipher).unwrap();

        assert_eq!(account.filled, 2);
        assert_eq!(account.cipher_one, account.cipher_two);
    }
}
