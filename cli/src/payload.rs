//! Fixed-size match payload encryption
//!
//! A submission is always exactly 48 bytes on the wire: a 24-byte
//! XChaCha20 nonce, 8 bytes of ciphertext carrying the two user
//! identifiers, and the 16-byte Poly1305 tag. The fixed geometry means a
//! chain observer learns nothing from length and the two-slot account can
//! reserve exact space.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use rand::{rngs::OsRng, RngCore};

use crate::error::{CrushError, Result};

/// Total cipher size on the wire
pub const CIPHER_SIZE: usize = 48;

/// XChaCha20 nonce size
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag size
const TAG_SIZE: usize = 16;

/// Identifier-pair plaintext size (two u32, little-endian)
const PLAINTEXT_SIZE: usize = 8;

/// Encrypt an identifier pair into the fixed 48-byte wire form.
///
/// `note` is reserved room that the current geometry cannot honor: nonce
/// and tag already take 40 of the 48 bytes, so anything non-empty fails
/// with `CapacityError` before any encryption is attempted.
pub fn encrypt_payload(
    pair_key: &[u8; 32],
    own_id: u32,
    target_id: u32,
    note: &str,
) -> Result<[u8; CIPHER_SIZE]> {
    if NONCE_SIZE + PLAINTEXT_SIZE + note.len() + TAG_SIZE > CIPHER_SIZE {
        return Err(CrushError::CapacityError(format!(
            "note of {} bytes does not fit the {}-byte cipher",
            note.len(),
            CIPHER_SIZE
        )));
    }

    let mut plaintext = [0u8; PLAINTEXT_SIZE];
    plaintext[..4].copy_from_slice(&own_id.to_le_bytes());
    plaintext[4..].copy_from_slice(&target_id.to_le_bytes());

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let cipher = XChaCha20Poly1305::new(pair_key.into());
    let sealed = cipher
        .encrypt(XNonce::from_slice(&nonce), plaintext.as_ref())
        .map_err(|_| CrushError::CryptoFailure("payload encryption failed".into()))?;

    if sealed.len() > CIPHER_SIZE - NONCE_SIZE {
        return Err(CrushError::LengthError("sealed payload exceeds cipher capacity"));
    }

    // Output starts zeroed, so a short sealed length leaves right-side
    // zero padding rather than uninitialized bytes. With an empty note
    // the sealed part is exactly 24 bytes and fills the buffer.
    let mut out = [0u8; CIPHER_SIZE];
    out[..NONCE_SIZE].copy_from_slice(&nonce);
    out[NONCE_SIZE..NONCE_SIZE + sealed.len()].copy_from_slice(&sealed);
    Ok(out)
}

/// Decrypt a 48-byte cipher back to its identifier pair.
///
/// Returns (submitter id, target id) as the submitter encoded them. On
/// authentication failure nothing about the returned bytes can be
/// trusted, so nothing is returned.
pub fn decrypt_payload(pair_key: &[u8; 32], cipher_bytes: &[u8]) -> Result<(u32, u32)> {
    if cipher_bytes.len() != CIPHER_SIZE {
        return Err(CrushError::LengthError("cipher must be exactly 48 bytes"));
    }

    let (nonce, sealed) = cipher_bytes.split_at(NONCE_SIZE);

    let cipher = XChaCha20Poly1305::new(pair_key.into());
    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), sealed)
        .map_err(|_| CrushError::CryptoFailure("payload authentication failed".into()))?;

    if plaintext.len() != PLAINTEXT_SIZE {
        return Err(CrushError::LengthError("payload plaintext must be 8 bytes"));
    }

    let mut own = [0u8; 4];
    let mut target = [0u8; 4];
    own.copy_from_slice(&plaintext[..4]);
    target.copy_from_slice(&plaintext[4..]);

    Ok((u32::from_le_bytes(own), u32::from_le_bytes(target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x2Au8; 32];

    #[test]
    fn test_roundtrip() {
        let cipher = encrypt_payload(&KEY, 1001, 2002, "").unwrap();
        let (own, target) = decrypt_payload(&KEY, &cipher).unwrap();
        assert_eq!(own, 1001);
        assert_eq!(target, 2002);
    }

    #[test]
    fn test_roundtrip_extreme_ids() {
        for (own, target) in [(0u32, 0u32), (u32::MAX, 0), (0, u32::MAX), (u32::MAX, u32::MAX)] {
            let cipher = encrypt_payload(&KEY, own, target, "").unwrap();
            assert_eq!(decrypt_payload(&KEY, &cipher).unwrap(), (own, target));
        }
    }

    #[test]
    fn test_output_is_exactly_48_bytes() {
        let cipher = encrypt_payload(&KEY, 7, 8, "").unwrap();
        assert_eq!(cipher.len(), CIPHER_SIZE);
    }

    #[test]
    fn test_nonempty_note_fails_with_capacity_error() {
        let result = encrypt_payload(&KEY, 1, 2, "x");
        assert!(matches!(result, Err(CrushError::CapacityError(_))));

        let result = encrypt_payload(&KEY, 1, 2, "see you at the party");
        assert!(matches!(result, Err(CrushError::CapacityError(_))));
    }

    #[test]
    fn test_wrong_key_fails_authentication() {
        let cipher = encrypt_payload(&KEY, 10, 20, "").unwrap();
        let wrong_key = [0x2Bu8; 32];

        let result = decrypt_payload(&wrong_key, &cipher);
        assert!(matches!(result, Err(CrushError::CryptoFailure(_))));
    }

    #[test]
    fn test_tampered_cipher_fails_authentication() {
        let mut cipher = encrypt_payload(&KEY, 10, 20, "").unwrap();
        cipher[NONCE_SIZE] ^= 0xFF;

        let result = decrypt_payload(&KEY, &cipher);
        assert!(matches!(result, Err(CrushError::CryptoFailure(_))));
    }

    #[test]
    fn test_tampered_nonce_fails_authentication() {
        let mut cipher = encrypt_payload(&KEY, 10, 20, "").unwrap();
        cipher[0] ^= 0x01;

        assert!(decrypt_payload(&KEY, &cipher).is_err());
    }

    #[test]
    fn test_decrypt_rejects_wrong_length() {
        let result = decrypt_payload(&KEY, &[0u8; 47]);
        assert!(matches!(result, Err(CrushError::LengthError(_))));

        let result = decrypt_payload(&KEY, &[0u8; 49]);
        assert!(matches!(result, Err(CrushError::LengthError(_))));

        let result = decrypt_payload(&KEY, &[]);
        assert!(matches!(result, Err(CrushError::LengthError(_))));
    }

    #[test]
    fn test_fresh_nonce_per_encryption() {
        let a = encrypt_payload(&KEY, 1, 2, "").unwrap();
        let b = encrypt_payload(&KEY, 1, 2, "").unwrap();

        assert_ne!(a[..NONCE_SIZE], b[..NONCE_SIZE]);
        assert_ne!(a, b);

        // Both still decrypt to the same pair.
        assert_eq!(decrypt_payload(&KEY, &a).unwrap(), (1, 2));
        assert_eq!(decrypt_payload(&KEY, &b).unwrap(), (1, 2));
    }

    #[test]
    fn test_garbage_cipher_fails_closed() {
        let garbage = [0x5Au8; CIPHER_SIZE];
        assert!(decrypt_payload(&KEY, &garbage).is_err());
    }
}
