//! Encrypted attempt index
//!
//! The full list of crush attempts is serialized to JSON, sealed with
//! AES-256-GCM under the session index key, and stored remotely as an
//! opaque base-64 blob. The server learns nothing beyond blob size and
//! update timing. Pair keys ride inside the blob so a later session can
//! decrypt a counterpart's slot without the counterpart's help.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{CrushError, Result};

/// AES-GCM nonce size for the index blob
const BLOB_NONCE_SIZE: usize = 12;

/// State of one attempt, as the reconciler classifies it
///
/// A closed set on purpose: every reconciliation branch lands on exactly
/// one of these and the compiler checks the match arms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryStatus {
    /// Submitted; counterpart slot not yet seen filled
    Pending,
    /// Both slots filled and the counterpart's payload decrypted
    Mutual { our_id: u32, their_id: u32 },
    /// Both slots filled but the counterpart's payload failed authentication
    MutualDecryptionFailed,
    /// Both slots filled and neither slot matches our recorded cipher
    MutualDecryptionKeyMismatch,
    /// Both slots filled but this entry has no stored pair key
    MutualKeyMissing,
}

impl EntryStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, EntryStatus::Pending)
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Mutual { .. } => "mutual",
            EntryStatus::MutualDecryptionFailed => "mutual_decryption_failed",
            EntryStatus::MutualDecryptionKeyMismatch => "mutual_decryption_key_mismatch",
            EntryStatus::MutualKeyMissing => "mutual_key_missing",
        }
    }
}

/// Who an attempt targeted, as the directory described them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub user_id: u32,
    pub username: String,
    /// base-58 ed25519 identity key
    pub identity_key: String,
}

/// One attempt record
///
/// Byte fields travel hex-encoded because the list is JSON inside the
/// sealed blob. The pair key is the one secret that must survive the
/// session; it is wiped from memory when the entry drops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrushEntry {
    /// Routing tag (hex, 64 chars)
    pub tag: String,
    /// Own submitted cipher (hex, 96 chars)
    pub cipher: String,
    /// Pair key for decrypting the counterpart's slot (hex); absent only
    /// if a record lost it
    pub pair_key: Option<String>,
    pub status: EntryStatus,
    pub target: TargetInfo,
    /// RFC 3339 submission time
    pub created_at: String,
    /// Relay-reported submission signature (base-58)
    pub submit_signature: Option<String>,
}

impl CrushEntry {
    pub fn new(
        tag: [u8; 32],
        cipher: [u8; 48],
        pair_key: [u8; 32],
        target: TargetInfo,
        submit_signature: Option<String>,
    ) -> Self {
        Self {
            tag: hex::encode(tag),
            cipher: hex::encode(cipher),
            pair_key: Some(hex::encode(pair_key)),
            status: EntryStatus::Pending,
            target,
            created_at: chrono::Utc::now().to_rfc3339(),
            submit_signature,
        }
    }

    pub fn tag_bytes(&self) -> Result<[u8; 32]> {
        decode_hex_array(&self.tag, "entry tag")
    }

    pub fn cipher_bytes(&self) -> Result<[u8; 48]> {
        decode_hex_array(&self.cipher, "entry cipher")
    }

    pub fn pair_key_bytes(&self) -> Result<Option<[u8; 32]>> {
        match &self.pair_key {
            Some(key) => Ok(Some(decode_hex_array(key, "entry pair key")?)),
            None => Ok(None),
        }
    }
}

impl Drop for CrushEntry {
    fn drop(&mut self) {
        if let Some(ref mut key) = self.pair_key {
            key.zeroize();
        }
    }
}

fn decode_hex_array<const N: usize>(value: &str, what: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(value)
        .map_err(|e| CrushError::DecodeError(format!("{what} is not hex: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| CrushError::DecodeError(format!("{what} has the wrong length")))
}

/// Find an entry by its hex tag
pub fn find_by_tag<'a>(entries: &'a [CrushEntry], tag: &str) -> Option<&'a CrushEntry> {
    entries.iter().find(|entry| entry.tag == tag)
}

/// Append a new entry, or replace the one with the same tag.
///
/// Entries are never deleted; resubmitting to a known tag refreshes the
/// record instead of duplicating it.
pub fn upsert_entry(entries: &mut Vec<CrushEntry>, entry: CrushEntry) {
    match entries.iter_mut().find(|existing| existing.tag == entry.tag) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }
}

// ============================================================================
// Blob Codec
// ============================================================================

/// Seal the entry list into a base-64 blob: 12-byte nonce || ciphertext.
pub fn encrypt_index(entries: &[CrushEntry], index_key: &[u8; 32]) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(index_key)
        .map_err(|_| CrushError::LengthError("index key must be 32 bytes"))?;

    let mut nonce_bytes = [0u8; BLOB_NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from(nonce_bytes);

    let plaintext = serde_json::to_vec(entries)
        .map_err(|e| CrushError::DecodeError(format!("index serialization failed: {e}")))?;

    let sealed = cipher
        .encrypt(&nonce, plaintext.as_ref())
        .map_err(|_| CrushError::CryptoFailure("index encryption failed".into()))?;

    let mut blob = Vec::with_capacity(BLOB_NONCE_SIZE + sealed.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&sealed);
    Ok(b64::encode(&blob))
}

/// Open a stored blob back into the entry list.
///
/// An empty blob is a first session, not an error. Anything else that
/// fails here is data loss the caller must surface, never paper over
/// with an empty list.
pub fn decrypt_index(blob: &str, index_key: &[u8; 32]) -> Result<Vec<CrushEntry>> {
    if blob.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = b64::decode(blob)?;
    if bytes.len() < BLOB_NONCE_SIZE {
        return Err(CrushError::DecodeError("index blob shorter than its nonce".into()));
    }

    let (nonce_bytes, sealed) = bytes.split_at(BLOB_NONCE_SIZE);
    let nonce_array: [u8; BLOB_NONCE_SIZE] = nonce_bytes
        .try_into()
        .map_err(|_| CrushError::DecodeError("index blob nonce malformed".into()))?;
    let nonce = Nonce::from(nonce_array);

    let cipher = Aes256Gcm::new_from_slice(index_key)
        .map_err(|_| CrushError::LengthError("index key must be 32 bytes"))?;

    let plaintext = cipher
        .decrypt(&nonce, sealed)
        .map_err(|_| CrushError::CryptoFailure("index authentication failed".into()))?;

    serde_json::from_slice(&plaintext)
        .map_err(|e| CrushError::DecodeError(format!("index plaintext malformed: {e}")))
}

// Base64 encoding/decoding helpers
mod b64 {
    use base64::{engine::general_purpose::STANDARD, Engine};

    use crate::error::CrushError;

    pub fn encode(data: &[u8]) -> String {
        STANDARD.encode(data)
    }

    pub fn decode(s: &str) -> Result<Vec<u8>, CrushError> {
        STANDARD
            .decode(s)
            .map_err(|e| CrushError::DecodeError(format!("base64 decode error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x51u8; 32];

    fn sample_target() -> TargetInfo {
        TargetInfo {
            user_id: 4242,
            username: "wren".to_string(),
            identity_key: bs58::encode(&[0x11u8; 32]).into_string(),
        }
    }

    fn sample_entry() -> CrushEntry {
        CrushEntry::new(
            [0xA1u8; 32],
            [0xB2u8; 48],
            [0xC3u8; 32],
            sample_target(),
            Some("5igSig".to_string()),
        )
    }

    #[test]
    fn test_roundtrip() {
        let mut entries = vec![sample_entry()];
        entries[0].status = EntryStatus::Mutual {
            our_id: 7,
            their_id: 4242,
        };

        let blob = encrypt_index(&entries, &KEY).unwrap();
        let restored = decrypt_index(&blob, &KEY).unwrap();
        assert_eq!(restored, entries);
    }

    #[test]
    fn test_roundtrip_empty_list() {
        let blob = encrypt_index(&[], &KEY).unwrap();
        let restored = decrypt_index(&blob, &KEY).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_empty_blob_is_empty_list() {
        assert_eq!(decrypt_index("", &KEY).unwrap(), Vec::<CrushEntry>::new());
    }

    #[test]
    fn test_wrong_key_is_crypto_failure() {
        let blob = encrypt_index(&[sample_entry()], &KEY).unwrap();
        let result = decrypt_index(&blob, &[0x52u8; 32]);
        assert!(matches!(result, Err(CrushError::CryptoFailure(_))));
    }

    #[test]
    fn test_corrupted_blob_is_crypto_failure() {
        let blob = encrypt_index(&[sample_entry()], &KEY).unwrap();
        let mut bytes = b64::decode(&blob).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;

        let result = decrypt_index(&b64::encode(&bytes), &KEY);
        assert!(matches!(result, Err(CrushError::CryptoFailure(_))));
    }

    #[test]
    fn test_garbage_blob_is_decode_error() {
        let result = decrypt_index("not/valid/base64!!!", &KEY);
        assert!(matches!(result, Err(CrushError::DecodeError(_))));
    }

    #[test]
    fn test_truncated_blob_is_decode_error() {
        let short = b64::encode(&[0u8; 5]);
        let result = decrypt_index(&short, &KEY);
        assert!(matches!(result, Err(CrushError::DecodeError(_))));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&EntryStatus::MutualDecryptionFailed).unwrap();
        assert!(json.contains("mutual_decryption_failed"));

        let json = serde_json::to_string(&EntryStatus::Mutual {
            our_id: 1,
            their_id: 2,
        })
        .unwrap();
        assert!(json.contains("\"state\":\"mutual\""));
        assert!(json.contains("\"our_id\":1"));
        assert!(json.contains("\"their_id\":2"));
    }

    #[test]
    fn test_entry_byte_accessors() {
        let entry = sample_entry();
        assert_eq!(entry.tag_bytes().unwrap(), [0xA1u8; 32]);
        assert_eq!(entry.cipher_bytes().unwrap(), [0xB2u8; 48]);
        assert_eq!(entry.pair_key_bytes().unwrap(), Some([0xC3u8; 32]));
    }

    #[test]
    fn test_entry_rejects_malformed_hex() {
        let mut entry = sample_entry();
        entry.tag = "zz".repeat(32);
        assert!(matches!(entry.tag_bytes(), Err(CrushError::DecodeError(_))));

        let mut entry = sample_entry();
        entry.cipher = "ab".repeat(10);
        assert!(matches!(entry.cipher_bytes(), Err(CrushError::DecodeError(_))));
    }

    #[test]
    fn test_missing_pair_key_reads_as_none() {
        let mut entry = sample_entry();
        entry.pair_key = None;
        assert_eq!(entry.pair_key_bytes().unwrap(), None);
    }

    #[test]
    fn test_find_and_upsert_by_tag() {
        let mut entries = vec![sample_entry()];
        let tag = entries[0].tag.clone();

        assert!(find_by_tag(&entries, &tag).is_some());
        assert!(find_by_tag(&entries, &"00".repeat(32)).is_none());

        // Replacing by tag keeps the list at one record.
        let mut replacement = sample_entry();
        replacement.status = EntryStatus::MutualKeyMissing;
        upsert_entry(&mut entries, replacement);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, EntryStatus::MutualKeyMissing);

        // A new tag appends.
        let mut other = sample_entry();
        other.tag = "ff".repeat(32);
        upsert_entry(&mut entries, other);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_new_entry_starts_pending_with_timestamp() {
        let entry = sample_entry();
        assert!(entry.status.is_pending());
        assert!(chrono::DateTime::parse_from_rfc3339(&entry.created_at).is_ok());
    }
}
