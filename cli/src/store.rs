//! Encrypted index persistence
//!
//! The caller's crush index lives server-side as one opaque blob, wrapped
//! with the index key before upload and unwrapped after download. The
//! `IndexStore` seam keeps that load/save cycle identical whether the
//! blob sits behind the backend API or in memory for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::error::{CrushError, Result};
use crate::index::{decrypt_index, encrypt_index, CrushEntry};

/// Load/save surface for the encrypted index
#[async_trait]
pub trait IndexStore {
    /// Fetch and decrypt the caller's entries; a store that has never
    /// been written yields an empty list
    async fn load(&self, index_key: &[u8; 32]) -> Result<Vec<CrushEntry>>;

    /// Encrypt the caller's entries and replace the stored blob
    async fn save(&self, index_key: &[u8; 32], entries: &[CrushEntry]) -> Result<()>;
}

/// Backend-hosted index store for one user
pub struct HttpIndexStore {
    api: ApiClient,
    user_id: u32,
}

impl HttpIndexStore {
    pub fn new(api: ApiClient, user_id: u32) -> Self {
        Self { api, user_id }
    }
}

#[async_trait]
impl IndexStore for HttpIndexStore {
    async fn load(&self, index_key: &[u8; 32]) -> Result<Vec<CrushEntry>> {
        let blob = self.api.fetch_index(self.user_id).await?;
        decrypt_index(&blob, index_key)
    }

    async fn save(&self, index_key: &[u8; 32], entries: &[CrushEntry]) -> Result<()> {
        let blob = encrypt_index(entries, index_key)?;
        self.api.store_index(self.user_id, &blob).await
    }
}

/// In-memory store holding the same encrypted blob a server would
#[derive(Default)]
pub struct MemoryIndexStore {
    blob: Mutex<String>,
}

impl MemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IndexStore for MemoryIndexStore {
    async fn load(&self, index_key: &[u8; 32]) -> Result<Vec<CrushEntry>> {
        let blob = self
            .blob
            .lock()
            .map_err(|_| CrushError::RemoteStoreError("store lock poisoned".into()))?
            .clone();
        decrypt_index(&blob, index_key)
    }

    async fn save(&self, index_key: &[u8; 32], entries: &[CrushEntry]) -> Result<()> {
        let encrypted = encrypt_index(entries, index_key)?;
        let mut blob = self
            .blob
            .lock()
            .map_err(|_| CrushError::RemoteStoreError("store lock poisoned".into()))?;
        *blob = encrypted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::TargetInfo;

    fn sample_entry(tag_byte: u8) -> CrushEntry {
        CrushEntry::new(
            [tag_byte; 32],
            [0x44u8; 48],
            [0x55u8; 32],
            TargetInfo {
                user_id: 12,
                username: "casey".to_string(),
                identity_key: "3xyz".to_string(),
            },
            None,
        )
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryIndexStore::new();
        let key = [0x07u8; 32];

        let entries = vec![sample_entry(0x01), sample_entry(0x02)];
        store.save(&key, &entries).await.unwrap();

        let loaded = store.load(&key).await.unwrap();
        assert_eq!(loaded, entries);
    }

    #[tokio::test]
    async fn test_fresh_store_loads_empty() {
        let store = MemoryIndexStore::new();
        let loaded = store.load(&[0x07u8; 32]).await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_blob() {
        let store = MemoryIndexStore::new();
        let key = [0x07u8; 32];

        store.save(&key, &[sample_entry(0x01)]).await.unwrap();
        store
            .save(&key, &[sample_entry(0x02), sample_entry(0x03)])
            .await
            .unwrap();

        let loaded = store.load(&key).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].tag_bytes().unwrap(), [0x02u8; 32]);
    }

    #[tokio::test]
    async fn test_wrong_key_cannot_read_blob() {
        let store = MemoryIndexStore::new();
        store.save(&[0x07u8; 32], &[sample_entry(0x01)]).await.unwrap();

        let result = store.load(&[0x08u8; 32]).await;
        assert!(matches!(result, Err(CrushError::CryptoFailure(_))));
    }
}
