//! HTTP client for the directory and relay backend
//!
//! The backend fronts three concerns: user search (directory of ids,
//! usernames and identity keys), the relayer that fee-pays and
//! broadcasts submissions, and opaque per-user index blob storage. The
//! client never sends key material; everything it uploads is already
//! encrypted or public.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{CrushError, Result};

/// A directory entry returned by user search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub username: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Encoded ed25519 wallet key, absent until the user links a wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_key: Option<String>,
}

/// Relay-side view of a broadcast submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayStatus {
    Pending,
    Confirmed,
    Failed { reason: String },
}

#[derive(Deserialize)]
struct ConfigResponse {
    fee_payer: String,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    transaction: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    signature: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct IndexResponse {
    #[serde(default)]
    blob: String,
}

#[derive(Serialize)]
struct IndexUpload<'a> {
    blob: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    users: Vec<UserRecord>,
}

fn parse_status(status: &str, error: Option<String>) -> Result<RelayStatus> {
    match status {
        "pending" => Ok(RelayStatus::Pending),
        "confirmed" => Ok(RelayStatus::Confirmed),
        "failed" => Ok(RelayStatus::Failed {
            reason: error.unwrap_or_else(|| "relay reported failure without detail".to_string()),
        }),
        other => Err(CrushError::RelayError(format!(
            "unrecognized relay status {other:?}"
        ))),
    }
}

/// Backend API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the relayer's fee-payer address
    pub async fn fee_payer(&self) -> Result<String> {
        let resp = self
            .client
            .get(format!("{}/api/config", self.base_url))
            .send()
            .await
            .map_err(|e| CrushError::RelayError(format!("config fetch failed: {e}")))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CrushError::RelayError(format!("config fetch failed: {body}")));
        }

        let config: ConfigResponse = resp
            .json()
            .await
            .map_err(|e| CrushError::RelayError(format!("config response parse error: {e}")))?;

        Ok(config.fee_payer)
    }

    /// Hand a signed, serialized transaction to the relayer for
    /// fee payment and broadcast; returns the transaction signature
    pub async fn relay_transaction(&self, transaction_b64: &str) -> Result<String> {
        let resp = self
            .client
            .post(format!("{}/api/relay", self.base_url))
            .json(&RelayRequest {
                transaction: transaction_b64,
            })
            .send()
            .await
            .map_err(|e| CrushError::RelayError(format!("relay request failed: {e}")))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CrushError::RelayError(format!("relay rejected: {body}")));
        }

        let relayed: RelayResponse = resp
            .json()
            .await
            .map_err(|e| CrushError::RelayError(format!("relay response parse error: {e}")))?;

        Ok(relayed.signature)
    }

    /// Poll the relayer's view of a broadcast transaction
    pub async fn transaction_status(&self, signature: &str) -> Result<RelayStatus> {
        let resp = self
            .client
            .get(format!("{}/api/status", self.base_url))
            .query(&[("signature", signature)])
            .send()
            .await
            .map_err(|e| CrushError::RelayError(format!("status fetch failed: {e}")))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CrushError::RelayError(format!("status fetch failed: {body}")));
        }

        let status: StatusResponse = resp
            .json()
            .await
            .map_err(|e| CrushError::RelayError(format!("status response parse error: {e}")))?;

        parse_status(&status.status, status.error)
    }

    /// Download a user's encrypted index blob; empty string when the
    /// user has never stored one
    pub async fn fetch_index(&self, user_id: u32) -> Result<String> {
        let resp = self
            .client
            .get(format!("{}/api/index/{user_id}", self.base_url))
            .send()
            .await
            .map_err(|e| CrushError::RemoteStoreError(format!("index fetch failed: {e}")))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(String::new());
        }

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CrushError::RemoteStoreError(format!(
                "index fetch failed: {body}"
            )));
        }

        let index: IndexResponse = resp
            .json()
            .await
            .map_err(|e| CrushError::RemoteStoreError(format!("index response parse error: {e}")))?;

        Ok(index.blob)
    }

    /// Replace a user's encrypted index blob
    pub async fn store_index(&self, user_id: u32, blob: &str) -> Result<()> {
        let resp = self
            .client
            .put(format!("{}/api/index/{user_id}", self.base_url))
            .json(&IndexUpload { blob })
            .send()
            .await
            .map_err(|e| CrushError::RemoteStoreError(format!("index upload failed: {e}")))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CrushError::RemoteStoreError(format!(
                "index upload rejected: {body}"
            )));
        }

        Ok(())
    }

    /// Search the directory by username or display name
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>> {
        let resp = self
            .client
            .get(format!("{}/api/search-users", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| CrushError::RemoteStoreError(format!("user search failed: {e}")))?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CrushError::RemoteStoreError(format!(
                "user search failed: {body}"
            )));
        }

        let found: SearchResponse = resp
            .json()
            .await
            .map_err(|e| CrushError::RemoteStoreError(format!("search response parse error: {e}")))?;

        Ok(found.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_vocabulary() {
        assert_eq!(parse_status("pending", None).unwrap(), RelayStatus::Pending);
        assert_eq!(
            parse_status("confirmed", None).unwrap(),
            RelayStatus::Confirmed
        );
        assert_eq!(
            parse_status("failed", Some("blockhash expired".to_string())).unwrap(),
            RelayStatus::Failed {
                reason: "blockhash expired".to_string()
            }
        );
    }

    #[test]
    fn test_parse_status_failed_without_detail() {
        match parse_status("failed", None).unwrap() {
            RelayStatus::Failed { reason } => assert!(!reason.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_rejects_unknown_word() {
        let result = parse_status("finalized", None);
        assert!(matches!(result, Err(CrushError::RelayError(_))));
    }

    #[test]
    fn test_user_record_optional_fields_absent() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id": 7, "username": "ada", "display_name": "Ada L"}"#,
        )
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.username, "ada");
        assert!(record.avatar_url.is_none());
        assert!(record.identity_key.is_none());

        // Absent fields stay off the wire on the way back out.
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("identity_key"));
        assert!(!json.contains("avatar_url"));
    }

    #[test]
    fn test_user_record_with_identity_key() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id": 9, "username": "bo", "display_name": "Bo", "identity_key": "4fYN"}"#,
        )
        .unwrap();
        assert_eq!(record.identity_key.as_deref(), Some("4fYN"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = ApiClient::new("https://crushpact.example/");
        assert_eq!(api.base_url, "https://crushpact.example");

        let api = ApiClient::new("https://crushpact.example");
        assert_eq!(api.base_url, "https://crushpact.example");
    }
}
