//! Error taxonomy for the CrushPact client
//!
//! Derivation and encoding failures abort an attempt outright; network
//! failures are retryable; reconciliation maps failures into per-entry
//! statuses instead of surfacing them here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrushError {
    /// Malformed or ambiguous external encoding (signatures, keys, blobs)
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A derived value missed its mandated fixed size; never retried
    #[error("length error: {0}")]
    LengthError(&'static str),

    /// Payload would not fit the fixed cipher size
    #[error("capacity error: {0}")]
    CapacityError(String),

    /// AEAD authentication failed; returned bytes must not be trusted
    #[error("crypto failure: {0}")]
    CryptoFailure(String),

    /// The pair account already holds two submissions
    #[error("already reciprocated: {0}")]
    ReciprocityViolation(String),

    /// Remote index store unreachable or refused the request
    #[error("remote store error: {0}")]
    RemoteStoreError(String),

    /// Relay endpoint unreachable or refused the transaction
    #[error("relay error: {0}")]
    RelayError(String),

    /// Ledger account bytes did not decode to a known pair state
    #[error("chain state error: {0}")]
    ChainStateError(String),
}

pub type Result<T> = std::result::Result<T, CrushError>;

impl CrushError {
    /// Network-shaped failures worth retrying with bounded backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CrushError::RemoteStoreError(_)
                | CrushError::RelayError(_)
                | CrushError::ChainStateError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CrushError::RelayError("timeout".into()).is_retryable());
        assert!(CrushError::RemoteStoreError("503".into()).is_retryable());
        assert!(CrushError::ChainStateError("rpc down".into()).is_retryable());

        assert!(!CrushError::DecodeError("bad".into()).is_retryable());
        assert!(!CrushError::LengthError("short").is_retryable());
        assert!(!CrushError::ReciprocityViolation("full".into()).is_retryable());
    }

    #[test]
    fn test_display_messages_name_the_category() {
        let err = CrushError::CapacityError("note too long".into());
        assert!(err.to_string().contains("capacity"));

        let err = CrushError::CryptoFailure("tag mismatch".into());
        assert!(err.to_string().contains("crypto"));
    }
}
