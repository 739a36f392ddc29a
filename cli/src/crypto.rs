//! Cryptographic derivations for the CrushPact CLI
//!
//! Client-side key schedule for private mutual matching: one wallet
//! signature roots a per-session master secret, every target gets a
//! deterministic stealth keypair, and an X25519 agreement yields the pair
//! key plus the public routing tag addressing the on-chain slot pair.
//!
//! Security properties:
//! - Every secret re-derives from the wallet signature; nothing key-shaped
//!   is ever written to disk
//! - Sensitive material is zeroized on drop
//! - Ledger submissions are signed by the one-off stealth key, never by
//!   the wallet key

use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::{PublicKey as DalekPublicKey, SecretKey as DalekSecretKey};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use solana_sdk::signature::Keypair;
use x25519_dalek::{PublicKey as XPublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::error::{CrushError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Message the wallet signs once per session; all secrets derive from the
/// resulting signature. Changing this constant is a protocol break: every
/// derived key and routing tag changes with it.
pub const SIGNIN_MESSAGE: &[u8] =
    b"CrushPact v1\n\nSign this message to unlock your crushes.\nThe signature never leaves your device.";

/// Label mixed into the index-key derivation
const INDEX_KEY_LABEL: &[u8] = b"HOT";

/// Suffix mixed into the pair-key derivation
const PAIR_KEY_SUFFIX: &[u8] = b"pair";

/// Prefix mixed into the routing-tag derivation
const TAG_PREFIX: &[u8] = b"tag";

// ============================================================================
// Zeroizing Secret Wrapper
// ============================================================================

/// A 32-byte secret that zeroizes its contents on drop
///
/// The inner bytes themselves are wiped, not a copy.
#[derive(Clone)]
pub struct Secret32 {
    bytes: [u8; 32],
}

impl Secret32 {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes (use carefully)
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl Drop for Secret32 {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// SHA-256 over the concatenation of all parts
fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Normalize a wallet signature to its raw 64 bytes.
///
/// Wallets do not agree on one canonical text encoding, so both base-58
/// and standard base-64 are accepted; base-58 is tried first and
/// whichever form decodes to exactly 64 bytes wins.
pub fn decode_signature(encoded: &str) -> Result<[u8; 64]> {
    if let Ok(bytes) = bs58::decode(encoded).into_vec() {
        if bytes.len() == 64 {
            let mut sig = [0u8; 64];
            sig.copy_from_slice(&bytes);
            return Ok(sig);
        }
    }

    use base64::{engine::general_purpose::STANDARD, Engine};
    if let Ok(bytes) = STANDARD.decode(encoded) {
        if bytes.len() == 64 {
            let mut sig = [0u8; 64];
            sig.copy_from_slice(&bytes);
            return Ok(sig);
        }
    }

    Err(CrushError::DecodeError(
        "signature is neither 64-byte base-58 nor base-64".into(),
    ))
}

/// Decode a directory-supplied identity key (base-58 ed25519 public key)
pub fn decode_identity_key(encoded: &str) -> Result<[u8; 32]> {
    let bytes = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| CrushError::DecodeError(format!("identity key is not base-58: {e}")))?;

    if bytes.len() != 32 {
        return Err(CrushError::LengthError("identity key must be 32 bytes"));
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes);
    Ok(key)
}

// ============================================================================
// Session Identity
// ============================================================================

/// Per-session secrets derived from one wallet signature
///
/// Holds the master secret rooting every stealth derivation and the index
/// key guarding the remote attempt list. Neither value is persisted; both
/// fall out of the same signature at the next sign-in.
pub struct SessionKeys {
    master: Secret32,
    index_key: Secret32,
}

// Explicitly NOT implementing Clone to prevent accidental secret duplication

impl SessionKeys {
    /// Derive from an encoded wallet signature over [`SIGNIN_MESSAGE`]
    pub fn from_encoded_signature(encoded: &str) -> Result<Self> {
        let mut signature = decode_signature(encoded)?;
        let keys = Self::from_signature_bytes(&signature);
        signature.zeroize();
        Ok(keys)
    }

    /// Derive from the raw 64 signature bytes
    ///
    /// master = SHA-256(signature); index key = SHA-256("HOT" || master).
    pub fn from_signature_bytes(signature: &[u8; 64]) -> Self {
        let master = sha256(&[signature]);
        let index_key = sha256(&[INDEX_KEY_LABEL, &master]);

        Self {
            master: Secret32::from_bytes(master),
            index_key: Secret32::from_bytes(index_key),
        }
    }

    /// Root secret for stealth derivations (use carefully)
    pub fn master(&self) -> &[u8; 32] {
        self.master.as_bytes()
    }

    /// Key for the encrypted remote index blob
    pub fn index_key(&self) -> &[u8; 32] {
        self.index_key.as_bytes()
    }

    /// Short public fingerprint of this identity, safe to display
    pub fn fingerprint(&self) -> String {
        let digest = sha256(&[b"fpr", self.master.as_bytes()]);
        hex::encode(&digest[..8])
    }
}

// ============================================================================
// Stealth Keypair (per target)
// ============================================================================

/// Deterministic one-off keypair for a single (user, target) pair
///
/// seed = HMAC-SHA256(key = master, message = target identity key). The
/// same inputs reproduce the same keypair on any device at any time, so
/// nothing here needs storing. The public half doubles as the submission
/// signer the ledger sees, which is what keeps the wallet identity off
/// chain.
pub struct StealthKeypair {
    seed: Secret32,
    /// ed25519 public key, published as the submission signer
    pub public: [u8; 32],
}

impl StealthKeypair {
    /// Derive for one target
    pub fn derive(session: &SessionKeys, target_identity: &[u8; 32]) -> Result<Self> {
        let mut mac = HmacSha256::new_from_slice(session.master())
            .map_err(|_| CrushError::LengthError("HMAC key must be 32 bytes"))?;
        mac.update(target_identity);
        let seed: [u8; 32] = mac.finalize().into_bytes().into();

        let secret = DalekSecretKey::from_bytes(&seed)
            .map_err(|e| CrushError::CryptoFailure(format!("stealth seed rejected: {e}")))?;
        let public = DalekPublicKey::from(&secret).to_bytes();

        Ok(Self {
            seed: Secret32::from_bytes(seed),
            public,
        })
    }

    /// Materialize the Solana signer form (64 bytes: seed || public) for
    /// signing the ledger submission
    pub fn to_solana_keypair(&self) -> Result<Keypair> {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(self.seed.as_bytes());
        bytes[32..].copy_from_slice(&self.public);

        let keypair = Keypair::from_bytes(&bytes)
            .map_err(|e| CrushError::CryptoFailure(format!("stealth keypair rejected: {e}")))?;
        bytes.zeroize();
        Ok(keypair)
    }

    pub(crate) fn seed(&self) -> &[u8; 32] {
        self.seed.as_bytes()
    }
}

// ============================================================================
// Curve Conversion + Key Agreement
// ============================================================================

/// Convert an ed25519 seed to its X25519 counterpart.
///
/// First 32 bytes of SHA-512(seed) with ed25519 clamping, which is exactly
/// the scalar the signing side uses; the two curves then agree on what
/// "this key" means.
fn x25519_secret_from_seed(seed: &[u8; 32]) -> StaticSecret {
    let digest = Sha512::digest(seed);
    let mut lower = [0u8; 32];
    lower.copy_from_slice(&digest[..32]);

    lower[0] &= 248;
    lower[31] &= 127;
    lower[31] |= 64;

    let secret = StaticSecret::from(lower);
    lower.zeroize();
    secret
}

/// Convert an ed25519 public key to Montgomery form for X25519
fn x25519_public_from_ed25519(public: &[u8; 32]) -> Result<XPublicKey> {
    let point = CompressedEdwardsY::from_slice(public)
        .decompress()
        .ok_or_else(|| {
            CrushError::DecodeError("identity key is not a valid curve point".into())
        })?;
    Ok(XPublicKey::from(point.to_montgomery().to_bytes()))
}

/// Key agreement between a stealth secret and a target identity key.
///
/// The counterpart can recompute the same value from their long-term
/// secret and this side's published stealth public key: both directions
/// multiply the same two scalars onto the base point.
pub fn shared_secret(stealth: &StealthKeypair, target_identity: &[u8; 32]) -> Result<[u8; 32]> {
    let secret = x25519_secret_from_seed(stealth.seed());
    let target = x25519_public_from_ed25519(target_identity)?;
    let shared = secret.diffie_hellman(&target);
    Ok(*shared.as_bytes())
}

// ============================================================================
// Pair Key + Routing Tag
// ============================================================================

/// Output of the pair derivation: the symmetric key both sides of a match
/// share, and the public tag addressing their slot pair on chain.
pub struct PairSecret {
    key: Secret32,
    /// Public routing tag; safe to expose, not reversible to the key
    pub tag: [u8; 32],
}

impl PairSecret {
    /// Derive from a 32-byte shared secret
    ///
    /// key = SHA-256(shared || "pair"); tag = SHA-256("tag" || key).
    pub fn derive(shared: &[u8; 32]) -> Self {
        let key = sha256(&[shared, PAIR_KEY_SUFFIX]);
        let tag = sha256(&[TAG_PREFIX, &key]);

        Self {
            key: Secret32::from_bytes(key),
            tag,
        }
    }

    /// Reconstruct from a stored pair key (index entries keep the key so
    /// reconciliation can decrypt long after the session that derived it)
    pub fn from_key(key: [u8; 32]) -> Self {
        let tag = sha256(&[TAG_PREFIX, &key]);
        Self {
            key: Secret32::from_bytes(key),
            tag,
        }
    }

    pub fn key(&self) -> &[u8; 32] {
        self.key.as_bytes()
    }
}

/// Full derivation chain for one attempt: stealth keypair, then DH, then
/// pair key and tag. The intermediate shared secret never leaves here.
pub fn derive_pair(
    session: &SessionKeys,
    target_identity: &[u8; 32],
) -> Result<(StealthKeypair, PairSecret)> {
    let stealth = StealthKeypair::derive(session, target_identity)?;
    let mut shared = shared_secret(&stealth, target_identity)?;
    let pair = PairSecret::derive(&shared);
    shared.zeroize();
    Ok((stealth, pair))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;

    fn target_from_seed(seed: [u8; 32]) -> ([u8; 32], [u8; 32]) {
        let secret = DalekSecretKey::from_bytes(&seed).unwrap();
        let public = DalekPublicKey::from(&secret).to_bytes();
        (seed, public)
    }

    #[test]
    fn test_decode_signature_base58() {
        let raw = [0x11u8; 64];
        let encoded = bs58::encode(&raw[..]).into_string();
        assert_eq!(decode_signature(&encoded).unwrap(), raw);
    }

    #[test]
    fn test_decode_signature_base64() {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let raw = [0x2Au8; 64];
        let encoded = STANDARD.encode(raw);
        assert_eq!(decode_signature(&encoded).unwrap(), raw);
    }

    #[test]
    fn test_decode_signature_rejects_wrong_length() {
        let short = bs58::encode(&[0x11u8; 32]).into_string();
        assert!(decode_signature(&short).is_err());
    }

    #[test]
    fn test_decode_signature_rejects_garbage() {
        assert!(decode_signature("not a signature !!!").is_err());
        assert!(decode_signature("").is_err());
    }

    #[test]
    fn test_session_keys_deterministic() {
        let sig = [0x42u8; 64];
        let a = SessionKeys::from_signature_bytes(&sig);
        let b = SessionKeys::from_signature_bytes(&sig);

        assert_eq!(a.master(), b.master());
        assert_eq!(a.index_key(), b.index_key());
        assert_ne!(a.master(), a.index_key());
    }

    #[test]
    fn test_session_keys_from_wallet_signature_roundtrip() {
        // The CLI signs with the local Solana keypair and feeds the
        // base-58 display form back through the decode path.
        let wallet = Keypair::new();
        let signature = wallet.sign_message(SIGNIN_MESSAGE).to_string();

        let a = SessionKeys::from_encoded_signature(&signature).unwrap();
        let b = SessionKeys::from_encoded_signature(&signature).unwrap();
        assert_eq!(a.master(), b.master());
    }

    #[test]
    fn test_stealth_keypair_deterministic() {
        let session = SessionKeys::from_signature_bytes(&[0x01u8; 64]);
        let (_, target) = target_from_seed([0x07u8; 32]);

        let a = StealthKeypair::derive(&session, &target).unwrap();
        let b = StealthKeypair::derive(&session, &target).unwrap();
        assert_eq!(a.public, b.public);
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_stealth_keypair_differs_per_target() {
        let session = SessionKeys::from_signature_bytes(&[0x01u8; 64]);
        let (_, target_a) = target_from_seed([0x07u8; 32]);
        let (_, target_b) = target_from_seed([0x08u8; 32]);

        let a = StealthKeypair::derive(&session, &target_a).unwrap();
        let b = StealthKeypair::derive(&session, &target_b).unwrap();
        assert_ne!(a.public, b.public);
    }

    #[test]
    fn test_solana_keypair_matches_stealth_public() {
        let session = SessionKeys::from_signature_bytes(&[0x03u8; 64]);
        let (_, target) = target_from_seed([0x0Au8; 32]);

        let stealth = StealthKeypair::derive(&session, &target).unwrap();
        let solana = stealth.to_solana_keypair().unwrap();
        assert_eq!(solana.pubkey().to_bytes(), stealth.public);
    }

    #[test]
    fn test_shared_secret_recoverable_by_counterpart() {
        // Sender direction: stealth secret x target's long-term key.
        let session = SessionKeys::from_signature_bytes(&[0x05u8; 64]);
        let (target_seed, target_public) = target_from_seed([0x09u8; 32]);

        let stealth = StealthKeypair::derive(&session, &target_public).unwrap();
        let sender_view = shared_secret(&stealth, &target_public).unwrap();

        // Counterpart direction: long-term secret x published stealth key.
        let counterpart_secret = x25519_secret_from_seed(&target_seed);
        let stealth_point = x25519_public_from_ed25519(&stealth.public).unwrap();
        let counterpart_view = counterpart_secret.diffie_hellman(&stealth_point);

        assert_eq!(sender_view, *counterpart_view.as_bytes());
    }

    #[test]
    fn test_pair_secret_deterministic_and_distinct_from_key() {
        let shared = [0x33u8; 32];
        let a = PairSecret::derive(&shared);
        let b = PairSecret::derive(&shared);

        assert_eq!(a.key(), b.key());
        assert_eq!(a.tag, b.tag);
        assert_ne!(*a.key(), a.tag);
    }

    #[test]
    fn test_pair_secret_from_key_rebuilds_same_tag() {
        let derived = PairSecret::derive(&[0x44u8; 32]);
        let restored = PairSecret::from_key(*derived.key());
        assert_eq!(derived.tag, restored.tag);
    }

    #[test]
    fn test_full_derivation_chain_stable() {
        let session = SessionKeys::from_signature_bytes(&[0x06u8; 64]);
        let (_, target) = target_from_seed([0x0Bu8; 32]);

        let (stealth_a, pair_a) = derive_pair(&session, &target).unwrap();
        let (stealth_b, pair_b) = derive_pair(&session, &target).unwrap();

        assert_eq!(stealth_a.public, stealth_b.public);
        assert_eq!(pair_a.key(), pair_b.key());
        assert_eq!(pair_a.tag, pair_b.tag);
    }

    #[test]
    fn test_decode_identity_key() {
        let key = [0x22u8; 32];
        let encoded = bs58::encode(&key[..]).into_string();
        assert_eq!(decode_identity_key(&encoded).unwrap(), key);

        assert!(decode_identity_key("0OIl not base58").is_err());
        assert!(decode_identity_key(&bs58::encode(&[1u8; 16]).into_string()).is_err());
    }

    #[test]
    fn test_fingerprint_is_short_and_stable() {
        let session = SessionKeys::from_signature_bytes(&[0x0Cu8; 64]);
        let fp = session.fingerprint();
        assert_eq!(fp.len(), 16);
        assert_eq!(fp, session.fingerprint());
    }
}
