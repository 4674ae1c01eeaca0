//! secp256k1 Schnorr keys and WIF import
//!
//! Private keys travel as WIF text: base58 of
//! `0x80 ‖ key ‖ 0x01 ‖ checksum`, where the checksum is the first four
//! bytes of a double SHA-256 over everything before it.

use k256::schnorr::signature::{Signer, Verifier};
use k256::schnorr::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::Hash;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED: u8 = 0x01;
const WIF_PAYLOAD_LENGTH: usize = 1 + 32 + 1;
const WIF_CHECKSUM_LENGTH: usize = 4;

/// Length of a WIF string for a compressed key
pub const WIF_TEXT_LENGTH: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Invalid WIF: {0}")]
    InvalidWif(&'static str),
}

/// 32-byte private key
#[derive(Clone)]
pub struct PrivateKey(SigningKey);

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// 32-byte x-only public key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(pub [u8; 32]);

impl PrivateKey {
    pub fn generate() -> Self {
        PrivateKey(SigningKey::random(&mut OsRng))
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        SigningKey::from_bytes(bytes)
            .map(PrivateKey)
            .map_err(|_| KeyError::InvalidPrivateKey)
    }

    /// Shape check only: `L` or `K` prefix and 52 characters
    pub fn is_valid_wif(text: &str) -> bool {
        (text.starts_with('L') || text.starts_with('K')) && text.len() == WIF_TEXT_LENGTH
    }

    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        if !Self::is_valid_wif(wif) {
            return Err(KeyError::InvalidWif("expected 52 characters starting with L or K"));
        }

        let data = bs58::decode(wif)
            .into_vec()
            .map_err(|_| KeyError::InvalidWif("not base58"))?;
        if data.len() != WIF_PAYLOAD_LENGTH + WIF_CHECKSUM_LENGTH {
            return Err(KeyError::InvalidWif("wrong payload length"));
        }

        let (payload, checksum) = data.split_at(WIF_PAYLOAD_LENGTH);
        if &wif_checksum(payload)[..] != checksum {
            return Err(KeyError::InvalidWif("checksum mismatch"));
        }
        if payload[0] != WIF_VERSION || payload[WIF_PAYLOAD_LENGTH - 1] != WIF_COMPRESSED {
            return Err(KeyError::InvalidWif("unsupported version"));
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&payload[1..33]);
        Self::from_bytes(&key)
    }

    pub fn to_wif(&self) -> String {
        let mut data = Vec::with_capacity(WIF_PAYLOAD_LENGTH + WIF_CHECKSUM_LENGTH);
        data.push(WIF_VERSION);
        data.extend_from_slice(&self.to_bytes());
        data.push(WIF_COMPRESSED);
        let checksum = wif_checksum(&data);
        data.extend_from_slice(&checksum);
        bs58::encode(data).into_string()
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.verifying_key().to_bytes().into())
    }

    /// 64-byte Schnorr signature over a transaction hash
    pub fn sign(&self, message: &Hash) -> [u8; 64] {
        let signature: Signature = self.0.sign(&message.0);
        signature.to_bytes()
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }
}

impl PublicKey {
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        VerifyingKey::from_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(PublicKey(*bytes))
    }

    pub fn verify(&self, message: &Hash, signature: &[u8]) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let Ok(sig) = Signature::try_from(signature) else {
            return false;
        };
        verifying_key.verify(&message.0, &sig).is_ok()
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0))
    }
}

fn wif_checksum(payload: &[u8]) -> [u8; WIF_CHECKSUM_LENGTH] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut checksum = [0u8; WIF_CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[..WIF_CHECKSUM_LENGTH]);
    checksum
}
