//! Transaction signing seam
//!
//! The client never sees private keys directly. It describes the transaction
//! it wants as a [`SigningRequest`] and a [`TransactionSigner`] hands back the
//! serialized, signed bytes together with the transaction hash.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{hash_bytes, Hash, KeyError, PrivateKey, PublicKey};
use crate::model::Timestamp;

#[derive(Debug, Error)]
pub enum SignError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error("Signer refused: {0}")]
    Refused(String),
}

/// Everything a signer needs to build one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningRequest<'a> {
    pub nexus: &'a str,
    pub chain: &'a str,
    pub script: &'a [u8],
    pub expiration: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub hash: Hash,
    pub bytes: Vec<u8>,
}

/// Holder of the key material used by `sign_and_send_transaction`
pub trait TransactionSigner: Send + Sync {
    fn sign(&self, request: &SigningRequest<'_>) -> Result<SignedTransaction, SignError>;
}

/// Unsigned part of a locally built transaction; its hash is what gets signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBody {
    pub nexus: String,
    pub chain: String,
    pub script: Vec<u8>,
    pub expiration: u32,
}

impl TransactionBody {
    pub fn hash(&self) -> Result<Hash, SignError> {
        let bytes =
            bincode::serialize(self).map_err(|e| SignError::Serialization(e.to_string()))?;
        Ok(hash_bytes(&bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSignature {
    pub public_key: [u8; 32],
    pub signature: Vec<u8>,
}

/// Transaction layout produced by [`LocalSigner`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTransaction {
    pub body: TransactionBody,
    pub signatures: Vec<LocalSignature>,
}

impl LocalTransaction {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignError> {
        bincode::deserialize(bytes).map_err(|e| SignError::Serialization(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SignError> {
        bincode::serialize(self).map_err(|e| SignError::Serialization(e.to_string()))
    }

    /// True when every attached signature is valid for the body hash
    pub fn verify(&self) -> Result<bool, SignError> {
        let hash = self.body.hash()?;
        Ok(!self.signatures.is_empty()
            && self.signatures.iter().all(|sig| {
                PublicKey::from_bytes(&sig.public_key)
                    .map(|key| key.verify(&hash, &sig.signature))
                    .unwrap_or(false)
            }))
    }
}

/// Signs with a key held in process. Meant for simnet and test nodes.
#[derive(Debug, Clone)]
pub struct LocalSigner {
    key: PrivateKey,
}

impl LocalSigner {
    pub fn new(key: PrivateKey) -> Self {
        Self { key }
    }

    pub fn from_wif(wif: &str) -> Result<Self, SignError> {
        Ok(Self::new(PrivateKey::from_wif(wif)?))
    }

    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }
}

impl TransactionSigner for LocalSigner {
    fn sign(&self, request: &SigningRequest<'_>) -> Result<SignedTransaction, SignError> {
        let body = TransactionBody {
            nexus: request.nexus.to_string(),
            chain: request.chain.to_string(),
            script: request.script.to_vec(),
            expiration: request.expiration.as_secs(),
        };
        let hash = body.hash()?;
        let signature = LocalSignature {
            public_key: self.key.public_key().0,
            signature: self.key.sign(&hash).to_vec(),
        };

        let tx = LocalTransaction {
            body,
            signatures: vec![signature],
        };
        Ok(SignedTransaction {
            hash,
            bytes: tx.to_bytes()?,
        })
    }
}
