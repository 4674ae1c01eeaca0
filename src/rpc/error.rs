//! Error taxonomy of a node call

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::TransportError;
use crate::crypto::{Hash, SignError};
use crate::decode::DecodeError;

/// Classification reported for every failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Network failure, timeout or non-2xx status
    WebRequestError,
    /// Response body is not JSON
    FailedParsingJson,
    /// Node answered with an `error` member
    ApiError,
    /// Neither `error` nor `result` present
    MalformedResponse,
    /// Result present but not of the expected shape
    DecodeError,
    /// The signer refused to produce a transaction
    SigningError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::WebRequestError => "WEB_REQUEST_ERROR",
            ErrorKind::FailedParsingJson => "FAILED_PARSING_JSON",
            ErrorKind::ApiError => "API_ERROR",
            ErrorKind::MalformedResponse => "MALFORMED_RESPONSE",
            ErrorKind::DecodeError => "DECODE_ERROR",
            ErrorKind::SigningError => "SIGNING_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Web request failed: {0}")]
    WebRequest(#[from] TransportError),
    #[error("Failed to parse JSON: {0}")]
    FailedParsingJson(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Malformed response")]
    MalformedResponse,
    #[error("Cannot decode result of {method}: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("Signing failed: {0}")]
    Signing(#[from] SignError),
    /// A signed transaction whose submission failed. The node may still
    /// have accepted it, so the hash is kept for tracking.
    #[error("Submitting transaction {hash} failed: {source}")]
    Submit {
        hash: Hash,
        #[source]
        source: Box<SdkError>,
    },
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::WebRequest(_) => ErrorKind::WebRequestError,
            SdkError::FailedParsingJson(_) => ErrorKind::FailedParsingJson,
            SdkError::Api(_) => ErrorKind::ApiError,
            SdkError::MalformedResponse => ErrorKind::MalformedResponse,
            SdkError::Decode { .. } => ErrorKind::DecodeError,
            SdkError::Signing(_) => ErrorKind::SigningError,
            SdkError::Submit { source, .. } => source.kind(),
        }
    }

    /// Human readable detail without the kind prefix.
    /// For `API_ERROR` this is the node's message verbatim.
    pub fn message(&self) -> String {
        match self {
            SdkError::WebRequest(e) => e.to_string(),
            SdkError::FailedParsingJson(_) => "failed to parse JSON".to_string(),
            SdkError::Api(message) => message.clone(),
            SdkError::MalformedResponse => "malformed response".to_string(),
            SdkError::Decode { source, .. } => source.to_string(),
            SdkError::Signing(e) => e.to_string(),
            SdkError::Submit { source, .. } => source.message(),
        }
    }

    /// Hash of a signed transaction whose submission failed
    pub fn transaction_hash(&self) -> Option<Hash> {
        match self {
            SdkError::Submit { hash, .. } => Some(*hash),
            _ => None,
        }
    }
}
