//! Peers, validators, relay channels and archives

use serde::Serialize;
use serde_json::Value;

use super::Timestamp;
use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub url: String,
    pub flags: String,
    pub fee: String,
    pub pow: u32,
}

impl FromNode for Peer {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            url: f.string("url")?,
            flags: f.string("flags")?,
            fee: f.string("fee")?,
            pow: f.int("pow")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    pub address: String,
    /// `Primary`, `Secondary` or `Invalid`
    #[serde(rename = "type")]
    pub validator_type: String,
}

impl FromNode for Validator {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            address: f.string("address")?,
            validator_type: f.string("type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub creator_address: String,
    pub target_address: String,
    pub name: String,
    pub chain: String,
    pub creation_time: Timestamp,
    pub symbol: String,
    pub fee: String,
    pub balance: String,
    pub active: bool,
    pub index: i32,
}

impl FromNode for Channel {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            creator_address: f.string("creatorAddress")?,
            target_address: f.string("targetAddress")?,
            name: f.string("name")?,
            chain: f.string("chain")?,
            creation_time: f.timestamp("creationTime")?,
            symbol: f.string("symbol")?,
            fee: f.string("fee")?,
            balance: f.string("balance")?,
            active: f.boolean("active")?,
            index: f.int("index")?,
        })
    }
}

/// A relay message addressed to an account
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub nexus: String,
    pub channel: String,
    pub index: String,
    pub timestamp: Timestamp,
    pub sender: String,
    pub receiver: String,
    pub script: String,
}

impl FromNode for Receipt {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            nexus: f.string("nexus")?,
            channel: f.string("channel")?,
            index: f.string("index")?,
            timestamp: f.timestamp("timestamp")?,
            sender: f.string("sender")?,
            receiver: f.string("receiver")?,
            script: f.string("script")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub hash: String,
    pub size: u32,
    pub flags: String,
    pub key: String,
    pub block_count: i32,
    pub metadata: Vec<String>,
}

impl FromNode for Archive {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            hash: f.string("hash")?,
            size: f.int("size")?,
            flags: f.string("flags")?,
            key: f.string("key")?,
            block_count: f.int("blockCount")?,
            metadata: f.list("metadata")?,
        })
    }
}

/// Reply shape of a raw transaction submission
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRawTx {
    pub hash: String,
    pub error: String,
}

impl SendRawTx {
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

impl FromNode for SendRawTx {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        match node {
            // some nodes answer with the bare hash
            Value::String(hash) => Ok(Self {
                hash: hash.clone(),
                error: String::new(),
            }),
            _ => {
                let f = Fields::of(node)?;
                Ok(Self {
                    hash: f.string("hash")?,
                    error: f.string("error")?,
                })
            }
        }
    }
}
