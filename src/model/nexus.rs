//! Nexus-wide metadata: platforms, governance, organizations, leaderboards
//! and cross-platform swaps.

use serde::Serialize;
use serde_json::Value;

use super::{Chain, Token};
use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interop {
    pub local: String,
    pub external: String,
}

impl FromNode for Interop {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            local: f.string("local")?,
            external: f.string("external")?,
        })
    }
}

/// An external chain the nexus can swap with
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub platform: String,
    pub chain: String,
    pub fuel: String,
    pub tokens: Vec<String>,
    pub interop: Vec<Interop>,
}

impl FromNode for Platform {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            platform: f.string("platform")?,
            chain: f.string("chain")?,
            fuel: f.string("fuel")?,
            tokens: f.list("tokens")?,
            interop: f.list("interop")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swap {
    pub source_platform: String,
    pub source_chain: String,
    pub source_hash: String,
    pub source_address: String,
    pub destination_platform: String,
    pub destination_chain: String,
    pub destination_hash: String,
    pub destination_address: String,
    pub symbol: String,
    pub value: String,
}

impl FromNode for Swap {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            source_platform: f.string("sourcePlatform")?,
            source_chain: f.string("sourceChain")?,
            source_hash: f.string("sourceHash")?,
            source_address: f.string("sourceAddress")?,
            destination_platform: f.string("destinationPlatform")?,
            destination_chain: f.string("destinationChain")?,
            destination_hash: f.string("destinationHash")?,
            destination_address: f.string("destinationAddress")?,
            symbol: f.string("symbol")?,
            value: f.string("value")?,
        })
    }
}

/// A named governance value
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Governance {
    pub name: String,
    pub value: String,
}

impl FromNode for Governance {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            value: f.string("value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
}

impl FromNode for Organization {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            id: f.string("id")?,
            name: f.string("name")?,
            members: f.list("members")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nexus {
    pub name: String,
    pub platforms: Vec<Platform>,
    pub tokens: Vec<Token>,
    pub chains: Vec<Chain>,
    pub governance: Vec<Governance>,
    pub organizations: Vec<String>,
}

impl Nexus {
    pub fn token(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    pub fn chain(&self, name: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.name == name)
    }
}

impl FromNode for Nexus {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            platforms: f.list("platforms")?,
            tokens: f.list("tokens")?,
            chains: f.list("chains")?,
            governance: f.list("governance")?,
            organizations: f.list("organizations")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub address: String,
    pub value: String,
}

impl FromNode for LeaderboardRow {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            address: f.string("address")?,
            value: f.string("value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub name: String,
    pub rows: Vec<LeaderboardRow>,
}

impl FromNode for Leaderboard {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            rows: f.list("rows")?,
        })
    }
}
