//! Account state: balances and stake

use serde::Serialize;
use serde_json::Value;

use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stake {
    pub amount: String,
    pub time: u32,
    pub unclaimed: String,
}

impl FromNode for Stake {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            amount: f.string("amount")?,
            time: f.int("time")?,
            unclaimed: f.string("unclaimed")?,
        })
    }
}

/// Holdings of one token on one chain
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub chain: String,
    /// Raw amount in the token's smallest unit
    pub amount: String,
    pub symbol: String,
    pub decimals: u32,
    /// Owned NFT ids, empty for fungible tokens
    pub ids: Vec<String>,
}

impl FromNode for Balance {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            chain: f.string("chain")?,
            amount: f.string("amount")?,
            symbol: f.string("symbol")?,
            decimals: f.int("decimals")?,
            ids: f.list("ids")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: String,
    pub name: String,
    pub stake: Stake,
    pub relay: String,
    pub validator: String,
    pub balances: Vec<Balance>,
}

impl Account {
    pub fn balance(&self, symbol: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.symbol == symbol)
    }
}

impl FromNode for Account {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            address: f.string("address")?,
            name: f.string("name")?,
            // the node reports the single stake entry under a plural key
            stake: f.record("stakes")?,
            relay: f.string("relay")?,
            validator: f.string("validator")?,
            balances: f.list("balances")?,
        })
    }
}
