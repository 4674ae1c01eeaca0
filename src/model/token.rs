//! Tokens, NFT data and market auctions

use serde::Serialize;
use serde_json::Value;

use super::Timestamp;
use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub decimals: i32,
    pub current_supply: String,
    pub max_supply: String,
    pub platform: String,
    pub hash: String,
    /// Comma separated token flags, e.g. `Transferable, Fungible`
    pub flags: String,
}

impl Token {
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.split(',').any(|f| f.trim() == flag)
    }
}

impl FromNode for Token {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            symbol: f.string("symbol")?,
            name: f.string("name")?,
            decimals: f.int("decimals")?,
            current_supply: f.string("currentSupply")?,
            max_supply: f.string("maxSupply")?,
            platform: f.string("platform")?,
            hash: f.string("hash")?,
            flags: f.string("flags")?,
        })
    }
}

/// Ownership and payload of a single non-fungible token
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub id: String,
    pub chain_name: String,
    pub owner_address: String,
    pub ram: String,
    pub rom: String,
    pub for_sale: bool,
}

impl FromNode for TokenData {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            // camel-casing `ID` yields `iD` on the wire
            id: f.string("iD")?,
            chain_name: f.string("chainName")?,
            owner_address: f.string("ownerAddress")?,
            ram: f.string("ram")?,
            rom: f.string("rom")?,
            for_sale: f.boolean("forSale")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub creator_address: String,
    pub chain_address: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub base_symbol: String,
    pub quote_symbol: String,
    pub token_id: String,
    pub price: String,
    pub rom: String,
    pub ram: String,
}

impl FromNode for Auction {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            creator_address: f.string("creatorAddress")?,
            chain_address: f.string("chainAddress")?,
            start_date: f.timestamp("startDate")?,
            end_date: f.timestamp("endDate")?,
            base_symbol: f.string("baseSymbol")?,
            quote_symbol: f.string("quoteSymbol")?,
            token_id: f.string("tokenId")?,
            price: f.string("price")?,
            rom: f.string("rom")?,
            ram: f.string("ram")?,
        })
    }
}
