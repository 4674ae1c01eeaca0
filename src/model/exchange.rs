//! Exchange orders listed by the node's OTC market

use num_bigint::BigInt;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::{Address, Timestamp};
use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExchangeOrderSide {
    #[default]
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExchangeOrderType {
    #[default]
    #[serde(rename = "OTC")]
    Otc,
    /// Plain limit order
    Limit,
    /// Limit order whose unfilled part is cancelled right away
    ImmediateOrCancel,
    Market,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeOrder {
    #[serde(serialize_with = "as_decimal")]
    pub uid: BigInt,
    pub timestamp: Timestamp,
    pub creator: Address,
    pub provider: Address,
    #[serde(serialize_with = "as_decimal")]
    pub amount: BigInt,
    pub base_symbol: String,
    #[serde(serialize_with = "as_decimal")]
    pub price: BigInt,
    pub quote_symbol: String,
    pub side: ExchangeOrderSide,
    #[serde(rename = "type")]
    pub order_type: ExchangeOrderType,
}

impl FromNode for ExchangeOrder {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            uid: f.big_int("uid")?,
            timestamp: f.timestamp("timestamp")?,
            creator: f.address("creator")?,
            provider: f.address("provider")?,
            amount: f.big_int("amount")?,
            base_symbol: f.string("baseSymbol")?,
            price: f.big_int("price")?,
            quote_symbol: f.string("quoteSymbol")?,
            side: f.tag("side")?,
            order_type: f.tag("type")?,
        })
    }
}

fn as_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
