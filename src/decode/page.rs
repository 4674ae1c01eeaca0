//! Paginated result envelopes
//!
//! Listing methods wrap their payload as
//! `{ "page": .., "totalPages": .., "result": <payload> }`.

use serde::Serialize;
use serde_json::Value;

use super::{DecodeError, Fields, FromNode, NULL};

/// One page of a listing call
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub value: T,
    pub page: i32,
    pub total_pages: i32,
}

impl<T> Paginated<T> {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Read `page` and `totalPages`, then decode the nested `result` node
pub fn decode_paginated<T, F>(node: &Value, decode: F) -> Result<Paginated<T>, DecodeError>
where
    F: FnOnce(&Value) -> Result<T, DecodeError>,
{
    let fields = Fields::of(node)?;
    let page = fields.int("page")?;
    let total_pages = fields.int("totalPages")?;
    let value = decode(fields.get("result").unwrap_or(&NULL)).map_err(|e| e.within("result"))?;

    Ok(Paginated {
        value,
        page,
        total_pages,
    })
}

impl<T: FromNode> FromNode for Paginated<T> {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        decode_paginated(node, T::from_node)
    }
}
