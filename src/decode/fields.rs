//! Field binding helpers shared by every record decoder

use num_bigint::BigInt;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;

use super::{DecodeError, ROOT};
use crate::model::{Address, Timestamp};

/// Conversion from an untyped result node into a typed value
pub trait FromNode: Sized {
    fn from_node(node: &Value) -> Result<Self, DecodeError>;
}

pub(crate) static NULL: Value = Value::Null;

/// Read-only view over an object node.
///
/// Each reader returns the target type's default when the field is absent or
/// `null`, and an error when the field is present with the wrong shape.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    /// Bind to an object node. `null` binds to an empty object.
    pub fn of(node: &'a Value) -> Result<Self, DecodeError> {
        match node {
            Value::Object(map) => Ok(Self { map: Some(map) }),
            Value::Null => Ok(Self { map: None }),
            other => Err(DecodeError::mismatch(ROOT, "object", other)),
        }
    }

    /// Child node by name; `null` counts as absent
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.map?.get(name).filter(|node| !node.is_null())
    }

    pub fn string(&self, name: &str) -> Result<String, DecodeError> {
        match self.get(name) {
            Some(node) => scalar_text(name, node),
            None => Ok(String::new()),
        }
    }

    pub fn int<N>(&self, name: &str) -> Result<N, DecodeError>
    where
        N: TryFrom<i128> + Default,
    {
        match self.get(name) {
            Some(node) => integer(name, node),
            None => Ok(N::default()),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool, DecodeError> {
        match self.get(name) {
            Some(node) => boolean(name, node),
            None => Ok(false),
        }
    }

    /// Unix seconds
    pub fn timestamp(&self, name: &str) -> Result<Timestamp, DecodeError> {
        self.int(name).map(Timestamp::from_secs)
    }

    /// Any address kind the node reports, see [`Address::from_text`]
    pub fn address(&self, name: &str) -> Result<Address, DecodeError> {
        let text = self.string(name)?;
        Address::from_text(&text).map_err(|e| DecodeError::invalid(name, e.to_string()))
    }

    /// Arbitrary precision integer sent as decimal text
    pub fn big_int(&self, name: &str) -> Result<BigInt, DecodeError> {
        let text = self.string(name)?;
        if text.is_empty() {
            return Ok(BigInt::default());
        }
        BigInt::from_str(&text)
            .map_err(|_| DecodeError::invalid(name, format!("`{text}` is not an integer")))
    }

    /// Closed enum decoded from its string tag
    pub fn tag<E>(&self, name: &str) -> Result<E, DecodeError>
    where
        E: DeserializeOwned + Default,
    {
        let Some(node) = self.get(name) else {
            return Ok(E::default());
        };
        let Value::String(tag) = node else {
            return Err(DecodeError::mismatch(name, "string", node));
        };
        E::deserialize(node).map_err(|_| DecodeError::UnknownVariant {
            field: name.to_string(),
            tag: tag.clone(),
        })
    }

    /// Nested record
    pub fn record<T>(&self, name: &str) -> Result<T, DecodeError>
    where
        T: FromNode + Default,
    {
        match self.get(name) {
            Some(node) => T::from_node(node).map_err(|e| e.within(name)),
            None => Ok(T::default()),
        }
    }

    /// Repeated field; absent means empty
    pub fn list<T: FromNode>(&self, name: &str) -> Result<Vec<T>, DecodeError> {
        match self.get(name) {
            Some(node) => decode_array(node, T::from_node).map_err(|e| e.within(name)),
            None => Ok(Vec::new()),
        }
    }
}

/// Decode every element of an array node in source order.
///
/// `null` decodes to an empty sequence.
pub fn decode_array<T, F>(node: &Value, decode: F) -> Result<Vec<T>, DecodeError>
where
    F: Fn(&Value) -> Result<T, DecodeError>,
{
    match node {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item).map_err(|e| e.within(&format!("[{i}]"))))
            .collect(),
        other => Err(DecodeError::mismatch(ROOT, "array", other)),
    }
}

fn scalar_text(field: &str, node: &Value) -> Result<String, DecodeError> {
    match node {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(DecodeError::mismatch(field, "string", other)),
    }
}

fn integer<N: TryFrom<i128>>(field: &str, node: &Value) -> Result<N, DecodeError> {
    let wide = match node {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .ok_or_else(|| DecodeError::mismatch(field, "integer", node))?,
        Value::String(s) => s
            .trim()
            .parse::<i128>()
            .map_err(|_| DecodeError::invalid(field, format!("`{s}` is not an integer")))?,
        other => return Err(DecodeError::mismatch(field, "integer", other)),
    };

    N::try_from(wide).map_err(|_| DecodeError::OutOfRange {
        field: field.to_string(),
        value: wide.to_string(),
        target: std::any::type_name::<N>(),
    })
}

fn boolean(field: &str, node: &Value) -> Result<bool, DecodeError> {
    match node {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        Value::String(s) => Err(DecodeError::invalid(field, format!("`{s}` is not a boolean"))),
        other => Err(DecodeError::mismatch(field, "boolean", other)),
    }
}

impl FromNode for String {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        scalar_text(ROOT, node)
    }
}

impl FromNode for bool {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        boolean(ROOT, node)
    }
}

impl FromNode for i32 {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        integer(ROOT, node)
    }
}

impl FromNode for u32 {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        integer(ROOT, node)
    }
}

impl FromNode for u64 {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        integer(ROOT, node)
    }
}

impl<T: FromNode> FromNode for Vec<T> {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        decode_array(node, T::from_node)
    }
}

impl FromNode for Value {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        Ok(node.clone())
    }
}
