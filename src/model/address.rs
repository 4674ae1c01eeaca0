//! Account addresses as exchanged with the node

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every user address starts with this letter
pub const ADDRESS_PREFIX: char = 'P';

/// Length of an address in text form
pub const ADDRESS_TEXT_LENGTH: usize = 45;

/// Leading letter of user, system and interop addresses
pub const ADDRESS_KIND_PREFIXES: [char; 3] = ['P', 'S', 'X'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid address prefix")]
    InvalidPrefix,
    #[error("Invalid address length: {0}")]
    InvalidLength(usize),
}

/// Text address of an account. The empty address is the null address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Check the textual address rule without building a value
    pub fn is_valid(text: &str) -> bool {
        text.starts_with(ADDRESS_PREFIX) && text.len() == ADDRESS_TEXT_LENGTH
    }

    /// Address text as reported by the node.
    ///
    /// Accepts user, system and contract addresses of any length; only the
    /// kind prefix is checked. The empty string is the null address.
    pub fn from_text(text: &str) -> Result<Self, AddressError> {
        if text.is_empty() {
            return Ok(Address::default());
        }
        if !text.starts_with(&ADDRESS_KIND_PREFIXES[..]) {
            return Err(AddressError::InvalidPrefix);
        }
        Ok(Address(text.to_string()))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with(ADDRESS_PREFIX) {
            return Err(AddressError::InvalidPrefix);
        }
        if s.len() != ADDRESS_TEXT_LENGTH {
            return Err(AddressError::InvalidLength(s.len()));
        }
        Ok(Address(s.to_string()))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    /// Accepts the empty string as the null address
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Address::default());
        }
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
