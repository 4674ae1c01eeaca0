//! Typed decoding of JSON-RPC result trees
//!
//! Every domain record implements [`FromNode`]. A field that is missing or
//! `null` falls back to its default value; only structurally wrong content
//! (text where an integer is expected, an unknown enum tag, ...) is an error.

mod error;
mod fields;
mod page;

pub use error::*;
pub use fields::*;
pub use page::*;
