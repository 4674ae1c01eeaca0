//! Typed facade over the node's RPC methods

mod client;
mod method;

pub use client::*;
pub use method::*;
