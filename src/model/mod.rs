//! Domain records returned by the node
//!
//! Records are plain owned values decoded from a result tree through
//! [`FromNode`](crate::decode::FromNode). They keep no link to the tree.

mod account;
mod address;
mod chain;
mod contract;
mod exchange;
mod network;
mod nexus;
mod timestamp;
mod token;

pub use account::*;
pub use address::*;
pub use chain::*;
pub use contract::*;
pub use exchange::*;
pub use network::*;
pub use nexus::*;
pub use timestamp::*;
pub use token::*;
