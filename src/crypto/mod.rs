//! Keys, hashing and the local transaction signer

mod hash;
mod keys;
mod signer;

pub use hash::*;
pub use keys::*;
pub use signer::*;
