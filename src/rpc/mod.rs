//! JSON-RPC client plumbing
//!
//! Encodes calls, posts them to the node and classifies what comes back.

mod dispatcher;
mod envelope;
mod error;
mod transport;

pub use dispatcher::*;
pub use envelope::*;
pub use error::*;
pub use transport::*;
