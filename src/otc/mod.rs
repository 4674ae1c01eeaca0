//! OTC offer board served over HTTP and backed by a node

mod offer;
mod server;

pub use offer::*;
pub use server::*;
