//! Phantasma node client
//!
//! Typed async access to a Phantasma node's JSON-RPC interface, plus an OTC
//! offer board (`otc-server` binary) built on top of it.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = pha_client::api::NodeClient::new("http://localhost:7077/rpc")?;
//! let height = client.get_block_height("main").await?;
//! println!("main chain at {height}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod crypto;
pub mod decode;
pub mod logging;
pub mod model;
pub mod otc;
pub mod rpc;

/// Protocol constants
pub mod constants {
    /// JSON-RPC protocol version sent with every request
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Fixed request id; calls are never multiplexed
    pub const REQUEST_ID: &str = "1";

    /// Nexus stamped on signed transactions unless configured otherwise
    pub const DEFAULT_NEXUS: &str = "simnet";

    /// Lifetime of a signed transaction
    pub const TX_EXPIRATION_SECS: u64 = 3600;

    pub const DEFAULT_NODE_URL: &str = "http://localhost:7077/rpc";

    pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:7080";
}
