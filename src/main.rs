//! OTC offer board server
//!
//! Usage: `otc-server [config.toml]`

use pha_client::api::NodeClient;
use pha_client::config::ServerConfig;
use pha_client::logging::init_logging;
use pha_client::otc::{run_server, OfferBook, OtcState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_toml_file(&path)?,
        None => ServerConfig::default(),
    };

    init_logging(config.log_format, &config.log_level);

    let client = NodeClient::from_config(&config.node)?;
    match client.get_nexus(false).await {
        Ok(nexus) => info!(nexus = %nexus.name, node = %client.url(), "connected to node"),
        Err(e) => warn!(node = %client.url(), kind = %e.kind(), error = %e, "node not reachable yet"),
    }

    let offers = OfferBook::from_offers(config.offers);
    info!(count = offers.len().await, "offer book loaded");

    let state = Arc::new(OtcState { client, offers });

    tokio::select! {
        result = run_server(state, &config.listen_addr) => result?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    Ok(())
}
