use std::error::Error;

use subway_server::config::ServerConfig;
use subway_server::fare::FareEngine;
use subway_server::network::StaticNetwork;
use subway_server::planner::SearchConfig;
use subway_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Fail fast if the network is missing or malformed
    let network = StaticNetwork::load(&config.network_path)?;

    let state = AppState::new(network, SearchConfig::default(), FareEngine::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "subway route planner listening");
    info!("GET /health                  - health check");
    info!("GET /paths                   - find and price a route");
    info!("GET /stations/:id/timetable  - departures at a station");

    axum::serve(listener, app).await?;
    Ok(())
}
