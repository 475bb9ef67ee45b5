use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use transit_server::cache::{CacheConfig, CachedNetwork};
use transit_server::config::ServerConfig;
use transit_server::graph::{AdjacencyMode, GraphBuilder};
use transit_server::network::{NetworkClient, NetworkClientConfig, NetworkSource};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transit_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // Use a local network file if configured, otherwise the live feed
    let source = match &config.network_file {
        Some(path) => NetworkSource::from_file(path).expect("Failed to load network file"),
        None => {
            let client_config = NetworkClientConfig::new(&config.network_url)
                .with_timeout(config.http_timeout_secs);
            let client = NetworkClient::new(client_config).expect("Failed to create network client");
            NetworkSource::Http(client)
        }
    };
    info!(source = %source.describe(), "Using transit network");

    if config.adjacency == AdjacencyMode::Symmetric {
        warn!("Symmetric adjacency enabled; routes may differ from the classic route page");
    }

    let cache_config = CacheConfig {
        ttl: config.network_ttl,
    };
    let network = CachedNetwork::new(source, &cache_config);

    // Build app state
    let state = AppState::new(network, GraphBuilder::new().with_mode(config.adjacency));

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Transit route finder listening on http://{addr}");
    info!("  GET /            - Interleaving demo");
    info!("  GET /norikae     - Route search page");
    info!("  GET /api/route   - Route search (JSON)");
    info!("  GET /health      - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
