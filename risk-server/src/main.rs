use risk_server::config::ServerConfig;
use risk_server::planner::RouteConfig;
use risk_server::scorer::CategoricalScorer;
use risk_server::topology::{toronto_topology, toronto_transfers};
use risk_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "risk_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load the delay model (built-in parameters unless a file is given)
    let scorer = match &config.model_path {
        Some(path) => {
            info!(path = %path.display(), "loading model parameters");
            CategoricalScorer::from_path(path)?
        }
        None => {
            info!("using built-in model parameters");
            CategoricalScorer::default()
        }
    };

    let topology = toronto_topology();
    let transfers = toronto_transfers();
    info!(
        stations = topology.len(),
        lines = topology.lines().len(),
        transfer_pairs = transfers.len(),
        "loaded network"
    );

    let state = AppState::new(topology, transfers, scorer, RouteConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "route risk server listening");
    info!("  GET  /health                - Health check");
    info!("  POST /predict               - Predict a major delay");
    info!("  POST /route/optimize        - Rank routes between two stations");
    info!("  GET  /stations              - List stations");
    info!("  GET  /stations/predictions  - Delay probability per station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
