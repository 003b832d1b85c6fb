use std::net::SocketAddr;

use tracing::{error, info, warn};

use pv_shading_sim::config::Config;
use pv_shading_sim::routes::app;
use pv_shading_sim::shared_state::AppState;
use pv_shading_sim::telemetry::init_tracing;

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let loaded = Config::load(CONFIG_PATH);
    // Tracing needs the filter before the outcome can be logged
    let config = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();
    init_tracing(&config.log_filter);

    match loaded {
        Ok(Some(_)) => info!(path = CONFIG_PATH, "configuration loaded"),
        Ok(None) => warn!(path = CONFIG_PATH, "configuration file not found, using defaults"),
        Err(e) => {
            error!(path = CONFIG_PATH, error = %e, "failed to load configuration");
            return;
        }
    }
    info!(
        sun_model = ?config.engine.sun_model,
        normalize_irradiation = config.engine.normalize_irradiation,
        "engine defaults"
    );

    // 2. Build the router
    let state = AppState::new(config.engine);
    let router = app(state);

    // 3. Serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("API server listening on http://{}", addr);
    info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr).serve(router.into_make_service()).await {
        error!(error = %e, "server terminated");
    }
}
