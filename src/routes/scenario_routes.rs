use axum::{routing::{get, post}, Router};
use crate::controllers::scenario_controller::{
    // Service
    health,
    // Catalogs
    list_sites, list_technologies,
    // Engine
    evaluate, shading_curve,
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health",               get(health))
        .route("/catalog/sites",        get(list_sites))
        .route("/catalog/technologies", get(list_technologies))
        .route("/evaluate",             post(evaluate))
        .route("/shading-curve",        post(shading_curve))
        .with_state(state)
}
