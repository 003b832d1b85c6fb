pub mod scenario_routes;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::shared_state::AppState;

/// Full application router: `/api/*`, the Scalar UI at `/scalar`, plus
/// request tracing and permissive CORS for browser front-ends.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", scenario_routes::api_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
