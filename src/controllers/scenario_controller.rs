use axum::{extract::State, response::IntoResponse, Json};
use chrono::{Datelike, Local, Utc};
use tracing::info;

use crate::controllers::api_error::{ApiError, ApiJson};
use crate::models::api::{
    CurveRequest, CurveResponse, EvaluationRequest, EvaluationResponse, HealthStatus, SiteInfo,
    TechnologyInfo,
};
use crate::models::catalog::{SITES, TECHNOLOGIES};
use crate::services::{evaluation, validation};
use crate::shared_state::AppState;

fn current_month() -> u8 {
    Local::now().month() as u8
}

/// GET /api/health
/// Service liveness and catalog sizes
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        sites: SITES.len(),
        technologies: TECHNOLOGIES.len(),
    })
}

/// GET /api/catalog/sites
/// List installation sites
///
/// Returns every named site with its latitude and annual irradiation.
#[utoipa::path(
    get,
    path = "/api/catalog/sites",
    responses(
        (status = 200, description = "Site catalog", body = Vec<SiteInfo>)
    )
)]
pub async fn list_sites() -> impl IntoResponse {
    let sites: Vec<SiteInfo> = SITES.iter().map(SiteInfo::from).collect();
    Json(sites)
}

/// GET /api/catalog/technologies
/// List module technologies
#[utoipa::path(
    get,
    path = "/api/catalog/technologies",
    responses(
        (status = 200, description = "Technology catalog", body = Vec<TechnologyInfo>)
    )
)]
pub async fn list_technologies() -> impl IntoResponse {
    let technologies: Vec<TechnologyInfo> = TECHNOLOGIES.iter().map(TechnologyInfo::from).collect();
    Json(technologies)
}

/// POST /api/evaluate
/// Evaluate one installation scenario
///
/// Computes sun elevation, shading loss, yearly production, cost and the
/// split between self-consumption, grid injection and grid draw.
#[utoipa::path(
    post,
    path = "/api/evaluate",
    request_body = EvaluationRequest,
    responses(
        (status = 200, description = "Scenario result", body = EvaluationResponse),
        (status = 400, description = "Parameter out of range"),
        (status = 404, description = "Unknown site or technology")
    )
)]
pub async fn evaluate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let (config, shading) = request.resolve(&state.engine, current_month())?;
    let result = evaluation::evaluate(&config, shading.obstacles());

    info!(
        site = config.site.name,
        technology = config.technology.name,
        panels = config.panel_count,
        production_kwh = result.annual_production_kwh,
        shading_loss_pct = result.shading_loss_pct,
        "evaluation served"
    );

    Ok(Json(EvaluationResponse {
        timestamp: Utc::now(),
        site: config.site.name.to_string(),
        technology: config.technology.name.to_string(),
        month: config.month,
        hour: config.hour,
        weather: config.weather,
        sun_model: config.sun_model,
        result,
    }))
}

/// POST /api/shading-curve
/// Shading loss across the day
///
/// Samples sun elevation and cumulative shading loss for the requested
/// hours (06:00–18:00 when omitted) in the scenario's month.
#[utoipa::path(
    post,
    path = "/api/shading-curve",
    request_body = CurveRequest,
    responses(
        (status = 200, description = "Loss curve", body = CurveResponse),
        (status = 400, description = "Parameter out of range"),
        (status = 404, description = "Unknown site or technology")
    )
)]
pub async fn shading_curve(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CurveRequest>,
) -> Result<Json<CurveResponse>, ApiError> {
    let (config, shading) = request.scenario.resolve(&state.engine, current_month())?;
    let hours = match &request.hours {
        Some(list) => list
            .iter()
            .map(|&h| validation::hour(h))
            .collect::<Result<Vec<_>, _>>()?,
        None => evaluation::daylight_hours(),
    };

    let samples = evaluation::sample_shading_curve(&config, shading.obstacles(), &hours);
    info!(site = config.site.name, month = config.month, samples = samples.len(), "curve served");

    Ok(Json(CurveResponse {
        site: config.site.name.to_string(),
        month: config.month,
        sun_model: config.sun_model,
        samples,
    }))
}
