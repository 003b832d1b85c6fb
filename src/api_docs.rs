use utoipa::OpenApi;
use crate::controllers::scenario_controller;
use crate::models::{api, installation};

#[derive(OpenApi)]
#[openapi(
    paths(
        scenario_controller::health,
        scenario_controller::list_sites,
        scenario_controller::list_technologies,
        scenario_controller::evaluate,
        scenario_controller::shading_curve
    ),
    components(
        schemas(
            api::EvaluationRequest,
            api::CurveRequest,
            api::ShadingRequest,
            api::EvaluationResponse,
            api::CurveResponse,
            api::SiteInfo,
            api::TechnologyInfo,
            api::HealthStatus,
            installation::Obstacle,
            installation::ObstacleKind,
            installation::Weather,
            installation::SunModel,
            installation::EvaluationResult,
            installation::ShadingSample
        )
    ),
    tags(
        (name = "pv-shading-sim", description = "Residential PV production and shading estimator")
    )
)]
pub struct ApiDoc;
