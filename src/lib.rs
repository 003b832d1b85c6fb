//! Residential PV production estimator with obstacle shading.
//!
//! The engine lives in [`services`]; [`routes`] exposes it over HTTP.

pub mod api_docs;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod shared_state;
pub mod telemetry;

pub use error::EngineError;
pub use models::installation::{EvaluationResult, InstallationConfig, Obstacle, ShadingModel};
pub use services::evaluation::{evaluate, sample_shading_curve};
