use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::catalog;
use crate::models::installation::{
    EvaluationResult, InstallationConfig, Obstacle, PanelTechnology, ShadingModel,
    ShadingSample, Site, SunModel, Weather,
};
use crate::services::validation;

fn default_hour() -> i64 { 12 }

// ─── Requests ────────────────────────────────────────────────────────────────

/// Obstacle set for a scenario.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ShadingRequest {
    /// The single 8 m building at 10 m.
    Fixed,
    /// Up to three caller-supplied obstacles.
    UserDefined {
        #[serde(default)]
        obstacles: Vec<Obstacle>,
    },
}

impl Default for ShadingRequest {
    fn default() -> Self {
        ShadingRequest::UserDefined { obstacles: Vec::new() }
    }
}

/// Scenario parameters as sent by the presentation layer. Numeric fields are
/// signed so that out-of-range values reach validation instead of failing
/// deserialisation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EvaluationRequest {
    /// Site catalog name, e.g. "Marseille"
    pub site: String,
    /// Technology catalog name, e.g. "Monocristallin"
    pub technology: String,
    pub panel_count: i64,
    /// 1..=12, defaults to the current month
    #[serde(default)]
    pub month: Option<i64>,
    /// 6..=18
    #[serde(default = "default_hour")]
    pub hour: i64,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub shading: ShadingRequest,
    /// Overrides the configured sun model
    #[serde(default)]
    pub sun_model: Option<SunModel>,
    /// Overrides the configured irradiation normalisation
    #[serde(default)]
    pub normalize_irradiation: Option<bool>,
}

impl EvaluationRequest {
    /// Validate against the catalogs and ranges. `current_month` fills an
    /// omitted month.
    pub fn resolve(
        &self,
        defaults: &EngineConfig,
        current_month: u8,
    ) -> Result<(InstallationConfig, ShadingModel), EngineError> {
        let site = catalog::site(&self.site)
            .ok_or_else(|| EngineError::UnknownSite(self.site.clone()))?;
        let technology = catalog::technology(&self.technology)
            .ok_or_else(|| EngineError::UnknownTechnology(self.technology.clone()))?;

        let config = InstallationConfig {
            technology,
            site,
            panel_count: validation::panel_count(self.panel_count)?,
            month: validation::month(self.month.unwrap_or(current_month as i64))?,
            hour: validation::hour(self.hour)?,
            weather: self.weather,
            sun_model: self.sun_model.unwrap_or(defaults.sun_model),
            normalize_irradiation: self
                .normalize_irradiation
                .unwrap_or(defaults.normalize_irradiation),
        };

        let shading = match &self.shading {
            ShadingRequest::Fixed => ShadingModel::Fixed(Obstacle::FIXED_SCENARIO),
            ShadingRequest::UserDefined { obstacles } => {
                validation::obstacles(obstacles)?;
                ShadingModel::UserDefined(obstacles.clone())
            }
        };

        Ok((config, shading))
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CurveRequest {
    #[serde(flatten)]
    pub scenario: EvaluationRequest,
    /// Hours to sample, defaults to 6..=18
    #[serde(default)]
    pub hours: Option<Vec<i64>>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluationResponse {
    pub timestamp: DateTime<Utc>,
    pub site: String,
    pub technology: String,
    pub month: u8,
    pub hour: u8,
    pub weather: Weather,
    pub sun_model: SunModel,
    pub result: EvaluationResult,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurveResponse {
    pub site: String,
    pub month: u8,
    pub sun_model: SunModel,
    pub samples: Vec<ShadingSample>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SiteInfo {
    pub name: String,
    pub latitude: f64,
    pub annual_irradiation: f64,
}

impl From<&Site> for SiteInfo {
    fn from(s: &Site) -> Self {
        Self {
            name: s.name.to_string(),
            latitude: s.latitude,
            annual_irradiation: s.annual_irradiation,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TechnologyInfo {
    pub name: String,
    pub efficiency_pct: f64,
    pub price_per_watt: f64,
    pub reference_annual_yield_kwh: f64,
}

impl From<&PanelTechnology> for TechnologyInfo {
    fn from(t: &PanelTechnology) -> Self {
        Self {
            name: t.name.to_string(),
            efficiency_pct: t.efficiency_pct,
            price_per_watt: t.price_per_watt,
            reference_annual_yield_kwh: t.reference_annual_yield_kwh,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sites: usize,
    pub technologies: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> EvaluationRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let req = request(serde_json::json!({
            "site": "Lyon",
            "technology": "Bifacial",
            "panel_count": 12
        }));
        let (config, shading) = req.resolve(&EngineConfig::default(), 4).unwrap();
        assert_eq!(config.month, 4);
        assert_eq!(config.hour, 12);
        assert_eq!(config.weather, Weather::Clear);
        assert_eq!(config.sun_model, SunModel::Declination);
        assert!(config.normalize_irradiation);
        assert!(shading.obstacles().is_empty());
    }

    #[test]
    fn test_french_labels_and_fixed_shading() {
        let req = request(serde_json::json!({
            "site": "Nancy",
            "technology": "Amorphe",
            "panel_count": 8,
            "month": 2,
            "weather": "Pluvieux",
            "shading": { "model": "fixed" },
            "sun_model": "monthly_table",
            "normalize_irradiation": false
        }));
        let (config, shading) = req.resolve(&EngineConfig::default(), 9).unwrap();
        assert_eq!(config.weather, Weather::Rainy);
        assert_eq!(config.sun_model, SunModel::MonthlyTable);
        assert!(!config.normalize_irradiation);
        assert_eq!(shading, ShadingModel::Fixed(Obstacle::FIXED_SCENARIO));
    }

    #[test]
    fn test_user_obstacles() {
        let req = request(serde_json::json!({
            "site": "Metz",
            "technology": "Polycristallin",
            "panel_count": 10,
            "shading": {
                "model": "user_defined",
                "obstacles": [
                    { "kind": "Arbre", "height_m": 5.0, "horizontal_distance_m": -3.0 },
                    { "kind": "wall", "height_m": 2.0, "horizontal_distance_m": 0.0 }
                ]
            }
        }));
        let (_, shading) = req.resolve(&EngineConfig::default(), 6).unwrap();
        assert_eq!(shading.obstacles().len(), 2);
    }

    #[test]
    fn test_rejections() {
        let base = serde_json::json!({
            "site": "Paris", "technology": "Monocristallin", "panel_count": 10
        });
        let mut unknown = base.clone();
        unknown["site"] = "Atlantis".into();
        assert_eq!(
            request(unknown).resolve(&EngineConfig::default(), 6).unwrap_err(),
            EngineError::UnknownSite("Atlantis".into())
        );

        let mut negative = base.clone();
        negative["panel_count"] = (-3).into();
        assert!(request(negative).resolve(&EngineConfig::default(), 6).is_err());

        let mut night = base;
        night["hour"] = 22.into();
        assert!(matches!(
            request(night).resolve(&EngineConfig::default(), 6),
            Err(EngineError::InvalidRange { field: "hour", .. })
        ));
    }
}
