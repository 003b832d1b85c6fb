use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Module geometry ─────────────────────────────────────────────────────────

/// Nameplate power of one module (kWp).
pub const PANEL_POWER_KWP: f64 = 0.4;
/// Surface of one module (m²).
pub const PANEL_SURFACE_M2: f64 = 1.7;

// ─── Catalog entries ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub name: &'static str,
    /// Geographic latitude (deg)
    pub latitude: f64,
    /// Annual global irradiation (kWh/m²/yr)
    pub annual_irradiation: f64,
}

/// Module technology. `reference_annual_yield_kwh` is the yield of an 8 kWp
/// array under 1824 kWh/m²/yr in clear weather.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTechnology {
    pub name: &'static str,
    pub efficiency_pct: f64,
    pub price_per_watt: f64,
    pub reference_annual_yield_kwh: f64,
}

// ─── Scenario inputs ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    #[serde(alias = "Ensoleillé")]
    Clear,
    #[serde(alias = "Nuageux")]
    Cloudy,
    #[serde(alias = "Pluvieux")]
    Rainy,
}

impl Weather {
    /// Discrete attenuation applied to the clear-sky yearly yield.
    pub fn factor(self) -> f64 {
        match self {
            Weather::Clear => 1.0,
            Weather::Cloudy => 0.75,
            Weather::Rainy => 0.55,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    #[serde(alias = "Arbre")]
    Tree,
    #[serde(alias = "Bâtiment")]
    Building,
    #[serde(alias = "Mur")]
    Wall,
}

/// A vertical obstacle south of the array. Only height and distance matter
/// for shading; `kind` is a display label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub height_m: f64,
    /// Zero or negative when the obstacle stands at or behind the array.
    pub horizontal_distance_m: f64,
}

impl Obstacle {
    /// The 8 m building at 10 m used by the fixed-obstacle scenario.
    pub const FIXED_SCENARIO: Obstacle = Obstacle {
        kind: ObstacleKind::Building,
        height_m: 8.0,
        horizontal_distance_m: 10.0,
    };
}

/// How the midday sun height is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SunModel {
    /// Seasonal declination approximation, latitude dependent.
    #[default]
    Declination,
    /// Fixed midday elevation per month, latitude independent.
    MonthlyTable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShadingModel {
    Fixed(Obstacle),
    UserDefined(Vec<Obstacle>),
}

impl ShadingModel {
    pub fn obstacles(&self) -> &[Obstacle] {
        match self {
            ShadingModel::Fixed(o) => std::slice::from_ref(o),
            ShadingModel::UserDefined(list) => list,
        }
    }
}

/// Validated, immutable snapshot of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallationConfig {
    pub technology: PanelTechnology,
    pub site: Site,
    pub panel_count: u32,
    /// 1..=12
    pub month: u8,
    /// 6..=18
    pub hour: u8,
    pub weather: Weather,
    pub sun_model: SunModel,
    /// Scale production by site irradiation relative to the 1824 kWh/m²/yr reference.
    pub normalize_irradiation: bool,
}

impl InstallationConfig {
    pub fn installed_capacity_kwp(&self) -> f64 {
        self.panel_count as f64 * PANEL_POWER_KWP
    }

    pub fn total_surface_m2(&self) -> f64 {
        self.panel_count as f64 * PANEL_SURFACE_M2
    }
}

// ─── Engine outputs ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EvaluationResult {
    /// Sun elevation at the requested month/hour (deg, ≥ 0)
    pub sun_elevation_deg: f64,
    /// Cumulative shading loss (%, 0..=60)
    pub shading_loss_pct: f64,
    pub installed_capacity_kwp: f64,
    pub total_surface_m2: f64,
    /// Shading-corrected yearly production (kWh)
    pub annual_production_kwh: f64,
    /// Production per m² of modules (kWh/m²/yr)
    pub efficiency_kwh_per_m2: f64,
    /// Installation cost (currency units)
    pub total_cost: f64,
    pub self_consumed_kwh: f64,
    pub grid_injected_kwh: f64,
    pub grid_drawn_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ShadingSample {
    pub hour: u8,
    pub elevation_deg: f64,
    pub loss_pct: f64,
}
