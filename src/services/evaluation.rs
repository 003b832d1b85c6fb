//! Scenario evaluation: geometry → shading → production → energy balance.

use tracing::debug;

use crate::models::installation::{EvaluationResult, InstallationConfig, Obstacle, ShadingSample};
use crate::services::energy_balance::EnergyBalance;
use crate::services::production;
use crate::services::shading;
use crate::services::solar_geometry::{self, SUNRISE_HOUR, SUNSET_HOUR};

/// Every whole hour of the modelled day.
pub fn daylight_hours() -> Vec<u8> {
    (SUNRISE_HOUR..=SUNSET_HOUR).collect()
}

fn elevation_at(config: &InstallationConfig, hour: u8) -> f64 {
    solar_geometry::elevation_for(config.sun_model, config.site.latitude, config.month, hour)
}

pub fn evaluate(config: &InstallationConfig, obstacles: &[Obstacle]) -> EvaluationResult {
    let sun_elevation_deg = elevation_at(config, config.hour);
    let shading_loss_pct = shading::shading_loss_pct(obstacles, sun_elevation_deg);

    let capacity = config.installed_capacity_kwp();
    let surface = config.total_surface_m2();
    let annual_production_kwh =
        production::annual_production_kwh(config, shading_loss_pct, &config.site);
    let balance = EnergyBalance::from_production(annual_production_kwh);

    debug!(
        site = config.site.name,
        technology = config.technology.name,
        month = config.month,
        hour = config.hour,
        obstacles = obstacles.len(),
        sun_elevation_deg,
        shading_loss_pct,
        annual_production_kwh,
        "scenario evaluated"
    );

    EvaluationResult {
        sun_elevation_deg,
        shading_loss_pct,
        installed_capacity_kwp: capacity,
        total_surface_m2: surface,
        annual_production_kwh,
        efficiency_kwh_per_m2: production::efficiency_kwh_per_m2(annual_production_kwh, surface),
        total_cost: production::installation_cost(capacity, config.technology.price_per_watt),
        self_consumed_kwh: balance.self_consumed_kwh,
        grid_injected_kwh: balance.grid_injected_kwh,
        grid_drawn_kwh: balance.grid_drawn_kwh,
    }
}

/// Shading loss across the day for the configured month. `hours` must
/// already be within 6..=18; samples keep the caller's order.
pub fn sample_shading_curve(
    config: &InstallationConfig,
    obstacles: &[Obstacle],
    hours: &[u8],
) -> Vec<ShadingSample> {
    hours
        .iter()
        .map(|&hour| {
            let elevation_deg = elevation_at(config, hour);
            let loss_pct = shading::shading_loss_pct(obstacles, elevation_deg);
            #[cfg(feature = "verbose_log")]
            tracing::trace!(hour, elevation_deg, loss_pct, "curve sample");
            ShadingSample { hour, elevation_deg, loss_pct }
        })
        .collect()
}
