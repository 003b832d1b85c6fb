//! Yearly production estimate.
//!
//! Linear scaling of a technology's reference yield: by installed capacity
//! against an 8 kWp array, by site irradiation against 1824 kWh/m²/yr, and by
//! a discrete weather factor. This is an annual aggregate, not an hourly
//! integral, even though shading is evaluated at a single month/hour.

use crate::models::installation::{InstallationConfig, Site};

pub const REFERENCE_CAPACITY_KWP: f64 = 8.0;
pub const REFERENCE_IRRADIATION_KWH_M2: f64 = 1824.0;

fn irradiation_factor(config: &InstallationConfig, site: &Site) -> f64 {
    if config.normalize_irradiation {
        site.annual_irradiation / REFERENCE_IRRADIATION_KWH_M2
    } else {
        1.0
    }
}

/// Production before shading (kWh/yr).
pub fn base_production_kwh(config: &InstallationConfig, site: &Site) -> f64 {
    (config.installed_capacity_kwp() / REFERENCE_CAPACITY_KWP)
        * config.technology.reference_annual_yield_kwh
        * irradiation_factor(config, site)
        * config.weather.factor()
}

pub fn annual_production_kwh(
    config: &InstallationConfig,
    shading_loss_pct: f64,
    site: &Site,
) -> f64 {
    let corrected = base_production_kwh(config, site) * (1.0 - shading_loss_pct / 100.0);
    corrected.max(0.0)
}

pub fn efficiency_kwh_per_m2(production_kwh: f64, surface_m2: f64) -> f64 {
    if surface_m2 > 0.0 {
        production_kwh / surface_m2
    } else {
        0.0
    }
}

pub fn installation_cost(capacity_kwp: f64, price_per_watt: f64) -> f64 {
    capacity_kwp * 1000.0 * price_per_watt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;
    use crate::models::installation::{SunModel, Weather};

    fn config(site: &str, technology: &str, panel_count: u32, weather: Weather) -> InstallationConfig {
        InstallationConfig {
            technology: catalog::technology(technology).unwrap(),
            site: catalog::site(site).unwrap(),
            panel_count,
            month: 6,
            hour: 12,
            weather,
            sun_model: SunModel::Declination,
            normalize_irradiation: true,
        }
    }

    #[test]
    fn test_reference_array_in_marseille() {
        let c = config("Marseille", "Monocristallin", 20, Weather::Clear);
        assert!((c.installed_capacity_kwp() - 8.0).abs() < 1e-9);
        let production = annual_production_kwh(&c, 0.0, &c.site);
        assert!((production - 11862.0).abs() < 1e-6, "production {}", production);
        let efficiency = efficiency_kwh_per_m2(production, c.total_surface_m2());
        assert!((efficiency - 348.882).abs() < 1e-3, "efficiency {}", efficiency);
    }

    #[test]
    fn test_weather_and_irradiation_scale_linearly() {
        let clear = config("Paris", "Polycristallin", 10, Weather::Clear);
        let rainy = InstallationConfig { weather: Weather::Rainy, ..clear.clone() };
        let base_clear = base_production_kwh(&clear, &clear.site);
        assert!((base_clear - 0.5 * 10500.0 * 1400.0 / 1824.0).abs() < 1e-6);
        assert!((base_production_kwh(&rainy, &rainy.site) - base_clear * 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_without_normalisation_site_is_ignored() {
        let mut c = config("Lille", "Amorphe", 20, Weather::Cloudy);
        c.normalize_irradiation = false;
        assert!((base_production_kwh(&c, &c.site) - 6000.0 * 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_shading_reduces_production() {
        let c = config("Marseille", "Bifacial", 20, Weather::Clear);
        let shaded = annual_production_kwh(&c, 60.0, &c.site);
        assert!((shaded - 11200.0 * 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_zero_panels() {
        let c = config("Nice", "Hétérojonction", 0, Weather::Clear);
        let production = annual_production_kwh(&c, 0.0, &c.site);
        assert_eq!(production, 0.0);
        assert_eq!(efficiency_kwh_per_m2(production, c.total_surface_m2()), 0.0);
        assert_eq!(installation_cost(c.installed_capacity_kwp(), 1.5), 0.0);
    }

    #[test]
    fn test_cost() {
        assert!((installation_cost(8.0, 1.20) - 9600.0).abs() < 1e-9);
    }
}
