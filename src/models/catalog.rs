//! Static lookup tables for sites and module technologies.

use crate::models::installation::{PanelTechnology, Site};

#[rustfmt::skip]
pub static SITES: [Site; 11] = [
    Site { name: "Marseille",  latitude: 43.3, annual_irradiation: 1824.0 },
    Site { name: "Nice",       latitude: 43.7, annual_irradiation: 1800.0 },
    Site { name: "Paris",      latitude: 48.9, annual_irradiation: 1400.0 },
    Site { name: "Lille",      latitude: 50.6, annual_irradiation: 1300.0 },
    Site { name: "Metz",       latitude: 49.1, annual_irradiation: 1350.0 },
    Site { name: "Nancy",      latitude: 48.7, annual_irradiation: 1360.0 },
    Site { name: "Colmar",     latitude: 48.1, annual_irradiation: 1400.0 },
    Site { name: "Strasbourg", latitude: 48.6, annual_irradiation: 1380.0 },
    Site { name: "Toulouse",   latitude: 43.6, annual_irradiation: 1650.0 },
    Site { name: "Lyon",       latitude: 45.8, annual_irradiation: 1600.0 },
    Site { name: "Bordeaux",   latitude: 44.8, annual_irradiation: 1550.0 },
];

#[rustfmt::skip]
pub static TECHNOLOGIES: [PanelTechnology; 5] = [
    PanelTechnology { name: "Monocristallin", efficiency_pct: 20.0, price_per_watt: 1.20, reference_annual_yield_kwh: 11862.0 },
    PanelTechnology { name: "Polycristallin", efficiency_pct: 17.5, price_per_watt: 1.00, reference_annual_yield_kwh: 10500.0 },
    PanelTechnology { name: "Amorphe",        efficiency_pct: 10.0, price_per_watt: 0.80, reference_annual_yield_kwh: 6000.0 },
    PanelTechnology { name: "Hétérojonction", efficiency_pct: 21.5, price_per_watt: 1.50, reference_annual_yield_kwh: 12500.0 },
    PanelTechnology { name: "Bifacial",       efficiency_pct: 19.5, price_per_watt: 1.40, reference_annual_yield_kwh: 11200.0 },
];

pub fn site(name: &str) -> Option<Site> {
    SITES.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim())).copied()
}

pub fn technology(name: &str) -> Option<PanelTechnology> {
    TECHNOLOGIES.iter().find(|t| t.name.eq_ignore_ascii_case(name.trim())).copied()
}
