/// Yearly consumption of the reference household (kWh).
pub const BUILDING_CONSUMPTION_KWH: f64 = 8260.0;
/// Share of the overlapping production/consumption actually consumed on site.
pub const SELF_CONSUMPTION_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    pub self_consumed_kwh: f64,
    pub grid_injected_kwh: f64,
    pub grid_drawn_kwh: f64,
}

impl EnergyBalance {
    /// Split yearly production against the reference household.
    pub fn from_production(annual_production_kwh: f64) -> Self {
        let consumption = BUILDING_CONSUMPTION_KWH;
        let self_consumed = consumption.min(annual_production_kwh) * SELF_CONSUMPTION_RATIO;
        Self {
            self_consumed_kwh: self_consumed,
            grid_injected_kwh: (annual_production_kwh - self_consumed).max(0.0),
            grid_drawn_kwh: (consumption - self_consumed).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surplus_production() {
        let b = EnergyBalance::from_production(11862.0);
        assert!((b.self_consumed_kwh - 7434.0).abs() < 1e-9);
        assert!((b.grid_injected_kwh - 4428.0).abs() < 1e-9);
        assert!((b.grid_drawn_kwh - 826.0).abs() < 1e-9);
    }

    #[test]
    fn test_deficit_production() {
        let b = EnergyBalance::from_production(4000.0);
        assert!((b.self_consumed_kwh - 3600.0).abs() < 1e-9);
        assert!((b.grid_injected_kwh - 400.0).abs() < 1e-9);
        assert!((b.grid_drawn_kwh - 4660.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_production() {
        let b = EnergyBalance::from_production(0.0);
        assert_eq!(b.self_consumed_kwh, 0.0);
        assert_eq!(b.grid_injected_kwh, 0.0);
        assert_eq!(b.grid_drawn_kwh, BUILDING_CONSUMPTION_KWH);
    }

    #[test]
    fn test_self_consumption_bounds() {
        for production in [0.0, 100.0, 8260.0, 9000.0, 50_000.0] {
            let b = EnergyBalance::from_production(production);
            assert!(b.self_consumed_kwh <= BUILDING_CONSUMPTION_KWH * SELF_CONSUMPTION_RATIO + 1e-9);
            assert!(b.self_consumed_kwh <= production * SELF_CONSUMPTION_RATIO + 1e-9);
        }
    }
}
