//! Boundary checks. Everything past this module may assume in-range inputs.

use crate::error::EngineError;
use crate::models::installation::Obstacle;
use crate::services::solar_geometry::{SUNRISE_HOUR, SUNSET_HOUR};

pub const MAX_OBSTACLES: usize = 3;

pub fn month(value: i64) -> Result<u8, EngineError> {
    if (1..=12).contains(&value) {
        Ok(value as u8)
    } else {
        Err(EngineError::out_of_range("month", value as f64, 1.0, 12.0))
    }
}

pub fn hour(value: i64) -> Result<u8, EngineError> {
    if (SUNRISE_HOUR as i64..=SUNSET_HOUR as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(EngineError::out_of_range(
            "hour",
            value as f64,
            SUNRISE_HOUR as f64,
            SUNSET_HOUR as f64,
        ))
    }
}

pub fn panel_count(value: i64) -> Result<u32, EngineError> {
    u32::try_from(value)
        .map_err(|_| EngineError::out_of_range("panel_count", value as f64, 0.0, u32::MAX as f64))
}

pub fn obstacle(o: &Obstacle) -> Result<(), EngineError> {
    if !o.height_m.is_finite() || o.height_m < 0.0 {
        return Err(EngineError::out_of_range("height_m", o.height_m, 0.0, f64::MAX));
    }
    if !o.horizontal_distance_m.is_finite() {
        return Err(EngineError::out_of_range(
            "horizontal_distance_m",
            o.horizontal_distance_m,
            f64::MIN,
            f64::MAX,
        ));
    }
    Ok(())
}

pub fn obstacles(list: &[Obstacle]) -> Result<(), EngineError> {
    if list.len() > MAX_OBSTACLES {
        return Err(EngineError::TooManyObstacles { count: list.len(), max: MAX_OBSTACLES });
    }
    list.iter().try_for_each(obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::installation::ObstacleKind;

    #[test]
    fn test_calendar_ranges() {
        assert_eq!(month(1), Ok(1));
        assert_eq!(month(12), Ok(12));
        assert!(month(0).is_err());
        assert!(month(13).is_err());
        assert_eq!(hour(6), Ok(6));
        assert_eq!(hour(18), Ok(18));
        assert!(matches!(
            hour(5),
            Err(EngineError::InvalidRange { field: "hour", .. })
        ));
        assert!(hour(19).is_err());
    }

    #[test]
    fn test_negative_panel_count() {
        assert_eq!(panel_count(0), Ok(0));
        assert_eq!(panel_count(25), Ok(25));
        assert!(matches!(
            panel_count(-1),
            Err(EngineError::InvalidRange { field: "panel_count", .. })
        ));
    }

    #[test]
    fn test_obstacles() {
        let ok = Obstacle { kind: ObstacleKind::Wall, height_m: 2.0, horizontal_distance_m: -4.0 };
        let negative = Obstacle { height_m: -1.0, ..ok };
        let nan = Obstacle { horizontal_distance_m: f64::NAN, ..ok };
        assert!(obstacles(&[ok, ok, ok]).is_ok());
        assert!(obstacles(&[]).is_ok());
        assert!(matches!(
            obstacles(&[ok, ok, ok, ok]),
            Err(EngineError::TooManyObstacles { count: 4, max: 3 })
        ));
        assert!(matches!(
            obstacles(&[ok, negative]),
            Err(EngineError::InvalidRange { field: "height_m", .. })
        ));
        assert!(obstacle(&nan).is_err());
    }
}
