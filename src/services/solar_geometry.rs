//! ============================================================
//!  Simplified solar geometry
//!
//!   1. Declination  – 23.45° · sin(30° · (month − 2)), a seasonal
//!                     proxy peaking around month 5, not calendar exact
//!   2. Midday height – 90° − latitude + declination, or a fixed
//!                      per-month table
//!   3. Day profile  – half sine between 06:00 and 18:00, clamped
//!                     at zero
//!
//!  Hours outside 6..=18 must be rejected by the caller; the clamp
//!  only hides the negative half of the sine.
//! ============================================================

use std::f64::consts::PI;

use crate::models::installation::SunModel;

// ─── Constants ───────────────────────────────────────────────
const DEG: f64 = PI / 180.0;
pub const MAX_DECLINATION_DEG: f64 = 23.45;
pub const SUNRISE_HOUR: u8 = 6;
pub const SUNSET_HOUR: u8 = 18;

/// Midday sun height by month (Jan..Dec) for the latitude-free model.
pub const MIDDAY_ELEVATION_BY_MONTH: [f64; 12] = [
    26.0, 34.0, 45.0, 55.0, 64.0, 69.0, 67.0, 60.0, 50.0, 39.0, 30.0, 25.0,
];

pub fn solar_declination_deg(month: u8) -> f64 {
    MAX_DECLINATION_DEG * ((360.0 / 12.0) * (month as f64 - 2.0) * DEG).sin()
}

pub fn midday_elevation_deg(latitude_deg: f64, declination_deg: f64) -> f64 {
    90.0 - latitude_deg + declination_deg
}

/// Scale a midday height along the 06:00–18:00 half-sine profile.
/// Sunrise and sunset are exactly flat.
fn day_profile(midday_deg: f64, hour: u8) -> f64 {
    if hour <= SUNRISE_HOUR || hour >= SUNSET_HOUR {
        return 0.0;
    }
    let phase = PI * (hour as f64 - SUNRISE_HOUR as f64) / 12.0;
    (midday_deg * phase.sin()).max(0.0)
}

pub fn sun_elevation_deg(latitude_deg: f64, declination_deg: f64, hour: u8) -> f64 {
    day_profile(midday_elevation_deg(latitude_deg, declination_deg), hour)
}

/// Midday height for `month` under the chosen model.
pub fn midday_for(model: SunModel, latitude_deg: f64, month: u8) -> f64 {
    match model {
        SunModel::Declination => {
            midday_elevation_deg(latitude_deg, solar_declination_deg(month))
        }
        SunModel::MonthlyTable => {
            let idx = (month.clamp(1, 12) - 1) as usize;
            MIDDAY_ELEVATION_BY_MONTH[idx]
        }
    }
}

pub fn elevation_for(model: SunModel, latitude_deg: f64, month: u8, hour: u8) -> f64 {
    day_profile(midday_for(model, latitude_deg, month), hour)
}
