//! Obstacle shading: angular height of each obstacle seen from the array,
//! compared against the sun elevation.

use crate::models::installation::Obstacle;

/// Loss ceiling for a single obstacle (percentage points).
pub const MAX_LOSS_PER_OBSTACLE_PCT: f64 = 25.0;
/// Loss ceiling for the whole obstacle set (%).
pub const MAX_TOTAL_LOSS_PCT: f64 = 60.0;

/// Elevation of the obstacle top seen from the array (deg). An obstacle at
/// zero distance blocks the full quarter circle.
pub fn obstacle_angle_deg(obstacle: &Obstacle) -> f64 {
    let distance = obstacle.horizontal_distance_m.abs();
    if distance == 0.0 {
        return 90.0;
    }
    (obstacle.height_m / distance).atan().to_degrees()
}

/// Loss contributed by one obstacle: zero once the sun clears its top,
/// otherwise proportional to its angle.
pub fn obstacle_loss_pct(obstacle: &Obstacle, sun_elevation_deg: f64) -> f64 {
    let angle = obstacle_angle_deg(obstacle);
    if angle > sun_elevation_deg {
        (angle / 90.0 * MAX_LOSS_PER_OBSTACLE_PCT).min(MAX_LOSS_PER_OBSTACLE_PCT)
    } else {
        0.0
    }
}

pub fn shading_loss_pct(obstacles: &[Obstacle], sun_elevation_deg: f64) -> f64 {
    let total: f64 = obstacles
        .iter()
        .map(|o| obstacle_loss_pct(o, sun_elevation_deg))
        .sum();
    total.clamp(0.0, MAX_TOTAL_LOSS_PCT)
}
