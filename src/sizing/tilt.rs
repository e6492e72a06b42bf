use crate::domain::TiltAngles;

use super::constants::{
    SEASONAL_TILT_SWING_DEG, TILT_OFFSET_DEG, TILT_SLOPE, TROPICAL_LATITUDE_LIMIT,
};
use super::round_dp;

/// Fixed-mount tilt angles for a latitude in degrees.
///
/// Non-finite latitudes are treated as the equator.
pub fn tilt_angles(latitude: f64) -> TiltAngles {
    let lat = if latitude.is_finite() { latitude.abs() } else { 0.0 };

    let optimal = if lat < TROPICAL_LATITUDE_LIMIT {
        lat
    } else {
        lat * TILT_SLOPE + TILT_OFFSET_DEG
    };
    let winter = optimal + SEASONAL_TILT_SWING_DEG;
    let summer = (optimal - SEASONAL_TILT_SWING_DEG).max(0.0);

    TiltAngles {
        optimal_angle: round_dp(optimal, 1),
        winter_angle: round_dp(winter, 1),
        summer_angle: round_dp(summer, 1),
    }
}
