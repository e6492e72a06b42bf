//! Residential PV sizing pipeline.
//!
//! Each stage is a free function over plain values; [`SolarCalculator`] wires
//! them together. Stage outputs are rounded for presentation and downstream
//! stages consume the rounded figures.

pub mod battery;
pub mod calculator;
pub mod comparison;
pub mod constants;
pub mod cost;
pub mod degradation;
pub mod environment;
pub mod grid;
pub mod load;
pub mod production;
pub mod tilt;

pub use battery::size_battery;
pub use calculator::SolarCalculator;
pub use comparison::build_comparison;
pub use cost::estimate_cost;
pub use degradation::{forecast_degradation, forecast_lifetime};
pub use environment::co2_savings;
pub use grid::analyze_grid;
pub use load::{aggregate_load, panel_output_per_day};
pub use production::{estimate_production, production_from_irradiance, production_from_lookup};
pub use tilt::tilt_angles;

/// Round to `decimals` places from the exact decimal expansion of `value`.
///
/// Scaling by a power of ten first can lift a value sitting just below a
/// midpoint onto it; formatting rounds the stored binary value directly, with
/// exact ties going to the even digit.
pub(crate) fn round_dp(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::round_dp;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(1.234, 2), 1.23);
        assert_eq!(round_dp(1.235_1, 2), 1.24);
        assert_eq!(round_dp(-2.56, 1), -2.6);
        assert_eq!(round_dp(84.6, 0), 85.0);
    }

    #[test]
    fn test_round_dp_uses_stored_value() {
        // 0.0045 and 0.015 are stored slightly below the midpoint
        assert_eq!(round_dp(0.0045, 3), 0.004);
        assert_eq!(round_dp(0.012 / 0.8, 2), 0.01);
        // 617.125 is exact in binary
        assert_eq!(round_dp(617.125, 2), 617.12);
        assert_eq!(round_dp(0.375, 2), 0.38);
    }

    #[test]
    fn test_round_dp_non_finite() {
        assert!(round_dp(f64::NAN, 2).is_nan());
        assert_eq!(round_dp(f64::INFINITY, 2), f64::INFINITY);
    }
}
