use crate::domain::DegradationPoint;

use super::constants::{ANNUAL_DEGRADATION_RATE, DEFAULT_DEGRADATION_YEARS};
use super::round_dp;

/// Year-by-year output under compounding panel degradation, starting from
/// year 1 (one year of ageing already applied).
pub fn forecast_degradation(initial_production_kwh: f64, years: u32) -> Vec<DegradationPoint> {
    (1..=years)
        .map(|year| {
            let remaining = (1.0 - ANNUAL_DEGRADATION_RATE).powi(year as i32);
            DegradationPoint {
                year,
                production_kwh: round_dp(initial_production_kwh * remaining, 2),
                efficiency_percent: round_dp(remaining * 100.0, 1),
            }
        })
        .collect()
}

/// Forecast over the full panel warranty horizon.
pub fn forecast_lifetime(initial_production_kwh: f64) -> Vec<DegradationPoint> {
    forecast_degradation(initial_production_kwh, DEFAULT_DEGRADATION_YEARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_horizon() {
        let forecast = forecast_lifetime(1000.0);
        assert_eq!(forecast.len(), 25);
        assert_eq!(forecast.first().map(|p| p.year), Some(1));
        assert_eq!(forecast.last().map(|p| p.year), Some(25));
    }

    #[test]
    fn test_first_and_tenth_year() {
        let forecast = forecast_degradation(1000.0, 10);
        assert_eq!(forecast[0].production_kwh, 995.0);
        assert_eq!(forecast[0].efficiency_percent, 99.5);
        // 0.995^10 = 0.95111
        assert_eq!(forecast[9].production_kwh, 951.11);
        assert_eq!(forecast[9].efficiency_percent, 95.1);
    }

    #[test]
    fn test_zero_years_is_empty() {
        assert!(forecast_degradation(1000.0, 0).is_empty());
    }

    #[test]
    fn test_shorter_horizon_is_prefix() {
        let long = forecast_degradation(4321.0, 25);
        let short = forecast_degradation(4321.0, 10);
        assert_eq!(&long[..10], short.as_slice());
    }

    proptest! {
        #[test]
        fn prop_output_never_increases(initial in 0.0f64..100_000.0, years in 1u32..40) {
            let forecast = forecast_degradation(initial, years);
            prop_assert_eq!(forecast.len(), years as usize);
            for pair in forecast.windows(2) {
                prop_assert_eq!(pair[1].year, pair[0].year + 1);
                prop_assert!(pair[1].production_kwh <= pair[0].production_kwh);
                prop_assert!(pair[1].efficiency_percent <= pair[0].efficiency_percent);
            }
        }
    }
}
