use crate::domain::{ComparisonEntry, GeoLocation};
use crate::weather::IrradianceSource;

use super::constants::{COMPARISON_BATTERY_SCALE, COMPARISON_SIZES_KW};
use super::cost::estimate_cost;
use super::production::estimate_production;

/// Production and cost for the fixed 3 kW / 5 kW alternatives followed by
/// the recommended size.
///
/// Alternatives are paired with a battery at 70% of the recommended
/// capacity. Entries keep candidate order and duplicates are kept.
pub async fn build_comparison(
    source: &dyn IrradianceSource,
    location: GeoLocation,
    recommended_size_kw: f64,
    recommended_battery_kwh: f64,
    monthly_consumption_kwh: f64,
) -> Vec<ComparisonEntry> {
    let battery_kwh = recommended_battery_kwh * COMPARISON_BATTERY_SCALE;
    let candidates = COMPARISON_SIZES_KW
        .iter()
        .copied()
        .chain(std::iter::once(recommended_size_kw));

    let mut entries = Vec::with_capacity(COMPARISON_SIZES_KW.len() + 1);
    for size_kw in candidates {
        let production = estimate_production(source, location, size_kw).await;
        let cost = estimate_cost(size_kw, battery_kwh, monthly_consumption_kwh);
        entries.push(ComparisonEntry {
            system_size_kw: size_kw,
            yearly_production_kwh: production.yearly_kwh,
            total_cost: cost.total_cost,
            payback_period_years: cost.payback_period_years,
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl IrradianceSource for Counting {
        async fn daily_irradiance(&self, _location: GeoLocation) -> Result<Vec<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![250.0])
        }
    }

    fn source() -> Counting {
        Counting {
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn test_order_and_sizes() {
        let src = source();
        let entries = build_comparison(&src, GeoLocation::new(0.0, 0.0), 2.7, 10.0, 300.0).await;

        let sizes: Vec<f64> = entries.iter().map(|e| e.system_size_kw).collect();
        assert_eq!(sizes, vec![3.0, 5.0, 2.7]);
        assert_eq!(src.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_duplicate_recommended_size_is_kept() {
        let src = source();
        let entries = build_comparison(&src, GeoLocation::new(0.0, 0.0), 3.0, 10.0, 300.0).await;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], entries[2]);
    }

    #[tokio::test]
    async fn test_battery_scaled_to_seventy_percent() {
        let src = source();
        let entries = build_comparison(&src, GeoLocation::new(0.0, 0.0), 3.0, 10.0, 300.0).await;
        // 3 kW -> 4500 for the array, 7 kWh battery -> 3500
        assert_eq!(entries[0].total_cost, 8000.0);
        // 8000 / 432
        assert_eq!(entries[0].payback_period_years, 18.5);
        // 3 kW * 6 h * 0.85 * 365
        assert_eq!(entries[0].yearly_production_kwh, 5584.5);
    }
}
