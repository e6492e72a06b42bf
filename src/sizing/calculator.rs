use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::domain::{ApplianceLoad, CalculationResult, GeoLocation, MaintenanceSchedule};
use crate::weather::IrradianceSource;

use super::constants::{DAYS_PER_MONTH, DEFAULT_BACKUP_DAYS, REPORTED_DEGRADATION_YEARS};
use super::{
    aggregate_load, analyze_grid, build_comparison, co2_savings, estimate_cost,
    estimate_production, forecast_lifetime, size_battery, tilt_angles,
};

/// Runs the full sizing pipeline for one request.
///
/// Holds nothing but the irradiance collaborator, so a single instance can
/// serve concurrent requests.
#[derive(Clone)]
pub struct SolarCalculator {
    irradiance: Arc<dyn IrradianceSource>,
}

impl SolarCalculator {
    pub fn new(irradiance: Arc<dyn IrradianceSource>) -> Self {
        Self { irradiance }
    }

    pub async fn calculate(
        &self,
        appliances: &[ApplianceLoad],
        location: GeoLocation,
    ) -> CalculationResult {
        let start = Instant::now();
        let source = self.irradiance.as_ref();

        let load = aggregate_load(appliances);
        let tilt = tilt_angles(location.latitude);
        let production =
            estimate_production(source, location, load.recommended_system_size).await;
        let battery = size_battery(load.total_daily_kwh, DEFAULT_BACKUP_DAYS);

        let monthly_consumption_kwh = load.total_daily_kwh * DAYS_PER_MONTH;
        let cost = estimate_cost(
            load.recommended_system_size,
            battery.recommended_capacity_kwh,
            monthly_consumption_kwh,
        );
        let co2 = co2_savings(production.yearly_kwh);
        let mut degradation = forecast_lifetime(production.yearly_kwh);
        degradation.truncate(REPORTED_DEGRADATION_YEARS as usize);
        let grid = analyze_grid(production.daily_kwh, load.total_daily_kwh);
        let comparison = build_comparison(
            source,
            location,
            load.recommended_system_size,
            battery.recommended_capacity_kwh,
            monthly_consumption_kwh,
        )
        .await;

        info!(
            %location,
            appliances = appliances.len(),
            daily_kwh = load.total_daily_kwh,
            panels = load.panels_needed,
            system_kw = load.recommended_system_size,
            total_cost = cost.total_cost,
            duration_ms = start.elapsed().as_millis() as u64,
            "calculation completed"
        );

        CalculationResult {
            panel_requirements: load,
            tilt_angles: tilt,
            production_estimate: production,
            battery_sizing: battery,
            cost_roi: cost,
            co2_savings: co2,
            grid_analysis: grid,
            degradation_forecast: degradation,
            system_comparison: comparison,
            maintenance_schedule: MaintenanceSchedule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct Fixed(Vec<f64>);

    #[async_trait]
    impl IrradianceSource for Fixed {
        async fn daily_irradiance(&self, _location: GeoLocation) -> Result<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    struct Down;

    #[async_trait]
    impl IrradianceSource for Down {
        async fn daily_irradiance(&self, _location: GeoLocation) -> Result<Vec<f64>> {
            anyhow::bail!("HTTP 503")
        }
    }

    fn household() -> Vec<ApplianceLoad> {
        vec![
            ApplianceLoad::new("Fridge", 150.0, 24.0, 1),
            ApplianceLoad::new("Air conditioner", 1500.0, 4.0, 1),
            ApplianceLoad::new("LED bulb", 10.0, 6.0, 10),
        ]
    }

    #[tokio::test]
    async fn test_pipeline_wiring() {
        let calc = SolarCalculator::new(Arc::new(Fixed(vec![250.0])));
        let result = calc.calculate(&household(), GeoLocation::new(31.4504, 74.3)).await;

        // 3600 + 6000 + 600 Wh
        assert_eq!(result.panel_requirements.total_daily_wh, 10_200.0);
        assert_eq!(result.panel_requirements.total_daily_kwh, 10.2);
        // 10.2 / 1.1475 = 8.89
        assert_eq!(result.panel_requirements.panels_needed, 9);
        assert_eq!(result.panel_requirements.recommended_system_size, 2.7);

        assert_eq!(result.tilt_angles.optimal_angle, 30.5);

        // 2.7 kW * 6 h * 0.85
        assert_eq!(result.production_estimate.daily_kwh, 13.77);

        // 10.2 * 2 / 0.8
        assert_eq!(result.battery_sizing.recommended_capacity_kwh, 25.5);
        assert_eq!(result.battery_sizing.backup_days, 2);

        // 2.7 kW * 1500 + 25.5 kWh * 500
        assert_eq!(result.cost_roi.total_cost, 16_800.0);

        assert_eq!(result.grid_analysis.self_consumption_percent, 100.0);
        assert_eq!(result.grid_analysis.daily_excess_export_kwh, 3.57);

        assert_eq!(result.degradation_forecast.len(), 10);
        assert_eq!(result.system_comparison.len(), 3);
        assert_eq!(result.system_comparison[2].system_size_kw, 2.7);
        assert_eq!(result.maintenance_schedule, MaintenanceSchedule::default());
    }

    #[tokio::test]
    async fn test_empty_load_with_service_down() {
        let calc = SolarCalculator::new(Arc::new(Down));
        let result = calc.calculate(&[], GeoLocation::new(0.0, 0.0)).await;

        assert_eq!(result.panel_requirements.panels_needed, 0);
        assert_eq!(result.production_estimate.daily_kwh, 0.0);
        assert_eq!(result.battery_sizing.recommended_capacity_kwh, 0.0);
        assert_eq!(result.cost_roi.payback_period_years, 0.0);
        assert_eq!(result.grid_analysis.self_consumption_percent, 0.0);
        assert_eq!(result.grid_analysis.grid_dependency_percent, 100.0);
        assert_eq!(result.co2_savings.equivalent_trees, 0);
        assert_eq!(result.system_comparison.len(), 3);
    }

    #[tokio::test]
    async fn test_identical_inputs_give_identical_documents() {
        let calc = SolarCalculator::new(Arc::new(Fixed(vec![180.0, 220.5, 301.25])));
        let location = GeoLocation::new(-33.86, 151.2);

        let first = calc.calculate(&household(), location).await;
        let second = calc.calculate(&household(), location).await;

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
