//! Value objects produced by the sizing pipeline.
//!
//! Field names follow the JSON document consumed by the dashboard.

use serde::{Deserialize, Serialize};

/// Aggregated household demand and the panel array that covers it.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub total_daily_wh: f64,
    pub total_daily_kwh: f64,
    pub panels_needed: u32,
    /// Nameplate array size in kW
    pub recommended_system_size: f64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltAngles {
    pub optimal_angle: f64,
    pub winter_angle: f64,
    pub summer_angle: f64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionEstimate {
    pub daily_kwh: f64,
    pub weekly_kwh: f64,
    pub monthly_kwh: f64,
    pub yearly_kwh: f64,
    pub peak_sun_hours: f64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySizing {
    pub recommended_capacity_kwh: f64,
    pub backup_days: u32,
    /// USD
    pub estimated_cost: f64,
}

/// Capital cost breakdown and simple payback, all amounts in USD.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRoi {
    pub total_cost: f64,
    pub panel_cost: f64,
    pub inverter_cost: f64,
    pub installation_cost: f64,
    pub battery_cost: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
    pub payback_period_years: f64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Savings {
    #[serde(rename = "yearly_co2_savings_kg")]
    pub yearly_kg: f64,
    #[serde(rename = "yearly_co2_savings_tons")]
    pub yearly_tons: f64,
    #[serde(rename = "equivalent_trees_planted")]
    pub equivalent_trees: u64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationPoint {
    pub year: u32,
    pub production_kwh: f64,
    pub efficiency_percent: f64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridAnalysis {
    pub daily_grid_import_kwh: f64,
    pub daily_excess_export_kwh: f64,
    pub self_consumption_percent: f64,
    pub grid_dependency_percent: f64,
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub system_size_kw: f64,
    pub yearly_production_kwh: f64,
    pub total_cost: f64,
    #[serde(rename = "payback_period")]
    pub payback_period_years: f64,
}

/// Recommended service intervals, identical for every installation.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub panel_cleaning: String,
    pub inverter_replacement: String,
    pub battery_replacement: String,
    pub system_inspection: String,
}

impl Default for MaintenanceSchedule {
    fn default() -> Self {
        Self {
            panel_cleaning: "Every 3-6 months".to_string(),
            inverter_replacement: "10-15 years".to_string(),
            battery_replacement: "8-12 years".to_string(),
            system_inspection: "Annual".to_string(),
        }
    }
}

/// Everything one calculation run produces.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub panel_requirements: LoadSummary,
    pub tilt_angles: TiltAngles,
    pub production_estimate: ProductionEstimate,
    pub battery_sizing: BatterySizing,
    pub cost_roi: CostRoi,
    pub co2_savings: Co2Savings,
    pub grid_analysis: GridAnalysis,
    pub degradation_forecast: Vec<DegradationPoint>,
    pub system_comparison: Vec<ComparisonEntry>,
    pub maintenance_schedule: MaintenanceSchedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_co2_field_names() {
        let co2 = Co2Savings {
            yearly_kg: 100.0,
            yearly_tons: 0.1,
            equivalent_trees: 5,
        };
        let json = serde_json::to_value(&co2).unwrap();
        assert_eq!(json["yearly_co2_savings_kg"], 100.0);
        assert_eq!(json["yearly_co2_savings_tons"], 0.1);
        assert_eq!(json["equivalent_trees_planted"], 5);
    }

    #[test]
    fn test_comparison_uses_payback_period_key() {
        let entry = ComparisonEntry {
            system_size_kw: 3.0,
            yearly_production_kwh: 100.0,
            total_cost: 5000.0,
            payback_period_years: 12.5,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"payback_period\":12.5"));
    }

    #[test]
    fn test_maintenance_schedule_defaults() {
        let m = MaintenanceSchedule::default();
        assert_eq!(m.panel_cleaning, "Every 3-6 months");
        assert_eq!(m.system_inspection, "Annual");
    }
}
