use crate::domain::CostRoi;

use super::constants::{
    BATTERY_COST_PER_KWH, ELECTRICITY_RATE_PER_KWH, INSTALLATION_COST_PER_KW,
    INVERTER_COST_PER_KW, MONTHS_PER_YEAR, PANEL_COST_PER_KW,
};
use super::round_dp;

/// Capital cost of an array plus battery, and the simple payback against a
/// flat retail tariff.
///
/// Payback is reported as 0 when there are no savings to recover the cost.
pub fn estimate_cost(
    system_size_kw: f64,
    battery_capacity_kwh: f64,
    monthly_consumption_kwh: f64,
) -> CostRoi {
    let panel_cost = system_size_kw * PANEL_COST_PER_KW;
    let inverter_cost = system_size_kw * INVERTER_COST_PER_KW;
    let installation_cost = system_size_kw * INSTALLATION_COST_PER_KW;
    let battery_cost = battery_capacity_kwh * BATTERY_COST_PER_KWH;
    let total_cost = panel_cost + inverter_cost + installation_cost + battery_cost;

    let monthly_savings = monthly_consumption_kwh * ELECTRICITY_RATE_PER_KWH;
    let yearly_savings = monthly_savings * MONTHS_PER_YEAR;
    let payback = if yearly_savings > 0.0 {
        total_cost / yearly_savings
    } else {
        0.0
    };

    CostRoi {
        total_cost: round_dp(total_cost, 2),
        panel_cost: round_dp(panel_cost, 2),
        inverter_cost: round_dp(inverter_cost, 2),
        installation_cost: round_dp(installation_cost, 2),
        battery_cost: round_dp(battery_cost, 2),
        monthly_savings: round_dp(monthly_savings, 2),
        yearly_savings: round_dp(yearly_savings, 2),
        payback_period_years: round_dp(payback, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_kw_with_five_kwh_battery() {
        let c = estimate_cost(3.0, 5.0, 300.0);
        assert_eq!(c.panel_cost, 3000.0);
        assert_eq!(c.inverter_cost, 600.0);
        assert_eq!(c.installation_cost, 900.0);
        assert_eq!(c.battery_cost, 2500.0);
        assert_eq!(c.total_cost, 7000.0);
        assert_eq!(c.monthly_savings, 36.0);
        assert_eq!(c.yearly_savings, 432.0);
        // 7000 / 432 = 16.20
        assert_eq!(c.payback_period_years, 16.2);
    }

    #[test]
    fn test_no_consumption_means_no_payback() {
        let c = estimate_cost(5.0, 10.0, 0.0);
        assert_eq!(c.total_cost, 12_000.0);
        assert_eq!(c.yearly_savings, 0.0);
        assert_eq!(c.payback_period_years, 0.0);
    }

    #[test]
    fn test_empty_system_costs_nothing() {
        let c = estimate_cost(0.0, 0.0, 0.0);
        assert_eq!(c.total_cost, 0.0);
        assert_eq!(c.payback_period_years, 0.0);
    }
}
