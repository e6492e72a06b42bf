use crate::domain::GridAnalysis;

use super::round_dp;

/// Split daily demand into self-supplied and grid-supplied shares.
///
/// Dependency is derived from the rounded self-consumption figure, so the two
/// percentages always add up to 100.
pub fn analyze_grid(daily_production_kwh: f64, daily_consumption_kwh: f64) -> GridAnalysis {
    let (import, export, self_consumption) =
        if daily_production_kwh >= daily_consumption_kwh && daily_consumption_kwh > 0.0 {
            (0.0, daily_production_kwh - daily_consumption_kwh, 100.0)
        } else {
            let import = (daily_consumption_kwh - daily_production_kwh).max(0.0);
            let share = if daily_consumption_kwh > 0.0 {
                daily_production_kwh / daily_consumption_kwh * 100.0
            } else {
                0.0
            };
            (import, 0.0, share)
        };

    let self_consumption_percent = round_dp(self_consumption, 1);

    GridAnalysis {
        daily_grid_import_kwh: round_dp(import, 2),
        daily_excess_export_kwh: round_dp(export, 2),
        self_consumption_percent,
        grid_dependency_percent: round_dp(100.0 - self_consumption_percent, 1),
    }
}
