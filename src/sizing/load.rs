use crate::domain::{ApplianceLoad, LoadSummary};

use super::constants::{PANEL_RATED_KW, PEAK_SUN_HOURS_ASSUMED, SYSTEM_EFFICIENCY};
use super::round_dp;

/// Daily output of a single nameplate panel in kWh.
pub fn panel_output_per_day() -> f64 {
    PANEL_RATED_KW * PEAK_SUN_HOURS_ASSUMED * SYSTEM_EFFICIENCY
}

/// Sum the load list and size a panel array that covers it.
pub fn aggregate_load(appliances: &[ApplianceLoad]) -> LoadSummary {
    let total_daily_wh: f64 = appliances.iter().map(ApplianceLoad::daily_energy_wh).sum();
    let total_daily_kwh = total_daily_wh / 1000.0;

    let per_panel = panel_output_per_day();
    let panels_needed = if per_panel > 0.0 {
        (total_daily_kwh / per_panel).ceil().max(0.0) as u32
    } else {
        0
    };

    LoadSummary {
        total_daily_wh: round_dp(total_daily_wh, 2),
        total_daily_kwh: round_dp(total_daily_kwh, 3),
        panels_needed,
        recommended_system_size: round_dp(panels_needed as f64 * PANEL_RATED_KW, 2),
    }
}
