use tracing::debug;

use crate::domain::{GeoLocation, ProductionEstimate};
use crate::weather::{IrradianceLookup, IrradianceSource};

use super::constants::{
    DAYS_PER_MONTH, DAYS_PER_WEEK, DAYS_PER_YEAR, HOURS_PER_DAY, SYSTEM_EFFICIENCY,
};
use super::round_dp;

/// Estimate array output at `location`, falling back to the constant
/// irradiance when the lookup does not yield a usable series.
pub async fn estimate_production(
    source: &dyn IrradianceSource,
    location: GeoLocation,
    system_size_kw: f64,
) -> ProductionEstimate {
    let lookup = IrradianceLookup::resolve(source, location).await;
    debug!(
        %location,
        system_size_kw,
        fallback = lookup.is_fallback(),
        "estimating production"
    );
    production_from_lookup(&lookup, system_size_kw)
}

pub fn production_from_lookup(lookup: &IrradianceLookup, system_size_kw: f64) -> ProductionEstimate {
    production_from_irradiance(lookup.average(), system_size_kw)
}

/// Convert a mean daily irradiance figure into production totals.
pub fn production_from_irradiance(avg_irradiance: f64, system_size_kw: f64) -> ProductionEstimate {
    let peak_sun_hours = avg_irradiance / 1000.0 * HOURS_PER_DAY;
    let daily = system_size_kw * peak_sun_hours * SYSTEM_EFFICIENCY;

    ProductionEstimate {
        daily_kwh: round_dp(daily, 2),
        weekly_kwh: round_dp(daily * DAYS_PER_WEEK, 2),
        monthly_kwh: round_dp(daily * DAYS_PER_MONTH, 2),
        yearly_kwh: round_dp(daily * DAYS_PER_YEAR, 2),
        peak_sun_hours: round_dp(peak_sun_hours, 2),
    }
}
