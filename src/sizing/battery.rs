use crate::domain::BatterySizing;

use super::constants::{BATTERY_COST_PER_KWH, DEPTH_OF_DISCHARGE};
use super::round_dp;

/// Size a battery bank that carries `daily_consumption_kwh` for `backup_days`.
///
/// Nameplate capacity is the usable energy grossed up by the allowed depth
/// of discharge.
pub fn size_battery(daily_consumption_kwh: f64, backup_days: u32) -> BatterySizing {
    let usable = daily_consumption_kwh * backup_days as f64;
    let total = if usable > 0.0 {
        usable / DEPTH_OF_DISCHARGE
    } else {
        0.0
    };

    BatterySizing {
        recommended_capacity_kwh: round_dp(total, 2),
        backup_days,
        estimated_cost: round_dp(total * BATTERY_COST_PER_KWH, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::constants::DEFAULT_BACKUP_DAYS;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 2, 25.0, 12_500.0)]
    #[case(4.48, 2, 11.2, 5_600.0)]
    #[case(5.0, 1, 6.25, 3_125.0)]
    #[case(0.006, 2, 0.01, 7.5)]
    #[case(0.0, 2, 0.0, 0.0)]
    #[case(10.0, 0, 0.0, 0.0)]
    fn test_size_battery(
        #[case] daily_kwh: f64,
        #[case] days: u32,
        #[case] capacity: f64,
        #[case] cost: f64,
    ) {
        let b = size_battery(daily_kwh, days);
        assert_eq!(b.recommended_capacity_kwh, capacity);
        assert_eq!(b.estimated_cost, cost);
        assert_eq!(b.backup_days, days);
    }

    #[test]
    fn test_default_backup_days() {
        assert_eq!(size_battery(1.0, DEFAULT_BACKUP_DAYS).backup_days, 2);
    }
}
