use crate::domain::Co2Savings;

use super::constants::{CO2_KG_PER_KWH, CO2_KG_PER_TREE_YEAR};
use super::round_dp;

/// CO2 avoided by displacing grid electricity with `yearly_production_kwh`.
pub fn co2_savings(yearly_production_kwh: f64) -> Co2Savings {
    let yearly_kg = yearly_production_kwh * CO2_KG_PER_KWH;
    let trees = (yearly_kg / CO2_KG_PER_TREE_YEAR).round().max(0.0);

    Co2Savings {
        yearly_kg: round_dp(yearly_kg, 2),
        yearly_tons: round_dp(yearly_kg / 1000.0, 2),
        equivalent_trees: trees as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, 0.0, 0)]
    #[case(1000.0, 500.0, 0.5, 23)]
    #[case(3000.0, 1500.0, 1.5, 68)]
    #[case(100.0, 50.0, 0.05, 2)]
    #[case(1234.25, 617.12, 0.62, 28)]
    fn test_co2_savings(
        #[case] production: f64,
        #[case] kg: f64,
        #[case] tons: f64,
        #[case] trees: u64,
    ) {
        let s = co2_savings(production);
        assert_eq!(s.yearly_kg, kg);
        assert_eq!(s.yearly_tons, tons);
        assert_eq!(s.equivalent_trees, trees);
    }
}
