//! Daily value percentages

use std::fmt;

use super::daily_values::ReferenceDailyValues;
use super::scaler::round2;
use crate::models::{Nutrient, ScaledValue};

/// Share of the daily reference a scaled amount represents
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyValuePercent {
    /// Percentage, rounded to two decimals
    Percent(f64),
    /// No reference, or the amount itself is not a number
    NotApplicable,
}

impl fmt::Display for DailyValuePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyValuePercent::Percent(p) => write!(f, "{:.2}%", p),
            DailyValuePercent::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Percentage of `reference` that `value` represents.
///
/// A missing, zero or NaN reference and a NaN value all yield `N/A`.
pub fn calculate_percentage(value: ScaledValue, reference: Option<f64>) -> DailyValuePercent {
    match reference {
        Some(dv) if dv != 0.0 && !dv.is_nan() && !value.is_nan() => {
            DailyValuePercent::Percent(round2(value.value() / dv * 100.0))
        }
        _ => DailyValuePercent::NotApplicable,
    }
}

/// Look `nutrient` up in `table` and compute its percentage
pub fn daily_value_percent(
    table: &ReferenceDailyValues,
    nutrient: Nutrient,
    value: ScaledValue,
) -> DailyValuePercent {
    calculate_percentage(value, table.get(nutrient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_against_standard_table() {
        let table = ReferenceDailyValues::standard();
        let pct = |n, v| daily_value_percent(&table, n, ScaledValue(v)).to_string();
        assert_eq!(pct(Nutrient::Energy, 500.0), "22.42%");
        assert_eq!(pct(Nutrient::Protein, 10.0), "18.18%");
        assert_eq!(pct(Nutrient::Sodium, 300.0), "15.00%");
        assert_eq!(pct(Nutrient::TransFat, 0.0), "0.00%");
    }

    #[test]
    fn test_zero_reference_is_not_applicable() {
        assert_eq!(
            calculate_percentage(ScaledValue(10.0), Some(0.0)),
            DailyValuePercent::NotApplicable
        );
    }

    #[test]
    fn test_missing_reference_is_not_applicable() {
        let table = ReferenceDailyValues::from_entries([(Nutrient::Protein, 55.0)]);
        let pct = daily_value_percent(&table, Nutrient::Energy, ScaledValue(500.0));
        assert_eq!(pct.to_string(), "N/A");
    }

    #[test]
    fn test_nan_value_is_not_applicable() {
        assert_eq!(
            calculate_percentage(ScaledValue(f64::NAN), Some(55.0)),
            DailyValuePercent::NotApplicable
        );
        assert_eq!(
            calculate_percentage(ScaledValue(1.0), Some(f64::NAN)),
            DailyValuePercent::NotApplicable
        );
    }
}
