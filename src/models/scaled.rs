//! Scaled nutrition model

use std::fmt;

use super::{Nutrient, Nutrition};
use crate::nutrition::ServingUnit;

/// A nutrient amount rounded to two decimals.
///
/// Displays with exactly two fractional digits. A NaN amount displays as
/// `NaN`, which the percentage calculator treats as "no percentage".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue(pub f64);

impl ScaledValue {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }
}

impl fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("NaN")
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// Nutrition values for the consumed quantity
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledNutrition {
    /// Quantity consumed, in `unit`
    pub consumed: f64,
    pub unit: ServingUnit,
    pub scaling_factor: f64,
    /// Already rounded to two decimals
    pub nutrition: Nutrition,
}

impl ScaledNutrition {
    pub fn value(&self, nutrient: Nutrient) -> ScaledValue {
        ScaledValue(self.nutrition.get(nutrient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(ScaledValue(500.0).to_string(), "500.00");
        assert_eq!(ScaledValue(0.0).to_string(), "0.00");
        assert_eq!(ScaledValue(12.34).to_string(), "12.34");
        assert_eq!(ScaledValue(-3.5).to_string(), "-3.50");
    }

    #[test]
    fn test_display_nan_sentinel() {
        assert_eq!(ScaledValue(f64::NAN).to_string(), "NaN");
    }
}
