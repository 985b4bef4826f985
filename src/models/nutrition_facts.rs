//! Nutrition facts model
//!
//! What a product label declares for one labeled serving.

use super::{Nutrient, Nutrition};
use crate::nutrition::ServingUnit;

/// Nutrition facts for one labeled serving
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionFacts {
    pub nutrition: Nutrition,
    /// Labeled serving size, always > 0
    pub serving_size: f64,
    pub unit: ServingUnit,
}

impl NutritionFacts {
    pub fn new(nutrition: Nutrition, serving_size: f64, unit: ServingUnit) -> Self {
        Self {
            nutrition,
            serving_size,
            unit,
        }
    }

    /// Whether a nutrient belongs in the report.
    ///
    /// Mandatory nutrients always do. Optional ones only when the label value
    /// is non-zero and numeric; scaling a zero stays zero, so the unscaled
    /// value decides.
    pub fn is_reported(&self, nutrient: Nutrient) -> bool {
        if nutrient.is_mandatory() {
            return true;
        }
        let value = self.nutrition.get(nutrient);
        value != 0.0 && !value.is_nan()
    }
}
