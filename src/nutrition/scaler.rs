//! Serving scaler
//!
//! Scales label facts linearly from the labeled serving to a consumed amount.

use crate::models::{NutritionFacts, ScaledNutrition};

/// Round to two decimals, half away from zero.
///
/// Negative zero comes out as plain zero so it never prints as `-0.00`.
/// NaN passes through untouched.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Ratio of consumed amount to labeled serving
pub fn scaling_factor(consumed: f64, labeled_serving: f64) -> f64 {
    consumed / labeled_serving
}

/// Scale every nutrient in `facts` to `consumed`, rounding each to two decimals.
///
/// `consumed` is in the same unit as the label. The labeled serving size is
/// positive by construction, so the factor is always finite.
pub fn scale_nutrition(facts: &NutritionFacts, consumed: f64) -> ScaledNutrition {
    let factor = scaling_factor(consumed, facts.serving_size);
    tracing::debug!(
        consumed,
        labeled = facts.serving_size,
        factor,
        "scaling nutrition facts"
    );

    ScaledNutrition {
        consumed,
        unit: facts.unit,
        scaling_factor: factor,
        nutrition: facts.nutrition.scale(factor).map(round2),
    }
}
