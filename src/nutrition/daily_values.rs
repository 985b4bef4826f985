//! Reference daily values
//!
//! Recommended daily intake per nutrient, in the same unit the nutrient is
//! declared in (kcal, g or mg).

use std::collections::BTreeMap;

use crate::models::Nutrient;

/// Energy reference in kcal
pub const DV_ENERGY: f64 = 2230.0;
pub const DV_PROTEIN: f64 = 55.0;
pub const DV_CARBOHYDRATES: f64 = 330.0;
pub const DV_ADDED_SUGARS: f64 = 30.0;
pub const DV_DIETARY_FIBER: f64 = 30.0;
pub const DV_TOTAL_FAT: f64 = 74.0;
pub const DV_SATURATED_FAT: f64 = 22.0;
/// Sodium reference in mg
pub const DV_SODIUM: f64 = 2000.0;
pub const DV_MONOUNSATURATED_FAT: f64 = 25.0;
pub const DV_POLYUNSATURATED_FAT: f64 = 25.0;
pub const DV_TRANS_FAT: f64 = 2.0;

/// Immutable nutrient → daily reference table.
///
/// Built once at startup and lent to whoever needs a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDailyValues {
    values: BTreeMap<Nutrient, f64>,
}

impl ReferenceDailyValues {
    /// The general-guideline table covering all eleven nutrients
    pub fn standard() -> Self {
        Self::from_entries([
            (Nutrient::Energy, DV_ENERGY),
            (Nutrient::Protein, DV_PROTEIN),
            (Nutrient::Carbohydrates, DV_CARBOHYDRATES),
            (Nutrient::AddedSugars, DV_ADDED_SUGARS),
            (Nutrient::DietaryFiber, DV_DIETARY_FIBER),
            (Nutrient::TotalFat, DV_TOTAL_FAT),
            (Nutrient::SaturatedFat, DV_SATURATED_FAT),
            (Nutrient::Sodium, DV_SODIUM),
            (Nutrient::MonounsaturatedFat, DV_MONOUNSATURATED_FAT),
            (Nutrient::PolyunsaturatedFat, DV_POLYUNSATURATED_FAT),
            (Nutrient::TransFat, DV_TRANS_FAT),
        ])
    }

    /// Build a table from explicit entries. Nutrients left out are untracked.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Nutrient, f64)>,
    {
        Self {
            values: entries.into_iter().collect(),
        }
    }

    /// Reference value for a nutrient, `None` when untracked
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values.get(&nutrient).copied()
    }
}
