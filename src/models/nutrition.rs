//! Shared nutrition data structure
//!
//! Holds one value per tracked nutrient, either per labeled serving or scaled
//! to a consumed quantity.

use super::Nutrient;

/// Nutritional information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nutrition {
    pub energy: f64,              // kcal
    pub protein: f64,             // grams
    pub carbohydrates: f64,       // grams
    pub added_sugars: f64,        // grams
    pub dietary_fiber: f64,       // grams
    pub total_fat: f64,           // grams
    pub saturated_fat: f64,       // grams
    pub monounsaturated_fat: f64, // grams
    pub polyunsaturated_fat: f64, // grams
    pub trans_fat: f64,           // grams
    pub sodium: f64,              // milligrams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Value for one nutrient
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::AddedSugars => self.added_sugars,
            Nutrient::DietaryFiber => self.dietary_fiber,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::MonounsaturatedFat => self.monounsaturated_fat,
            Nutrient::PolyunsaturatedFat => self.polyunsaturated_fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::Sodium => self.sodium,
        }
    }

    fn slot(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Energy => &mut self.energy,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbohydrates => &mut self.carbohydrates,
            Nutrient::AddedSugars => &mut self.added_sugars,
            Nutrient::DietaryFiber => &mut self.dietary_fiber,
            Nutrient::TotalFat => &mut self.total_fat,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::MonounsaturatedFat => &mut self.monounsaturated_fat,
            Nutrient::PolyunsaturatedFat => &mut self.polyunsaturated_fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::Sodium => &mut self.sodium,
        }
    }

    /// Build from a per-nutrient function, visiting nutrients in input order
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Nutrient) -> f64,
    {
        let mut nutrition = Self::zero();
        for nutrient in Nutrient::ALL {
            *nutrition.slot(nutrient) = f(nutrient);
        }
        nutrition
    }

    /// Apply `f` to every value
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::from_fn(|n| f(self.get(n)))
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        self.map(|v| v * multiplier)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}
