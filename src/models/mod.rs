//! Data models
//!
//! Label facts as entered and the values derived from them.

mod nutrient;
mod nutrition;
mod nutrition_facts;
mod scaled;

pub use nutrient::Nutrient;
pub use nutrition::Nutrition;
pub use nutrition_facts::NutritionFacts;
pub use scaled::{ScaledNutrition, ScaledValue};
