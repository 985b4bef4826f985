//! Tracked nutrients
//!
//! The eleven nutrients a label entry carries, in input order.

/// A nutrient tracked on the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nutrient {
    Energy,
    Protein,
    Carbohydrates,
    AddedSugars,
    DietaryFiber,
    TotalFat,
    SaturatedFat,
    MonounsaturatedFat,
    PolyunsaturatedFat,
    TransFat,
    Sodium,
}

impl Nutrient {
    /// All nutrients in the order they are entered and reported
    pub const ALL: [Nutrient; 11] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::AddedSugars,
        Nutrient::DietaryFiber,
        Nutrient::TotalFat,
        Nutrient::SaturatedFat,
        Nutrient::MonounsaturatedFat,
        Nutrient::PolyunsaturatedFat,
        Nutrient::TransFat,
        Nutrient::Sodium,
    ];

    /// Position on the label input line
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable report label
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Protein => "Protein",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::AddedSugars => "Added Sugars",
            Nutrient::DietaryFiber => "Dietary Fiber",
            Nutrient::TotalFat => "Total Fat",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::MonounsaturatedFat => "Monounsaturated Fat",
            Nutrient::PolyunsaturatedFat => "Polyunsaturated Fat",
            Nutrient::TransFat => "Trans Fat",
            Nutrient::Sodium => "Sodium",
        }
    }

    /// Unit the value is declared in
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }

    /// Mandatory nutrients have no default and must be on every label line.
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            Nutrient::Energy
                | Nutrient::Protein
                | Nutrient::Carbohydrates
                | Nutrient::TotalFat
                | Nutrient::SaturatedFat
                | Nutrient::Sodium
        )
    }
}
