//! Serving units
//!
//! A label declares its serving either by mass or by volume. The two are never
//! converted into each other.

/// Unit the labeled and consumed servings are measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingUnit {
    /// Grams (solids)
    Mass,
    /// Milliliters (liquids)
    Volume,
}

impl ServingUnit {
    /// Get the canonical unit string for this type
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            ServingUnit::Mass => "g",
            ServingUnit::Volume => "ml",
        }
    }

    /// Parse the token typed at the unit prompt.
    ///
    /// Only the exact canonical strings are accepted: no case folding, no
    /// surrounding whitespace, no spelled-out names.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "g" => Some(ServingUnit::Mass),
            "ml" => Some(ServingUnit::Volume),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_unit())
    }
}
