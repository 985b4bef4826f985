//! Nutrition calculation module
//!
//! Scaling to a consumed amount and percentages of the daily reference.

pub mod daily_values;
pub mod percentage;
pub mod scaler;
pub mod units;

pub use daily_values::ReferenceDailyValues;
pub use percentage::{calculate_percentage, daily_value_percent, DailyValuePercent};
pub use scaler::{round2, scale_nutrition, scaling_factor};
pub use units::ServingUnit;
