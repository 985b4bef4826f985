//! Report generation
//!
//! Turns scaled nutrition into the lines printed after the last prompt.

use std::fmt;
use std::io::{self, Write};

use crate::models::{Nutrient, NutritionFacts, ScaledNutrition, ScaledValue};
use crate::nutrition::{daily_value_percent, DailyValuePercent, ReferenceDailyValues};

/// One nutrient line of the report
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub nutrient: Nutrient,
    pub value: ScaledValue,
    pub percent: DailyValuePercent,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.nutrient.label(),
            self.value,
            self.nutrient.unit(),
            self.percent
        )
    }
}

/// Lines to print, in input order.
///
/// Optional nutrients whose label value was zero are left out.
pub fn report_lines(
    facts: &NutritionFacts,
    scaled: &ScaledNutrition,
    table: &ReferenceDailyValues,
) -> Vec<ReportLine> {
    Nutrient::ALL
        .into_iter()
        .filter(|n| facts.is_reported(*n))
        .map(|nutrient| {
            let value = scaled.value(nutrient);
            ReportLine {
                nutrient,
                value,
                percent: daily_value_percent(table, nutrient, value),
            }
        })
        .collect()
}

/// Header naming the consumed amount
pub fn header(scaled: &ScaledNutrition) -> String {
    format!(
        "Nutrition values for a serving of {:.2} {}:",
        scaled.consumed, scaled.unit
    )
}

/// Write the full report, preceded by a blank line
pub fn write_report<W: Write>(
    out: &mut W,
    facts: &NutritionFacts,
    scaled: &ScaledNutrition,
    table: &ReferenceDailyValues,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", header(scaled))?;
    for line in report_lines(facts, scaled, table) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;
    use crate::nutrition::{scale_nutrition, ServingUnit};

    fn sample_facts() -> NutritionFacts {
        NutritionFacts::new(
            Nutrition {
                energy: 250.0,
                protein: 5.0,
                carbohydrates: 30.0,
                added_sugars: 10.0,
                total_fat: 9.0,
                saturated_fat: 3.0,
                sodium: 150.0,
                ..Nutrition::zero()
            },
            50.0,
            ServingUnit::Mass,
        )
    }

    #[test]
    fn test_report_lines_skip_zero_optionals() {
        let facts = sample_facts();
        let scaled = scale_nutrition(&facts, 100.0);
        let lines = report_lines(&facts, &scaled, &ReferenceDailyValues::standard());
        let nutrients: Vec<Nutrient> = lines.iter().map(|l| l.nutrient).collect();
        assert_eq!(
            nutrients,
            vec![
                Nutrient::Energy,
                Nutrient::Protein,
                Nutrient::Carbohydrates,
                Nutrient::AddedSugars,
                Nutrient::TotalFat,
                Nutrient::SaturatedFat,
                Nutrient::Sodium,
            ]
        );
    }

    #[test]
    fn test_write_report() {
        let facts = sample_facts();
        let scaled = scale_nutrition(&facts, 100.0);
        let mut out = Vec::new();
        write_report(&mut out, &facts, &scaled, &ReferenceDailyValues::standard()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\n\
            Nutrition values for a serving of 100.00 g:\n\
            Energy: 500.00 kcal (22.42%)\n\
            Protein: 10.00 g (18.18%)\n\
            Carbohydrates: 60.00 g (18.18%)\n\
            Added Sugars: 20.00 g (66.67%)\n\
            Total Fat: 18.00 g (24.32%)\n\
            Saturated Fat: 6.00 g (27.27%)\n\
            Sodium: 300.00 mg (15.00%)\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_untracked_nutrient_shows_not_applicable() {
        let facts = sample_facts();
        let scaled = scale_nutrition(&facts, 50.0);
        let table = ReferenceDailyValues::from_entries([(Nutrient::Energy, 2000.0)]);
        let lines = report_lines(&facts, &scaled, &table);
        assert_eq!(lines[0].to_string(), "Energy: 250.00 kcal (12.50%)");
        assert_eq!(lines[1].to_string(), "Protein: 5.00 g (N/A)");
    }

    #[test]
    fn test_header_volume() {
        let facts = NutritionFacts::new(Nutrition::zero(), 250.0, ServingUnit::Volume);
        let scaled = scale_nutrition(&facts, 330.0);
        assert_eq!(header(&scaled), "Nutrition values for a serving of 330.00 ml:");
    }
}
