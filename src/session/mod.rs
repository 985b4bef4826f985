//! Interactive calculator session
//!
//! Drives the prompt sequence over any line-based reader and writer:
//!
//! ```text
//! nutrition line -> unit -> labeled serving -> consumed serving -> report
//! ```
//!
//! A failure in any of the first three steps restarts from the nutrition line.
//! A bad consumed serving ends the session without a report.

pub mod collector;
pub mod error;
pub mod report;

use std::io::{BufRead, Write};

pub use collector::{parse_nutrition_line, parse_serving_size, parse_unit};
pub use error::{InputError, SessionError, SessionResult};
pub use report::{report_lines, write_report, ReportLine};

use crate::models::{NutritionFacts, ScaledNutrition};
use crate::nutrition::{scale_nutrition, ReferenceDailyValues, ServingUnit};

pub const NUTRITION_PROMPT: &str = "Enter the nutritional information in the format: \"energy protein carbohydrates added_sugars dietary_fiber total_fat saturated_fat monounsaturated_fat polyunsaturated_fat trans_fat sodium\" (you can skip optional values with space or leave them blank): ";

pub const UNIT_PROMPT: &str =
    "Is this product solid (grams) or liquid (milliliters)? (Enter \"g\" for solid or \"ml\" for liquid): ";

fn labeled_serving_prompt(unit: ServingUnit) -> String {
    format!("Enter the serving size in {}: ", unit)
}

fn consumed_serving_prompt(unit: ServingUnit) -> String {
    format!("Enter the serving size you consumed (in {}): ", unit)
}

/// One run of the calculator.
///
/// `output` carries prompts and the report, `errors` carries validation
/// messages.
pub struct Session<'a, R, W, E> {
    input: R,
    output: W,
    errors: E,
    reference: &'a ReferenceDailyValues,
}

impl<'a, R, W, E> Session<'a, R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(input: R, output: W, errors: E, reference: &'a ReferenceDailyValues) -> Self {
        Self {
            input,
            output,
            errors,
            reference,
        }
    }

    /// Ask one question and return the answer without its line terminator
    fn prompt(&mut self, question: &str) -> SessionResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn report_invalid(&mut self, err: &InputError) -> SessionResult<()> {
        writeln!(self.errors, "{}", err)?;
        self.errors.flush()?;
        Ok(())
    }

    /// One pass through nutrition line, unit and labeled serving
    fn try_collect(&mut self) -> SessionResult<Result<NutritionFacts, InputError>> {
        let line = self.prompt(NUTRITION_PROMPT)?;
        let nutrition = match parse_nutrition_line(&line) {
            Ok(n) => n,
            Err(e) => return Ok(Err(e)),
        };

        let answer = self.prompt(UNIT_PROMPT)?;
        let unit = match parse_unit(&answer) {
            Ok(u) => u,
            Err(e) => return Ok(Err(e)),
        };

        let answer = self.prompt(&labeled_serving_prompt(unit))?;
        let serving_size = match parse_serving_size(&answer) {
            Ok(s) => s,
            Err(e) => return Ok(Err(e)),
        };

        Ok(Ok(NutritionFacts::new(nutrition, serving_size, unit)))
    }

    /// Collect label facts, starting over from the nutrition line after any
    /// validation failure. Never gives up on its own.
    pub fn collect_facts(&mut self) -> SessionResult<NutritionFacts> {
        loop {
            match self.try_collect()? {
                Ok(facts) => {
                    tracing::debug!(
                        serving_size = facts.serving_size,
                        unit = %facts.unit,
                        "label facts accepted"
                    );
                    return Ok(facts);
                }
                Err(err) => {
                    match &err {
                        InputError::MissingMandatory { missing } => tracing::debug!(
                            missing = %collector::describe_missing(missing),
                            "nutrition line rejected"
                        ),
                        InputError::InvalidUnit(answer) => {
                            tracing::debug!(%answer, "unit rejected")
                        }
                        InputError::InvalidServingSize(answer) => {
                            tracing::debug!(%answer, "labeled serving size rejected")
                        }
                    }
                    self.report_invalid(&err)?;
                }
            }
        }
    }

    /// Ask for the consumed amount. Invalid input ends the session.
    pub fn read_consumed(&mut self, unit: ServingUnit) -> SessionResult<f64> {
        let answer = self.prompt(&consumed_serving_prompt(unit))?;
        match parse_serving_size(&answer) {
            Ok(consumed) => Ok(consumed),
            Err(err) => {
                tracing::debug!(%answer, "consumed serving size rejected");
                self.report_invalid(&err)?;
                Err(SessionError::InvalidConsumedServingSize(answer))
            }
        }
    }

    /// Run the whole conversation and print the report
    pub fn run(mut self) -> SessionResult<ScaledNutrition> {
        let facts = self.collect_facts()?;
        let consumed = self.read_consumed(facts.unit)?;

        let scaled = scale_nutrition(&facts, consumed);
        write_report(&mut self.output, &facts, &scaled, self.reference)?;
        tracing::debug!(factor = scaled.scaling_factor, "report written");

        Ok(scaled)
    }
}
