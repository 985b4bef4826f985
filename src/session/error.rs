//! Session error types

use thiserror::Error;

use crate::models::Nutrient;

/// Validation failures while collecting label facts.
///
/// Every variant sends the collector back to the nutrition prompt. The
/// messages are shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input: essential values like energy, protein, carbohydrates, total fat, saturated fat, and sodium are required.")]
    MissingMandatory { missing: Vec<Nutrient> },

    #[error("Invalid unit. Please enter \"g\" for solid or \"ml\" for liquid.")]
    InvalidUnit(String),

    #[error("Invalid serving size. Please enter a valid number.")]
    InvalidServingSize(String),
}

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid serving size. Please enter a valid number.")]
    InvalidConsumedServingSize(String),

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
