//! # Error Types
//!
//! Structured error types for calc_core. Formulas themselves never fail:
//! they degrade to NaN or `None` and the display layer shows `"-"`. The
//! strict entry points (unit lookup, date parsing, digit parsing, form
//! editing) report *why* an input was rejected through [`CalcError`], so
//! hosts such as the CLI can explain the problem.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_decimals(decimals: usize) -> CalcResult<()> {
//!     if decimals > 10 {
//!         return Err(CalcError::invalid_input(
//!             "decimals",
//!             decimals.to_string(),
//!             "At most 10 fractional digits are supported",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unit id not present in the conversion table of a domain
    #[error("Unknown {domain} unit: '{unit}'")]
    UnknownUnit { domain: String, unit: String },

    /// Calculator id not present in the registry
    #[error("Unknown calculator: '{id}'")]
    UnknownCalculator { id: String },

    /// Field key not declared by a calculator
    #[error("Calculator '{calculator}' has no field '{field}'")]
    UnknownField { calculator: String, field: String },

    /// Text that is not a calendar date (YYYY-MM-DD)
    #[error("Invalid date: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    /// Digit string that cannot be read in the requested base
    #[error("'{value}' is not a base-{base} integer")]
    InvalidDigits { value: String, base: u32 },

    /// Numeral base outside the supported set
    #[error("Unsupported base: {base}")]
    UnsupportedBase { base: u32 },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(domain: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            domain: domain.into(),
            unit: unit.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { id: id.into() }
    }

    /// Create an UnknownField error
    pub fn unknown_field(calculator: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            calculator: calculator.into(),
            field: field.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        CalcError::InvalidDate { value: value.into() }
    }

    /// Create an InvalidDigits error
    pub fn invalid_digits(value: impl Into<String>, base: u32) -> Self {
        CalcError::InvalidDigits {
            value: value.into(),
            base,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::InvalidDate { .. } => "INVALID_DATE",
            CalcError::InvalidDigits { .. } => "INVALID_DIGITS",
            CalcError::UnsupportedBase { .. } => "UNSUPPORTED_BASE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
