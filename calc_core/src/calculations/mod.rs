//! # Calculators
//!
//! This module contains every calculator. Each one follows the pattern:
//!
//! - `*Input` - Typed input parameters (JSON-serializable)
//! - `*Result` - Derived outputs (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure formula, never fails
//! - `FIELDS` - The form fields the calculator is edited through
//!
//! Undefined results (division by zero, invalid dates, unknown units) are
//! carried as NaN or `None` and render as `"-"`.
//!
//! ## Available Calculators
//!
//! - [`basic`] - Four-function arithmetic
//! - [`percentage`], [`discount`], [`gst`] - Percent-based money math
//! - [`bmi`] - Body mass index
//! - [`age`], [`date_diff`] - Calendar math
//! - [`temperature`], [`conversion`] - Unit converters
//! - [`loan`], [`sip`], [`compound_interest`] - Loan and investment math
//! - [`fraction`], [`base_converter`] - Number representations

pub mod age;
pub mod base_converter;
pub mod basic;
pub mod bmi;
pub mod compound_interest;
pub mod conversion;
pub mod date_diff;
pub mod discount;
pub mod fraction;
pub mod gst;
pub mod loan;
pub mod percentage;
pub mod sip;
pub mod temperature;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, Form};
use crate::numeric::format_number;
use crate::units::UnitDomain;

// Re-export commonly used types
pub use basic::{BasicInput, BasicResult, Operation};
pub use bmi::{BmiCategory, BmiInput, BmiResult, UnitSystem};
pub use gst::{GstInput, GstResult, TaxMode};
pub use loan::{EmiInput, EmiResult, TenureUnit};

// ============================================================================
// Evaluation plumbing
// ============================================================================

/// Everything a calculator needs besides its own inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalContext {
    /// "Current" date for age math
    pub today: NaiveDate,
    /// Fractional digits shown in formatted outputs
    pub decimals: usize,
}

impl EvalContext {
    pub fn new(today: NaiveDate, decimals: usize) -> Self {
        Self { today, decimals }
    }
}

/// One formatted output row (e.g., "Monthly EMI" / "10,623.52").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub label: &'static str,
    pub value: String,
}

impl OutputLine {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }

    /// Row holding a number formatted with `decimals` fractional digits
    pub fn number(label: &'static str, value: impl Into<Option<f64>>, decimals: usize) -> Self {
        Self::new(label, format_number(value, decimals))
    }
}

/// Result of evaluating a calculator against its form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Formatted rows, in display order
    pub lines: Vec<OutputLine>,
    /// Typed input and output, for machine consumers
    pub detail: serde_json::Value,
}

/// Common shape of every calculator.
///
/// Implementors are stateless; the state lives in the [`Form`] passed in.
pub trait Calculator {
    type Input: Serialize;
    type Output: Serialize;

    /// Fields the calculator is edited through
    fn fields(&self) -> &'static [FieldSpec];

    /// Build the typed input from raw form text
    fn read_form(&self, form: &Form) -> Self::Input;

    /// Run the formula
    fn compute(&self, input: &Self::Input, ctx: &EvalContext) -> Self::Output;

    /// Format the outputs for display
    fn summarize(&self, output: &Self::Output, decimals: usize) -> Vec<OutputLine>;

    /// Read, compute and summarize in one step.
    fn evaluate(&self, form: &Form, ctx: &EvalContext) -> Evaluation {
        let input = self.read_form(form);
        let output = self.compute(&input, ctx);
        let detail = serde_json::json!({ "input": input, "output": output });
        Evaluation {
            lines: self.summarize(&output, ctx.decimals),
            detail,
        }
    }
}

// ============================================================================
// Calculator identifiers
// ============================================================================

/// Identifier of every calculator, in registry (display) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorId {
    Basic,
    Percentage,
    Discount,
    Gst,
    Bmi,
    Age,
    DateDiff,
    Temperature,
    Length,
    Weight,
    Time,
    Speed,
    Area,
    Emi,
    Sip,
    CompoundInterest,
    Fraction,
    BaseConverter,
}

impl CalculatorId {
    /// All calculators, in display order
    pub const ALL: [CalculatorId; 18] = [
        CalculatorId::Basic,
        CalculatorId::Percentage,
        CalculatorId::Discount,
        CalculatorId::Gst,
        CalculatorId::Bmi,
        CalculatorId::Age,
        CalculatorId::DateDiff,
        CalculatorId::Temperature,
        CalculatorId::Length,
        CalculatorId::Weight,
        CalculatorId::Time,
        CalculatorId::Speed,
        CalculatorId::Area,
        CalculatorId::Emi,
        CalculatorId::Sip,
        CalculatorId::CompoundInterest,
        CalculatorId::Fraction,
        CalculatorId::BaseConverter,
    ];

    /// Stable string id (matches the serde form)
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorId::Basic => "basic",
            CalculatorId::Percentage => "percentage",
            CalculatorId::Discount => "discount",
            CalculatorId::Gst => "gst",
            CalculatorId::Bmi => "bmi",
            CalculatorId::Age => "age",
            CalculatorId::DateDiff => "date-diff",
            CalculatorId::Temperature => "temperature",
            CalculatorId::Length => "length",
            CalculatorId::Weight => "weight",
            CalculatorId::Time => "time",
            CalculatorId::Speed => "speed",
            CalculatorId::Area => "area",
            CalculatorId::Emi => "emi",
            CalculatorId::Sip => "sip",
            CalculatorId::CompoundInterest => "compound-interest",
            CalculatorId::Fraction => "fraction",
            CalculatorId::BaseConverter => "base-converter",
        }
    }

    /// Position in [`CalculatorId::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Scalar unit domain for the converter calculators
    pub fn unit_domain(&self) -> Option<UnitDomain> {
        match self {
            CalculatorId::Length => Some(UnitDomain::Length),
            CalculatorId::Weight => Some(UnitDomain::Weight),
            CalculatorId::Time => Some(UnitDomain::Time),
            CalculatorId::Speed => Some(UnitDomain::Speed),
            CalculatorId::Area => Some(UnitDomain::Area),
            _ => None,
        }
    }

    /// Form fields of this calculator
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            CalculatorId::Basic => basic::Basic.fields(),
            CalculatorId::Percentage => percentage::Percentage.fields(),
            CalculatorId::Discount => discount::Discount.fields(),
            CalculatorId::Gst => gst::Gst.fields(),
            CalculatorId::Bmi => bmi::Bmi.fields(),
            CalculatorId::Age => age::Age.fields(),
            CalculatorId::DateDiff => date_diff::DateDiff.fields(),
            CalculatorId::Temperature => temperature::Temperature.fields(),
            CalculatorId::Length => conversion::fields_for(UnitDomain::Length),
            CalculatorId::Weight => conversion::fields_for(UnitDomain::Weight),
            CalculatorId::Time => conversion::fields_for(UnitDomain::Time),
            CalculatorId::Speed => conversion::fields_for(UnitDomain::Speed),
            CalculatorId::Area => conversion::fields_for(UnitDomain::Area),
            CalculatorId::Emi => loan::Emi.fields(),
            CalculatorId::Sip => sip::Sip.fields(),
            CalculatorId::CompoundInterest => compound_interest::CompoundInterest.fields(),
            CalculatorId::Fraction => fraction::Fraction.fields(),
            CalculatorId::BaseConverter => base_converter::BaseConverter.fields(),
        }
    }

    /// Fresh form holding this calculator's defaults
    pub fn new_form(&self) -> Form {
        Form::new(self.as_str(), self.fields())
    }

    /// Evaluate this calculator against `form`.
    pub fn evaluate(&self, form: &Form, ctx: &EvalContext) -> Evaluation {
        match self {
            CalculatorId::Basic => basic::Basic.evaluate(form, ctx),
            CalculatorId::Percentage => percentage::Percentage.evaluate(form, ctx),
            CalculatorId::Discount => discount::Discount.evaluate(form, ctx),
            CalculatorId::Gst => gst::Gst.evaluate(form, ctx),
            CalculatorId::Bmi => bmi::Bmi.evaluate(form, ctx),
            CalculatorId::Age => age::Age.evaluate(form, ctx),
            CalculatorId::DateDiff => date_diff::DateDiff.evaluate(form, ctx),
            CalculatorId::Temperature => temperature::Temperature.evaluate(form, ctx),
            CalculatorId::Length => conversion::Converter(UnitDomain::Length).evaluate(form, ctx),
            CalculatorId::Weight => conversion::Converter(UnitDomain::Weight).evaluate(form, ctx),
            CalculatorId::Time => conversion::Converter(UnitDomain::Time).evaluate(form, ctx),
            CalculatorId::Speed => conversion::Converter(UnitDomain::Speed).evaluate(form, ctx),
            CalculatorId::Area => conversion::Converter(UnitDomain::Area).evaluate(form, ctx),
            CalculatorId::Emi => loan::Emi.evaluate(form, ctx),
            CalculatorId::Sip => sip::Sip.evaluate(form, ctx),
            CalculatorId::CompoundInterest => compound_interest::CompoundInterest.evaluate(form, ctx),
            CalculatorId::Fraction => fraction::Fraction.evaluate(form, ctx),
            CalculatorId::BaseConverter => base_converter::BaseConverter.evaluate(form, ctx),
        }
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CalculatorId {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        CalculatorId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| CalcError::unknown_calculator(s))
    }
}
