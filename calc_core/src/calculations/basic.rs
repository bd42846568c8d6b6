//! # Basic Calculator
//!
//! Four-function arithmetic on two operands. Division by zero yields NaN,
//! which renders as `"-"`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::basic::{calculate, BasicInput, Operation};
//!
//! let result = calculate(&BasicInput { a: 6.0, b: 3.0, op: Operation::Divide });
//! assert_eq!(result.value, 2.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::errors::CalcError;
use crate::form::{resolve_alias, FieldSpec, Form};

/// Binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "−")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide if b == 0.0 => f64::NAN,
            Operation::Divide => a / b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// ASCII spellings of the operation symbols
pub const OPERATION_ALIASES: &[(&str, &str)] = &[("-", "−"), ("*", "×"), ("x", "×"), ("/", "÷")];

impl FromStr for Operation {
    type Err = CalcError;

    /// Accepts the display symbols plus their ASCII spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match resolve_alias(OPERATION_ALIASES, s.trim()) {
            "+" => Ok(Operation::Add),
            "−" => Ok(Operation::Subtract),
            "×" => Ok(Operation::Multiply),
            "÷" => Ok(Operation::Divide),
            other => Err(CalcError::invalid_input("op", other, "Expected one of + − × ÷")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicInput {
    pub a: f64,
    pub b: f64,
    pub op: Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicResult {
    pub value: f64,
}

pub fn calculate(input: &BasicInput) -> BasicResult {
    BasicResult {
        value: input.op.apply(input.a, input.b),
    }
}

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("a", "First number", "10"),
    FieldSpec::choice("op", "Operation", &["+", "−", "×", "÷"], "+").with_aliases(OPERATION_ALIASES),
    FieldSpec::number("b", "Second number", "5"),
];

pub struct Basic;

impl Calculator for Basic {
    type Input = BasicInput;
    type Output = BasicResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> BasicInput {
        BasicInput {
            a: form.number("a"),
            b: form.number("b"),
            op: form.parsed("op"),
        }
    }

    fn compute(&self, input: &BasicInput, _ctx: &EvalContext) -> BasicResult {
        calculate(input)
    }

    fn summarize(&self, output: &BasicResult, decimals: usize) -> Vec<OutputLine> {
        vec![OutputLine::number("Result", output.value, decimals)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: f64, op: Operation, b: f64) -> f64 {
        calculate(&BasicInput { a, b, op }).value
    }

    #[test]
    fn test_operations() {
        assert_eq!(run(6.0, Operation::Add, 3.0), 9.0);
        assert_eq!(run(6.0, Operation::Subtract, 3.0), 3.0);
        assert_eq!(run(6.0, Operation::Multiply, 3.0), 18.0);
        assert_eq!(run(6.0, Operation::Divide, 3.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(run(6.0, Operation::Divide, 0.0).is_nan());
        assert!(run(0.0, Operation::Divide, 0.0).is_nan());
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
        assert!("%".parse::<Operation>().is_err());
    }

    #[test]
    fn test_form_round() {
        let mut form = Form::new("basic", &FIELDS);
        form.set("a", "6").unwrap();
        form.set("op", "÷").unwrap();
        form.set("b", "0").unwrap();
        let ctx = EvalContext::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 2);
        let eval = Basic.evaluate(&form, &ctx);
        assert_eq!(eval.lines, vec![OutputLine::new("Result", "-")]);
    }
}
