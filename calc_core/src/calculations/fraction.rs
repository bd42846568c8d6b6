//! # Fraction to Decimal

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionInput {
    pub numerator: f64,
    pub denominator: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionResult {
    /// NaN when the denominator is zero
    pub decimal: f64,
    pub percent: f64,
}

pub fn calculate(input: &FractionInput) -> FractionResult {
    let decimal = if input.denominator == 0.0 {
        f64::NAN
    } else {
        input.numerator / input.denominator
    };
    FractionResult {
        decimal,
        percent: decimal * 100.0,
    }
}

pub static FIELDS: [FieldSpec; 2] = [
    FieldSpec::number("numerator", "Numerator", "3"),
    FieldSpec::number("denominator", "Denominator", "8"),
];

pub struct Fraction;

impl Calculator for Fraction {
    type Input = FractionInput;
    type Output = FractionResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> FractionInput {
        FractionInput {
            numerator: form.number("numerator"),
            denominator: form.number("denominator"),
        }
    }

    fn compute(&self, input: &FractionInput, _ctx: &EvalContext) -> FractionResult {
        calculate(input)
    }

    fn summarize(&self, output: &FractionResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Decimal", output.decimal, decimals.max(6)),
            OutputLine::number("Percent", output.percent, decimals),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_eighths() {
        let r = calculate(&FractionInput { numerator: 3.0, denominator: 8.0 });
        assert_eq!(r.decimal, 0.375);
        assert_eq!(r.percent, 37.5);
    }

    #[test]
    fn test_zero_denominator() {
        let r = calculate(&FractionInput { numerator: 0.0, denominator: 0.0 });
        assert!(r.decimal.is_nan());
        let lines = Fraction.summarize(&r, 2);
        assert_eq!(lines[0].value, "-");
        assert_eq!(lines[1].value, "-");
    }

    #[test]
    fn test_repeating_decimal_display() {
        let r = calculate(&FractionInput { numerator: 1.0, denominator: 3.0 });
        assert_eq!(Fraction.summarize(&r, 2)[0].value, "0.333333");
    }
}
