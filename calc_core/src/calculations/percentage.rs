//! # Percentage Calculator
//!
//! Applies a percentage to a base value: the increase, the increased
//! total, and the mirror-image decrease.

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageInput {
    pub base: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    /// base · pct / 100
    pub increase: f64,
    /// base + increase
    pub total: f64,
    /// base − increase
    pub decreased_total: f64,
}

pub fn calculate(input: &PercentageInput) -> PercentageResult {
    let increase = input.base * input.percent / 100.0;
    PercentageResult {
        increase,
        total: input.base + increase,
        decreased_total: input.base - increase,
    }
}

pub static FIELDS: [FieldSpec; 2] = [
    FieldSpec::number("base", "Value", "100"),
    FieldSpec::number("percent", "Percent (%)", "10"),
];

pub struct Percentage;

impl Calculator for Percentage {
    type Input = PercentageInput;
    type Output = PercentageResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> PercentageInput {
        PercentageInput {
            base: form.number("base"),
            percent: form.number("percent"),
        }
    }

    fn compute(&self, input: &PercentageInput, _ctx: &EvalContext) -> PercentageResult {
        calculate(input)
    }

    fn summarize(&self, output: &PercentageResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Percent of value", output.increase, decimals),
            OutputLine::number("Value + percent", output.total, decimals),
            OutputLine::number("Value − percent", output.decreased_total, decimals),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_percent_of_hundred() {
        let r = calculate(&PercentageInput { base: 100.0, percent: 10.0 });
        assert_eq!(r.increase, 10.0);
        assert_eq!(r.total, 110.0);
        assert_eq!(r.decreased_total, 90.0);
    }

    #[test]
    fn test_negative_percent() {
        let r = calculate(&PercentageInput { base: 200.0, percent: -25.0 });
        assert_eq!(r.increase, -50.0);
        assert_eq!(r.total, 150.0);
    }
}
