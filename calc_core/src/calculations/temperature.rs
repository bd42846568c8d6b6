//! # Temperature Converter
//!
//! Celsius, Fahrenheit and Kelvin, converted through Celsius. Scale ids
//! are kept as text so an unknown scale yields NaN rather than an error.

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};
use crate::units::convert_temperature;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInput {
    pub value: f64,
    /// "C", "F" or "K"
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResult {
    pub value: f64,
}

pub fn calculate(input: &TemperatureInput) -> TemperatureResult {
    TemperatureResult {
        value: convert_temperature(input.value, &input.from, &input.to),
    }
}

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("value", "Value", "100"),
    FieldSpec::choice("from", "From", &["C", "F", "K"], "C"),
    FieldSpec::choice("to", "To", &["C", "F", "K"], "F"),
];

pub struct Temperature;

impl Calculator for Temperature {
    type Input = TemperatureInput;
    type Output = TemperatureResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> TemperatureInput {
        TemperatureInput {
            value: form.number("value"),
            from: form.get("from").to_string(),
            to: form.get("to").to_string(),
        }
    }

    fn compute(&self, input: &TemperatureInput, _ctx: &EvalContext) -> TemperatureResult {
        calculate(input)
    }

    fn summarize(&self, output: &TemperatureResult, decimals: usize) -> Vec<OutputLine> {
        vec![OutputLine::number("Result", output.value, decimals)]
    }
}
