//! # Unit Converters
//!
//! Length, weight, time, speed and area converters. They share one
//! implementation, [`Converter`], parameterized by [`UnitDomain`]; each
//! domain only differs in its unit options.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::conversion::{calculate, ConversionInput};
//! use calc_core::units::UnitDomain;
//!
//! let input = ConversionInput {
//!     domain: UnitDomain::Time,
//!     value: 2.0,
//!     from: "hr".into(),
//!     to: "min".into(),
//! };
//! assert_eq!(calculate(&input).value, 120.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};
use crate::units::{convert, UnitDomain};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub domain: UnitDomain,
    pub value: f64,
    /// Unit ids from the domain's table
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// NaN when either unit id is unknown
    pub value: f64,
}

pub fn calculate(input: &ConversionInput) -> ConversionResult {
    ConversionResult {
        value: convert(input.domain, input.value, &input.from, &input.to),
    }
}

const LENGTH: &[&str] = &["mm", "cm", "m", "km", "in", "ft"];
const WEIGHT: &[&str] = &["g", "kg", "lb"];
const TIME: &[&str] = &["sec", "min", "hr", "day"];
const SPEED: &[&str] = &["m/s", "km/h", "mph"];
const AREA: &[&str] = &["sqm", "sqft"];

pub static LENGTH_FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("value", "Value", "1"),
    FieldSpec::choice("from", "From", LENGTH, "m"),
    FieldSpec::choice("to", "To", LENGTH, "ft"),
];

pub static WEIGHT_FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("value", "Value", "1"),
    FieldSpec::choice("from", "From", WEIGHT, "kg"),
    FieldSpec::choice("to", "To", WEIGHT, "lb"),
];

pub static TIME_FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("value", "Value", "1"),
    FieldSpec::choice("from", "From", TIME, "hr"),
    FieldSpec::choice("to", "To", TIME, "min"),
];

pub static SPEED_FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("value", "Value", "100"),
    FieldSpec::choice("from", "From", SPEED, "km/h"),
    FieldSpec::choice("to", "To", SPEED, "mph"),
];

pub static AREA_FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("value", "Value", "1"),
    FieldSpec::choice("from", "From", AREA, "sqm"),
    FieldSpec::choice("to", "To", AREA, "sqft"),
];

/// Form fields of the converter for `domain`
pub fn fields_for(domain: UnitDomain) -> &'static [FieldSpec] {
    match domain {
        UnitDomain::Length => &LENGTH_FIELDS,
        UnitDomain::Weight => &WEIGHT_FIELDS,
        UnitDomain::Time => &TIME_FIELDS,
        UnitDomain::Speed => &SPEED_FIELDS,
        UnitDomain::Area => &AREA_FIELDS,
    }
}

pub struct Converter(pub UnitDomain);

impl Calculator for Converter {
    type Input = ConversionInput;
    type Output = ConversionResult;

    fn fields(&self) -> &'static [FieldSpec] {
        fields_for(self.0)
    }

    fn read_form(&self, form: &Form) -> ConversionInput {
        ConversionInput {
            domain: self.0,
            value: form.number("value"),
            from: form.get("from").to_string(),
            to: form.get("to").to_string(),
        }
    }

    fn compute(&self, input: &ConversionInput, _ctx: &EvalContext) -> ConversionResult {
        calculate(input)
    }

    fn summarize(&self, output: &ConversionResult, decimals: usize) -> Vec<OutputLine> {
        vec![OutputLine::number("Result", output.value, decimals.max(4))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_match_unit_tables() {
        for domain in UnitDomain::ALL {
            let fields = fields_for(domain);
            assert_eq!(fields[1].options(), domain.unit_ids().as_slice());
            assert_eq!(fields[2].options(), domain.unit_ids().as_slice());
        }
    }

    #[test]
    fn test_meter_to_feet_summary() {
        let form = Form::new("length", &LENGTH_FIELDS);
        let ctx = EvalContext::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 2);
        let eval = Converter(UnitDomain::Length).evaluate(&form, &ctx);
        assert_eq!(eval.lines[0].value, "3.2808");
    }

    #[test]
    fn test_unknown_unit_is_nan() {
        let input = ConversionInput {
            domain: UnitDomain::Speed,
            value: 1.0,
            from: "knot".into(),
            to: "m/s".into(),
        };
        assert!(calculate(&input).value.is_nan());
    }
}
