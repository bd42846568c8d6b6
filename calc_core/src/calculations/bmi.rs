//! # BMI Calculator
//!
//! Body mass index from weight and height.
//!
//! - **Metric**: weight in kg, height in cm. `BMI = kg / m²`
//! - **Imperial**: weight in lb, height in inches. `BMI = 703 · lb / in²`
//!
//! A zero height gives no result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::errors::CalcError;
use crate::form::{resolve_alias, FieldSpec, Form};
use crate::numeric::PLACEHOLDER;

/// Unit system for weight and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// kg and cm
    #[default]
    Metric,
    /// lb and in
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => f.write_str("Metric"),
            UnitSystem::Imperial => f.write_str("Imperial"),
        }
    }
}

/// Other names for the unit systems
pub const UNIT_SYSTEM_ALIASES: &[(&str, &str)] = &[("si", "Metric"), ("us", "Imperial")];

impl FromStr for UnitSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match resolve_alias(UNIT_SYSTEM_ALIASES, s.trim()).to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(CalcError::invalid_input("units", other, "Expected Metric or Imperial")),
        }
    }
}

/// Weight-status band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band for a BMI value: <18.5, <25, <30, else obese
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight: f64,
    pub height: f64,
    pub unit_system: UnitSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: Option<f64>,
    pub category: Option<BmiCategory>,
}

pub fn calculate(input: &BmiInput) -> BmiResult {
    let bmi = match input.unit_system {
        UnitSystem::Metric => {
            let meters = input.height / 100.0;
            input.weight / (meters * meters)
        }
        UnitSystem::Imperial => input.weight / (input.height * input.height) * 703.0,
    };

    if !bmi.is_finite() {
        return BmiResult { bmi: None, category: None };
    }

    BmiResult {
        bmi: Some(bmi),
        category: Some(BmiCategory::from_bmi(bmi)),
    }
}

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::choice("units", "Units", &["Metric", "Imperial"], "Metric").with_aliases(UNIT_SYSTEM_ALIASES),
    FieldSpec::number("weight", "Weight (kg / lb)", "70"),
    FieldSpec::number("height", "Height (cm / in)", "170"),
];

pub struct Bmi;

impl Calculator for Bmi {
    type Input = BmiInput;
    type Output = BmiResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> BmiInput {
        BmiInput {
            weight: form.number("weight"),
            height: form.number("height"),
            unit_system: form.parsed("units"),
        }
    }

    fn compute(&self, input: &BmiInput, _ctx: &EvalContext) -> BmiResult {
        calculate(input)
    }

    fn summarize(&self, output: &BmiResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("BMI", output.bmi, decimals),
            OutputLine::new(
                "Status",
                output.category.map(|c| c.display_name()).unwrap_or(PLACEHOLDER),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_normal() {
        let r = calculate(&BmiInput { weight: 70.0, height: 170.0, unit_system: UnitSystem::Metric });
        let bmi = r.bmi.unwrap();
        assert!((bmi - 24.22).abs() < 0.01);
        assert_eq!(r.category, Some(BmiCategory::Normal));
    }

    #[test]
    fn test_imperial() {
        let r = calculate(&BmiInput { weight: 154.0, height: 67.0, unit_system: UnitSystem::Imperial });
        let bmi = r.bmi.unwrap();
        assert!((bmi - 24.12).abs() < 0.01);
    }

    #[test]
    fn test_bands() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_zero_height_has_no_result() {
        let r = calculate(&BmiInput { weight: 70.0, height: 0.0, unit_system: UnitSystem::Metric });
        assert_eq!(r.bmi, None);
        let lines = Bmi.summarize(&r, 2);
        assert_eq!(lines[0].value, "-");
        assert_eq!(lines[1].value, "-");
    }

    #[test]
    fn test_negative_height_follows_the_formula() {
        let r = calculate(&BmiInput { weight: 70.0, height: -170.0, unit_system: UnitSystem::Metric });
        assert!((r.bmi.unwrap() - 24.22).abs() < 0.01);
        assert_eq!(r.category, Some(BmiCategory::Normal));
    }
}
