//! # Loan EMI Calculator
//!
//! Equated monthly installment for an amortizing loan.
//!
//! ## Formula
//!
//! ```text
//! n = round(tenure · 12)   (tenure in years)   or round(tenure) (months)
//! r = annual_rate_pct / 12 / 100
//! EMI = P · r · (1 + r)^n / ((1 + r)^n − 1)      r ≠ 0
//! EMI = P / n                                    r = 0
//! total = EMI · n,  interest = total − P
//! ```
//!
//! A tenure that rounds to zero months or fewer has no result.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::loan::{calculate, EmiInput, TenureUnit};
//!
//! let result = calculate(&EmiInput {
//!     principal: 500_000.0,
//!     annual_rate_pct: 10.0,
//!     tenure: 5.0,
//!     tenure_unit: TenureUnit::Years,
//! });
//! assert_eq!(result.months, Some(60));
//! assert!((result.emi.unwrap() - 10_623.52).abs() < 0.01);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::errors::CalcError;
use crate::form::{resolve_alias, FieldSpec, Form};

/// Unit the loan tenure is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TenureUnit {
    #[default]
    Years,
    Months,
}

impl fmt::Display for TenureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenureUnit::Years => f.write_str("Years"),
            TenureUnit::Months => f.write_str("Months"),
        }
    }
}

/// Short spellings of the tenure units
pub const TENURE_UNIT_ALIASES: &[(&str, &str)] =
    &[("year", "Years"), ("y", "Years"), ("month", "Months"), ("m", "Months")];

impl FromStr for TenureUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match resolve_alias(TENURE_UNIT_ALIASES, s.trim()).to_ascii_lowercase().as_str() {
            "years" => Ok(TenureUnit::Years),
            "months" => Ok(TenureUnit::Months),
            other => Err(CalcError::invalid_input("tenure_unit", other, "Expected Years or Months")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub tenure: f64,
    pub tenure_unit: TenureUnit,
}

impl EmiInput {
    /// Tenure in whole months (rounded to nearest)
    pub fn months(&self) -> f64 {
        match self.tenure_unit {
            TenureUnit::Years => (self.tenure * 12.0).round(),
            TenureUnit::Months => self.tenure.round(),
        }
    }
}

/// All fields are `None` when the tenure is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmiResult {
    pub months: Option<u32>,
    pub emi: Option<f64>,
    pub total_payment: Option<f64>,
    pub total_interest: Option<f64>,
}

pub fn calculate(input: &EmiInput) -> EmiResult {
    let months = input.months();
    if months.is_nan() || months <= 0.0 {
        return EmiResult::default();
    }

    let monthly_rate = input.annual_rate_pct / 12.0 / 100.0;
    let emi = if monthly_rate == 0.0 {
        input.principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        input.principal * monthly_rate * growth / (growth - 1.0)
    };
    let total = emi * months;

    EmiResult {
        months: Some(months.min(u32::MAX as f64) as u32),
        emi: Some(emi),
        total_payment: Some(total),
        total_interest: Some(total - input.principal),
    }
}

pub static FIELDS: [FieldSpec; 4] = [
    FieldSpec::number("principal", "Loan amount", "500000"),
    FieldSpec::number("rate", "Interest rate (% p.a.)", "10"),
    FieldSpec::number("tenure", "Tenure", "5"),
    FieldSpec::choice("tenure_unit", "Tenure in", &["Years", "Months"], "Years").with_aliases(TENURE_UNIT_ALIASES),
];

pub struct Emi;

impl Calculator for Emi {
    type Input = EmiInput;
    type Output = EmiResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> EmiInput {
        EmiInput {
            principal: form.number("principal"),
            annual_rate_pct: form.number("rate"),
            tenure: form.number("tenure"),
            tenure_unit: form.parsed("tenure_unit"),
        }
    }

    fn compute(&self, input: &EmiInput, _ctx: &EvalContext) -> EmiResult {
        calculate(input)
    }

    fn summarize(&self, output: &EmiResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Monthly EMI", output.emi, decimals),
            OutputLine::number("Total interest", output.total_interest, decimals),
            OutputLine::number("Total payment", output.total_payment, decimals),
            OutputLine::number("Months", output.months.map(f64::from), 0),
        ]
    }
}
