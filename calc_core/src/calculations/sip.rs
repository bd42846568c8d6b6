//! # SIP Calculator
//!
//! Future value of a fixed monthly contribution compounding monthly, with
//! contributions made at the start of each month (annuity due).
//!
//! ```text
//! i = annual_rate_pct / 12 / 100,  n = round(years · 12)
//! FV = M · ((1 + i)^n − 1) / i · (1 + i)
//! ```
//!
//! At `i = 0` the quotient is replaced by its limit, so `FV = M · n`.

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: f64,
    pub annual_rate_pct: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested: f64,
    pub gains: f64,
    pub future_value: f64,
}

pub fn calculate(input: &SipInput) -> SipResult {
    let i = input.annual_rate_pct / 12.0 / 100.0;
    let n = (input.years * 12.0).round();
    let invested = input.monthly_amount * n;

    let future_value = if i == 0.0 {
        invested
    } else {
        input.monthly_amount * ((1.0 + i).powf(n) - 1.0) / i * (1.0 + i)
    };

    SipResult {
        invested,
        gains: future_value - invested,
        future_value,
    }
}

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("monthly", "Monthly investment", "5000"),
    FieldSpec::number("rate", "Expected return (% p.a.)", "12"),
    FieldSpec::number("years", "Time period (years)", "10"),
];

pub struct Sip;

impl Calculator for Sip {
    type Input = SipInput;
    type Output = SipResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> SipInput {
        SipInput {
            monthly_amount: form.number("monthly"),
            annual_rate_pct: form.number("rate"),
            years: form.number("years"),
        }
    }

    fn compute(&self, input: &SipInput, _ctx: &EvalContext) -> SipResult {
        calculate(input)
    }

    fn summarize(&self, output: &SipResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Invested amount", output.invested, decimals),
            OutputLine::number("Estimated returns", output.gains, decimals),
            OutputLine::number("Total value", output.future_value, decimals),
        ]
    }
}
