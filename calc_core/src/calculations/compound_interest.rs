//! # Compound Interest Calculator
//!
//! `A = P · (1 + r/n)^(n·t)` with `n` compounding periods per year. `n` is
//! rounded to a whole number and never drops below one.

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};
use crate::numeric::clamp;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    pub principal: f64,
    pub rate_pct: f64,
    pub compounds_per_year: f64,
    pub years: f64,
}

impl CompoundInput {
    /// Compounding periods per year actually used
    pub fn periods(&self) -> f64 {
        clamp(self.compounds_per_year.round(), 1.0, f64::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundResult {
    pub amount: f64,
    pub interest: f64,
}

pub fn calculate(input: &CompoundInput) -> CompoundResult {
    let n = input.periods();
    let rate = input.rate_pct / 100.0;
    let amount = input.principal * (1.0 + rate / n).powf(n * input.years);
    CompoundResult {
        amount,
        interest: amount - input.principal,
    }
}

pub static FIELDS: [FieldSpec; 4] = [
    FieldSpec::number("principal", "Principal", "10000"),
    FieldSpec::number("rate", "Rate (% p.a.)", "8"),
    FieldSpec::number("compounds", "Compounds per year", "4"),
    FieldSpec::number("years", "Years", "5"),
];

pub struct CompoundInterest;

impl Calculator for CompoundInterest {
    type Input = CompoundInput;
    type Output = CompoundResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> CompoundInput {
        CompoundInput {
            principal: form.number("principal"),
            rate_pct: form.number("rate"),
            compounds_per_year: form.number("compounds"),
            years: form.number("years"),
        }
    }

    fn compute(&self, input: &CompoundInput, _ctx: &EvalContext) -> CompoundResult {
        calculate(input)
    }

    fn summarize(&self, output: &CompoundResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Maturity amount", output.amount, decimals),
            OutputLine::number("Interest earned", output.interest, decimals),
        ]
    }
}
