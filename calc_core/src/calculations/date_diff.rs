//! # Date Difference Calculator
//!
//! Whole days between two calendar dates (order does not matter), and the
//! same span in weeks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateDiffInput {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DateDiffResult {
    pub days: Option<i64>,
    pub weeks: Option<f64>,
}

pub fn calculate(input: &DateDiffInput) -> DateDiffResult {
    match (input.from, input.to) {
        (Some(from), Some(to)) => {
            let days = (to - from).num_days().abs();
            DateDiffResult {
                days: Some(days),
                weeks: Some(days as f64 / 7.0),
            }
        }
        _ => DateDiffResult::default(),
    }
}

pub static FIELDS: [FieldSpec; 2] = [
    FieldSpec::date("from", "From date", "2024-01-01"),
    FieldSpec::date("to", "To date", "2024-12-31"),
];

pub struct DateDiff;

impl Calculator for DateDiff {
    type Input = DateDiffInput;
    type Output = DateDiffResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> DateDiffInput {
        DateDiffInput {
            from: form.date("from"),
            to: form.date("to"),
        }
    }

    fn compute(&self, input: &DateDiffInput, _ctx: &EvalContext) -> DateDiffResult {
        calculate(input)
    }

    fn summarize(&self, output: &DateDiffResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Days", output.days.map(|d| d as f64), 0),
            OutputLine::number("Weeks", output.weeks, decimals),
        ]
    }
}
