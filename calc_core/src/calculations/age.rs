//! # Age Calculator
//!
//! Years, months and days elapsed from a date of birth to "today".
//!
//! Differences are taken field by field. A negative day count borrows the
//! length of the month before today's month; a negative month count
//! borrows twelve months from the years.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use calc_core::calculations::age::{calculate, AgeInput};
//!
//! let input = AgeInput { date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 20) };
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let age = calculate(&input, today);
//! assert_eq!((age.years, age.months, age.days), (Some(33), Some(9), Some(19)));
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};
use crate::numeric::PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeInput {
    /// `None` when the entered date is not a valid calendar date
    pub date_of_birth: Option<NaiveDate>,
}

/// All fields are `None` when the date of birth is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: Option<i32>,
    pub months: Option<i32>,
    pub days: Option<i32>,
}

/// Number of days in the calendar month preceding `date`'s month
fn days_in_previous_month(date: NaiveDate) -> i32 {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}

pub fn calculate(input: &AgeInput, today: NaiveDate) -> AgeResult {
    let Some(dob) = input.date_of_birth else {
        return AgeResult::default();
    };

    let mut years = today.year() - dob.year();
    let mut months = today.month() as i32 - dob.month() as i32;
    let mut days = today.day() as i32 - dob.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(today);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeResult {
        years: Some(years),
        months: Some(months),
        days: Some(days),
    }
}

pub static FIELDS: [FieldSpec; 1] = [FieldSpec::date("dob", "Date of birth", "2000-01-01")];

pub struct Age;

impl Calculator for Age {
    type Input = AgeInput;
    type Output = AgeResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> AgeInput {
        AgeInput {
            date_of_birth: form.date("dob"),
        }
    }

    fn compute(&self, input: &AgeInput, ctx: &EvalContext) -> AgeResult {
        calculate(input, ctx.today)
    }

    fn summarize(&self, output: &AgeResult, _decimals: usize) -> Vec<OutputLine> {
        let show = |v: Option<i32>| v.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string());
        vec![
            OutputLine::new("Years", show(output.years)),
            OutputLine::new("Months", show(output.months)),
            OutputLine::new("Days", show(output.days)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn age(dob: NaiveDate, today: NaiveDate) -> (i32, i32, i32) {
        let r = calculate(&AgeInput { date_of_birth: Some(dob) }, today);
        (r.years.unwrap(), r.months.unwrap(), r.days.unwrap())
    }

    #[test]
    fn test_birthday_today() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 6, 15)), (24, 0, 0));
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 6, 14)), (23, 11, 30));
    }

    #[test]
    fn test_borrows_from_previous_month() {
        // March 10th borrows February 2024 (29 days)
        assert_eq!(age(date(1990, 5, 20), date(2024, 3, 10)), (33, 9, 19));
        // January borrows December (31 days)
        assert_eq!(age(date(2010, 1, 20), date(2024, 1, 5)), (13, 11, 16));
    }

    #[test]
    fn test_invalid_date() {
        let r = calculate(&AgeInput { date_of_birth: None }, date(2024, 1, 1));
        assert_eq!(r, AgeResult::default());
        let lines = Age.summarize(&r, 2);
        assert!(lines.iter().all(|l| l.value == "-"));
    }
}
