//! # Discount Calculator
//!
//! Price after a percentage discount off the list price (MRP).

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::form::{FieldSpec, Form};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountInput {
    /// List price
    pub mrp: f64,
    /// Discount in percent
    pub off_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    pub discount: f64,
    pub pay: f64,
}

pub fn calculate(input: &DiscountInput) -> DiscountResult {
    let discount = input.mrp * input.off_pct / 100.0;
    DiscountResult {
        discount,
        pay: input.mrp - discount,
    }
}

pub static FIELDS: [FieldSpec; 2] = [
    FieldSpec::number("mrp", "Price (MRP)", "1000"),
    FieldSpec::number("off", "Discount (%)", "20"),
];

pub struct Discount;

impl Calculator for Discount {
    type Input = DiscountInput;
    type Output = DiscountResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> DiscountInput {
        DiscountInput {
            mrp: form.number("mrp"),
            off_pct: form.number("off"),
        }
    }

    fn compute(&self, input: &DiscountInput, _ctx: &EvalContext) -> DiscountResult {
        calculate(input)
    }

    fn summarize(&self, output: &DiscountResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("You save", output.discount, decimals),
            OutputLine::number("You pay", output.pay, decimals),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount() {
        let r = calculate(&DiscountInput { mrp: 1999.0, off_pct: 25.0 });
        assert_eq!(r.discount, 499.75);
        assert_eq!(r.pay, 1499.25);
    }

    #[test]
    fn test_zero_discount() {
        let r = calculate(&DiscountInput { mrp: 80.0, off_pct: 0.0 });
        assert_eq!(r.discount, 0.0);
        assert_eq!(r.pay, 80.0);
    }
}
