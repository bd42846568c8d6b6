//! # GST / VAT Calculator
//!
//! Consumption tax applied two ways:
//!
//! - **Add**: `amount` excludes tax. `tax = amount · rate`, `total = amount + tax`
//! - **Remove**: `amount` includes tax. `base = amount / (1 + rate)`,
//!   `tax = amount − base`, `total = base`
//!
//! where `rate = rate_pct / 100`. Removing tax from an added total recovers
//! the original amount.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::gst::{calculate, GstInput, TaxMode};
//!
//! let added = calculate(&GstInput { amount: 1000.0, rate_pct: 18.0, mode: TaxMode::Add });
//! assert_eq!(added.total, 1180.0);
//!
//! let removed = calculate(&GstInput { amount: added.total, rate_pct: 18.0, mode: TaxMode::Remove });
//! assert!((removed.total - 1000.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::errors::CalcError;
use crate::form::{resolve_alias, FieldSpec, Form};

/// Whether tax is added to, or extracted from, the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaxMode {
    #[default]
    Add,
    Remove,
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxMode::Add => f.write_str("Add"),
            TaxMode::Remove => f.write_str("Remove"),
        }
    }
}

/// Amount-relative names for the tax modes
pub const TAX_MODE_ALIASES: &[(&str, &str)] = &[("exclusive", "Add"), ("inclusive", "Remove")];

impl FromStr for TaxMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match resolve_alias(TAX_MODE_ALIASES, s.trim()).to_ascii_lowercase().as_str() {
            "add" => Ok(TaxMode::Add),
            "remove" => Ok(TaxMode::Remove),
            other => Err(CalcError::invalid_input("mode", other, "Expected Add or Remove")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstInput {
    pub amount: f64,
    pub rate_pct: f64,
    pub mode: TaxMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstResult {
    /// Amount before tax
    pub base: f64,
    pub tax: f64,
    /// Add: amount with tax. Remove: amount with tax taken out.
    pub total: f64,
}

pub fn calculate(input: &GstInput) -> GstResult {
    let rate = input.rate_pct / 100.0;
    match input.mode {
        TaxMode::Add => {
            let tax = input.amount * rate;
            GstResult {
                base: input.amount,
                tax,
                total: input.amount + tax,
            }
        }
        TaxMode::Remove => {
            let base = input.amount / (1.0 + rate);
            GstResult {
                base,
                tax: input.amount - base,
                total: base,
            }
        }
    }
}

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::number("amount", "Amount", "1000"),
    FieldSpec::number("rate", "Tax rate (%)", "18"),
    FieldSpec::choice("mode", "Mode", &["Add", "Remove"], "Add").with_aliases(TAX_MODE_ALIASES),
];

pub struct Gst;

impl Calculator for Gst {
    type Input = GstInput;
    type Output = GstResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> GstInput {
        GstInput {
            amount: form.number("amount"),
            rate_pct: form.number("rate"),
            mode: form.parsed("mode"),
        }
    }

    fn compute(&self, input: &GstInput, _ctx: &EvalContext) -> GstResult {
        calculate(input)
    }

    fn summarize(&self, output: &GstResult, decimals: usize) -> Vec<OutputLine> {
        vec![
            OutputLine::number("Base amount", output.base, decimals),
            OutputLine::number("Tax", output.tax, decimals),
            OutputLine::number("Total", output.total, decimals),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let r = calculate(&GstInput { amount: 200.0, rate_pct: 5.0, mode: TaxMode::Add });
        assert_eq!(r.base, 200.0);
        assert_eq!(r.tax, 10.0);
        assert_eq!(r.total, 210.0);
    }

    #[test]
    fn test_remove() {
        let r = calculate(&GstInput { amount: 118.0, rate_pct: 18.0, mode: TaxMode::Remove });
        assert!((r.base - 100.0).abs() < 1e-9);
        assert!((r.tax - 18.0).abs() < 1e-9);
        assert_eq!(r.total, r.base);
    }

    #[test]
    fn test_remove_at_minus_hundred_percent_is_infinite() {
        let r = calculate(&GstInput { amount: 50.0, rate_pct: -100.0, mode: TaxMode::Remove });
        assert!(r.total.is_infinite());
    }
}
