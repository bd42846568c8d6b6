//! # Number Base Converter
//!
//! Reads an integer written in one base and writes it in another. Supported
//! bases: 2, 8, 10, 16 and 36. Input digits are case-insensitive and may
//! carry a leading sign; output digits are uppercase. Values are arbitrary
//! precision, so long digit strings convert exactly. Text that is not an
//! integer in the source base displays as `"-"`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::base_converter::{convert_digits, NumberBase};
//!
//! let out = convert_digits("42", NumberBase::Decimal, NumberBase::Binary).unwrap();
//! assert_eq!(out, "101010");
//! assert_eq!(convert_digits("ff", NumberBase::Hexadecimal, NumberBase::Decimal).unwrap(), "255");
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use super::{Calculator, EvalContext, OutputLine};
use crate::errors::{CalcError, CalcResult};
use crate::form::{FieldSpec, Form};
use crate::numeric::PLACEHOLDER;

/// Supported numeral bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum NumberBase {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
    Base36,
}

impl NumberBase {
    pub const ALL: [NumberBase; 5] = [
        NumberBase::Binary,
        NumberBase::Octal,
        NumberBase::Decimal,
        NumberBase::Hexadecimal,
        NumberBase::Base36,
    ];

    pub fn radix(&self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
            NumberBase::Base36 => 36,
        }
    }
}

impl TryFrom<u32> for NumberBase {
    type Error = CalcError;

    fn try_from(radix: u32) -> CalcResult<Self> {
        NumberBase::ALL
            .into_iter()
            .find(|b| b.radix() == radix)
            .ok_or(CalcError::UnsupportedBase { base: radix })
    }
}

impl From<NumberBase> for u32 {
    fn from(base: NumberBase) -> u32 {
        base.radix()
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

impl FromStr for NumberBase {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let radix: u32 = s
            .trim()
            .parse()
            .map_err(|_| CalcError::invalid_input("base", s, "Expected 2, 8, 10, 16 or 36"))?;
        NumberBase::try_from(radix)
    }
}

/// Parse `digits` as an integer in `base`.
///
/// Digit group separators are not accepted.
pub fn parse_in_base(digits: &str, base: NumberBase) -> CalcResult<BigInt> {
    let trimmed = digits.trim();
    if trimmed.contains('_') {
        return Err(CalcError::invalid_digits(trimmed, base.radix()));
    }
    BigInt::parse_bytes(trimmed.as_bytes(), base.radix())
        .ok_or_else(|| CalcError::invalid_digits(trimmed, base.radix()))
}

/// Render `value` in `base` with uppercase digits.
pub fn format_in_base(value: &BigInt, base: NumberBase) -> String {
    value.to_str_radix(base.radix()).to_ascii_uppercase()
}

/// Re-express `digits` from one base in another.
pub fn convert_digits(digits: &str, from: NumberBase, to: NumberBase) -> CalcResult<String> {
    parse_in_base(digits, from).map(|value| format_in_base(&value, to))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseInput {
    pub value: String,
    pub from: NumberBase,
    pub to: NumberBase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResult {
    /// `None` when `value` is not an integer in the source base
    pub value: Option<String>,
}

pub fn calculate(input: &BaseInput) -> BaseResult {
    BaseResult {
        value: convert_digits(&input.value, input.from, input.to).ok(),
    }
}

const BASES: &[&str] = &["2", "8", "10", "16", "36"];

pub static FIELDS: [FieldSpec; 3] = [
    FieldSpec::text("value", "Number", "42"),
    FieldSpec::choice("from", "From base", BASES, "10"),
    FieldSpec::choice("to", "To base", BASES, "2"),
];

pub struct BaseConverter;

impl Calculator for BaseConverter {
    type Input = BaseInput;
    type Output = BaseResult;

    fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    fn read_form(&self, form: &Form) -> BaseInput {
        BaseInput {
            value: form.get("value").to_string(),
            from: form.parsed("from"),
            to: form.parsed("to"),
        }
    }

    fn compute(&self, input: &BaseInput, _ctx: &EvalContext) -> BaseResult {
        calculate(input)
    }

    fn summarize(&self, output: &BaseResult, _decimals: usize) -> Vec<OutputLine> {
        vec![OutputLine::new(
            "Result",
            output.value.as_deref().unwrap_or(PLACEHOLDER),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_binary() {
        let r = calculate(&BaseInput {
            value: "42".into(),
            from: NumberBase::Decimal,
            to: NumberBase::Binary,
        });
        assert_eq!(r.value.as_deref(), Some("101010"));
    }

    #[test]
    fn test_uppercase_output() {
        assert_eq!(convert_digits("255", NumberBase::Decimal, NumberBase::Hexadecimal).unwrap(), "FF");
        assert_eq!(convert_digits("1295", NumberBase::Decimal, NumberBase::Base36).unwrap(), "ZZ");
        assert_eq!(convert_digits("zz", NumberBase::Base36, NumberBase::Decimal).unwrap(), "1295");
    }

    #[test]
    fn test_sign_and_zero() {
        assert_eq!(convert_digits("-10", NumberBase::Decimal, NumberBase::Binary).unwrap(), "-1010");
        assert_eq!(convert_digits("0", NumberBase::Octal, NumberBase::Hexadecimal).unwrap(), "0");
    }

    #[test]
    fn test_long_values_convert_exactly() {
        let decimal = "9".repeat(45);
        let hex = convert_digits(&decimal, NumberBase::Decimal, NumberBase::Hexadecimal).unwrap();
        assert_eq!(convert_digits(&hex, NumberBase::Hexadecimal, NumberBase::Decimal).unwrap(), decimal);

        let ones = "1".repeat(40);
        let binary = convert_digits(&ones, NumberBase::Decimal, NumberBase::Binary).unwrap();
        assert!(binary.len() > 128);
        assert_eq!(convert_digits(&binary, NumberBase::Binary, NumberBase::Decimal).unwrap(), ones);

        let negative = format!("-{}", "Z".repeat(30));
        let decimal = convert_digits(&negative, NumberBase::Base36, NumberBase::Decimal).unwrap();
        assert!(decimal.starts_with('-'));
        assert_eq!(convert_digits(&decimal, NumberBase::Decimal, NumberBase::Base36).unwrap(), negative);
    }

    #[test]
    fn test_separators_rejected() {
        assert!(parse_in_base("1_000", NumberBase::Decimal).is_err());
        assert!(parse_in_base("-", NumberBase::Decimal).is_err());
        assert_eq!(convert_digits(" -0 ", NumberBase::Decimal, NumberBase::Binary).unwrap(), "0");
    }

    #[test]
    fn test_unparsable_is_placeholder() {
        let r = calculate(&BaseInput {
            value: "102".into(),
            from: NumberBase::Binary,
            to: NumberBase::Decimal,
        });
        assert_eq!(r.value, None);
        assert_eq!(BaseConverter.summarize(&r, 2)[0].value, "-");

        let err = parse_in_base("", NumberBase::Decimal).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIGITS");
    }

    #[test]
    fn test_supported_bases() {
        assert_eq!("16".parse::<NumberBase>().unwrap(), NumberBase::Hexadecimal);
        assert_eq!("7".parse::<NumberBase>().unwrap_err(), CalcError::UnsupportedBase { base: 7 });
        let json = serde_json::to_string(&NumberBase::Octal).unwrap();
        assert_eq!(json, "8");
        assert!(serde_json::from_str::<NumberBase>("3").is_err());
    }
}
