//! # Calculator Forms
//!
//! A [`Form`] is the input state owned by one calculator: the raw text of
//! each of its fields, exactly as the user typed it. Text is only coerced
//! into numbers and dates when the calculator is evaluated, so a half-typed
//! value such as `"12."` survives between edits.
//!
//! Fields are declared statically by each calculator as a list of
//! [`FieldSpec`]s. Hosts (GUI, CLI) render a form generically from that list.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::form::{FieldSpec, Form};
//!
//! static FIELDS: [FieldSpec; 2] = [
//!     FieldSpec::number("a", "First number", "6"),
//!     FieldSpec::choice("op", "Operation", &["+", "-"], "+"),
//! ];
//!
//! let mut form = Form::new("demo", &FIELDS);
//! assert_eq!(form.number("a"), 6.0);
//! form.set("op", "-").unwrap();
//! assert!(form.set("op", "%").is_err());
//! assert!(form.set("missing", "1").is_err());
//! ```

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::numeric::{parse_date, parse_number};

use chrono::NaiveDate;

/// How a field is edited and coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options")]
pub enum FieldKind {
    /// Free text coerced with [`parse_number`]
    Number,
    /// Calendar date in `YYYY-MM-DD` form
    Date,
    /// Free text used verbatim
    Text,
    /// One of a fixed set of option ids
    Choice(&'static [&'static str]),
}

/// Static description of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key used to address the field (e.g., "principal")
    pub key: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    pub kind: FieldKind,
    /// Initial raw text
    pub default: &'static str,
    /// Alternate spellings of choice options, as `(alias, option)` pairs
    pub aliases: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    pub const fn number(key: &'static str, label: &'static str, default: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Number, default, aliases: &[] }
    }

    pub const fn date(key: &'static str, label: &'static str, default: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Date, default, aliases: &[] }
    }

    pub const fn text(key: &'static str, label: &'static str, default: &'static str) -> Self {
        Self { key, label, kind: FieldKind::Text, default, aliases: &[] }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self { key, label, kind: FieldKind::Choice(options), default, aliases: &[] }
    }

    /// Same field, also accepting `aliases` for its options
    pub const fn with_aliases(self, aliases: &'static [(&'static str, &'static str)]) -> Self {
        Self { aliases, ..self }
    }

    /// Options of a choice field (empty for other kinds)
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }
}

/// Option named by `value` in an alias table, or `value` itself.
pub fn resolve_alias<'a>(aliases: &'static [(&'static str, &'static str)], value: &'a str) -> &'a str {
    match aliases.iter().find(|(alias, _)| alias.eq_ignore_ascii_case(value)) {
        Some((_, option)) => *option,
        None => value,
    }
}

/// Raw input state of one calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    owner: &'static str,
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl Form {
    /// Create a form holding every field's default text.
    pub fn new(owner: &'static str, fields: &'static [FieldSpec]) -> Self {
        Form {
            owner,
            fields,
            values: fields.iter().map(|f| f.default.to_string()).collect(),
        }
    }

    /// Id of the calculator owning this form
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Field descriptors paired with their current raw text
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        self.fields.iter().zip(self.values.iter().map(String::as_str))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Raw text of a field; empty for undeclared keys.
    pub fn get(&self, key: &str) -> &str {
        self.position(key).map(|i| self.values[i].as_str()).unwrap_or("")
    }

    /// Replace the raw text of a field.
    ///
    /// Choice fields only accept one of their options or a declared alias
    /// (matched ignoring ASCII case and stored in canonical spelling).
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> CalcResult<()> {
        let index = self
            .position(key)
            .ok_or_else(|| CalcError::unknown_field(self.owner, key))?;
        let value = value.into();
        let spec = &self.fields[index];

        let stored = match spec.kind {
            FieldKind::Choice(options) => {
                let wanted = resolve_alias(spec.aliases, value.trim());
                match options.iter().find(|o| o.eq_ignore_ascii_case(wanted)) {
                    Some(option) => option.to_string(),
                    None => {
                        return Err(CalcError::invalid_input(
                            spec.key,
                            value.as_str(),
                            format!("Expected one of: {}", options.join(", ")),
                        ))
                    }
                }
            }
            _ => value,
        };

        self.values[index] = stored;
        Ok(())
    }

    /// Restore every field to its default text
    pub fn reset(&mut self) {
        for (value, spec) in self.values.iter_mut().zip(self.fields) {
            *value = spec.default.to_string();
        }
    }

    /// Field coerced to a number (0 when not numeric)
    pub fn number(&self, key: &str) -> f64 {
        parse_number(self.get(key), 0.0)
    }

    /// Field coerced to a date (`None` when not a valid date)
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        parse_date(self.get(key)).ok()
    }

    /// Field parsed through `FromStr`, falling back to the type's default
    pub fn parsed<T: std::str::FromStr + Default>(&self, key: &str) -> T {
        self.get(key).parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: [FieldSpec; 4] = [
        FieldSpec::number("amount", "Amount", "1,000"),
        FieldSpec::date("when", "Date", "2024-02-29"),
        FieldSpec::text("note", "Note", ""),
        FieldSpec::choice("mode", "Mode", &["Add", "Remove"], "Add"),
    ];

    #[test]
    fn test_defaults_and_coercion() {
        let form = Form::new("test", &FIELDS);
        assert_eq!(form.number("amount"), 1000.0);
        assert_eq!(form.date("when"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(form.get("note"), "");
        assert_eq!(form.get("mode"), "Add");
    }

    #[test]
    fn test_choice_is_canonicalized() {
        let mut form = Form::new("test", &FIELDS);
        form.set("mode", "remove").unwrap();
        assert_eq!(form.get("mode"), "Remove");
        let err = form.set("mode", "Both").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(form.get("mode"), "Remove");
    }

    #[test]
    fn test_aliases_resolve_to_options() {
        static ALIASED: [FieldSpec; 1] =
            [FieldSpec::choice("op", "Operation", &["+", "÷"], "+").with_aliases(&[("/", "÷"), ("div", "÷")])];
        let mut form = Form::new("test", &ALIASED);
        form.set("op", " / ").unwrap();
        assert_eq!(form.get("op"), "÷");
        form.set("op", "DIV").unwrap();
        assert_eq!(form.get("op"), "÷");
        assert!(form.set("op", "%").is_err());
        assert_eq!(resolve_alias(&[], "x"), "x");
    }

    #[test]
    fn test_unknown_field() {
        let mut form = Form::new("test", &FIELDS);
        let err = form.set("rate", "5").unwrap_err();
        assert_eq!(err, CalcError::unknown_field("test", "rate"));
        assert_eq!(form.get("rate"), "");
    }

    #[test]
    fn test_partial_text_survives() {
        let mut form = Form::new("test", &FIELDS);
        form.set("amount", "12.").unwrap();
        assert_eq!(form.get("amount"), "12.");
        assert_eq!(form.number("amount"), 12.0);
        form.set("amount", "").unwrap();
        assert_eq!(form.number("amount"), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut form = Form::new("test", &FIELDS);
        form.set("amount", "5").unwrap();
        form.set("when", "nope").unwrap();
        assert_eq!(form.date("when"), None);
        form.reset();
        assert_eq!(form.get("amount"), "1,000");
        assert!(form.date("when").is_some());
    }
}
