//! # Formula Reference
//!
//! Metadata for the formula behind every calculator: what it computes, the
//! formula in plain text, its variables, and the edge-case behavior. The
//! catalog renders to Markdown so the math can be audited in one place.
//!
//! ```rust
//! use calc_core::calculations::CalculatorId;
//! use calc_core::formulas::{generate_formulas_markdown, metadata};
//!
//! let meta = metadata(CalculatorId::Emi);
//! assert!(meta.formula.contains("(1 + r)^n"));
//! assert!(generate_formulas_markdown().contains("## Finance"));
//! ```

use serde::Serialize;

use crate::calculations::CalculatorId;
use crate::registry::lookup;

/// Catalog section a calculator is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FormulaCategory {
    Arithmetic,
    Finance,
    Health,
    DateTime,
    Conversion,
    NumberSystems,
}

impl FormulaCategory {
    pub const ALL: [FormulaCategory; 6] = [
        FormulaCategory::Arithmetic,
        FormulaCategory::Finance,
        FormulaCategory::Health,
        FormulaCategory::DateTime,
        FormulaCategory::Conversion,
        FormulaCategory::NumberSystems,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::Arithmetic => "Arithmetic",
            FormulaCategory::Finance => "Finance",
            FormulaCategory::Health => "Health",
            FormulaCategory::DateTime => "Date & Time",
            FormulaCategory::Conversion => "Conversion",
            FormulaCategory::NumberSystems => "Number Systems",
        }
    }
}

/// Definition of a variable used in a formula.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
}

const fn var(symbol: &'static str, description: &'static str) -> Variable {
    Variable { symbol, description }
}

/// Everything the catalog shows for one calculator.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    pub id: CalculatorId,
    pub category: FormulaCategory,
    pub description: &'static str,
    /// Plain-text formula
    pub formula: &'static str,
    pub variables: Vec<Variable>,
    /// Edge cases and rounding rules
    pub notes: Vec<&'static str>,
}

/// Formula metadata for one calculator
pub fn metadata(id: CalculatorId) -> FormulaMetadata {
    use FormulaCategory::*;

    let (category, description, formula, variables, notes) = match id {
        CalculatorId::Basic => (
            Arithmetic,
            "Applies one of + − × ÷ to two numbers.",
            "result = a op b",
            vec![var("a", "First number"), var("b", "Second number")],
            vec!["Division by zero has no result."],
        ),
        CalculatorId::Percentage => (
            Arithmetic,
            "Adds or subtracts a percentage of a value.",
            "increase = base · pct / 100; total = base + increase",
            vec![var("base", "Value"), var("pct", "Percent")],
            vec![],
        ),
        CalculatorId::Discount => (
            Finance,
            "Price after a percentage discount.",
            "discount = mrp · off / 100; pay = mrp − discount",
            vec![var("mrp", "List price"), var("off", "Discount percent")],
            vec![],
        ),
        CalculatorId::Gst => (
            Finance,
            "Adds tax to a net amount, or extracts it from a gross amount.",
            "Add: tax = A · r, total = A + tax. Remove: base = A / (1 + r), tax = A − base",
            vec![var("A", "Amount"), var("r", "Tax rate as a fraction (pct / 100)")],
            vec!["Remove undoes Add at the same rate."],
        ),
        CalculatorId::Bmi => (
            Health,
            "Body mass index with weight-status band.",
            "Metric: kg / m². Imperial: 703 · lb / in²",
            vec![var("kg, lb", "Weight"), var("m, in", "Height (entered in cm for metric)")],
            vec![
                "Bands: < 18.5 Underweight, < 25 Normal, < 30 Overweight, otherwise Obese.",
                "A zero height has no result.",
            ],
        ),
        CalculatorId::Age => (
            DateTime,
            "Years, months and days since a date of birth.",
            "Field-wise difference of today and the birth date",
            vec![var("dob", "Date of birth (YYYY-MM-DD)")],
            vec![
                "Negative days borrow the length of the month before today's month.",
                "Negative months borrow 12 from the years.",
                "An invalid date has no result.",
            ],
        ),
        CalculatorId::DateDiff => (
            DateTime,
            "Whole days between two dates.",
            "days = |to − from|; weeks = days / 7",
            vec![var("from, to", "Dates (YYYY-MM-DD)")],
            vec!["Either date invalid: no result."],
        ),
        CalculatorId::Temperature => (
            Conversion,
            "Converts between Celsius, Fahrenheit and Kelvin through Celsius.",
            "C = (F − 32) · 5/9 = K − 273.15; F = C · 9/5 + 32; K = C + 273.15",
            vec![var("C, F, K", "Temperature on each scale")],
            vec![],
        ),
        CalculatorId::Length => (
            Conversion,
            "Length through meters.",
            "mm = 0.001 m, cm = 0.01 m, km = 1000 m, in = 0.0254 m, ft = 0.3048 m",
            vec![var("value", "Quantity in the source unit")],
            vec!["Unknown unit: no result."],
        ),
        CalculatorId::Weight => (
            Conversion,
            "Weight through kilograms.",
            "g = 0.001 kg, lb = 0.45359237 kg",
            vec![var("value", "Quantity in the source unit")],
            vec!["Unknown unit: no result."],
        ),
        CalculatorId::Time => (
            Conversion,
            "Time through seconds.",
            "min = 60 s, hr = 3600 s, day = 86400 s",
            vec![var("value", "Quantity in the source unit")],
            vec!["Unknown unit: no result."],
        ),
        CalculatorId::Speed => (
            Conversion,
            "Speed through meters per second.",
            "km/h = 1/3.6 m/s, mph = 0.44704 m/s",
            vec![var("value", "Quantity in the source unit")],
            vec!["Unknown unit: no result."],
        ),
        CalculatorId::Area => (
            Conversion,
            "Area through square meters.",
            "sq ft = 0.09290304 sq m",
            vec![var("value", "Quantity in the source unit")],
            vec!["Unknown unit: no result."],
        ),
        CalculatorId::Emi => (
            Finance,
            "Fixed monthly repayment of an amortizing loan.",
            "EMI = P · r · (1 + r)^n / ((1 + r)^n − 1); total = EMI · n; interest = total − P",
            vec![
                var("P", "Principal"),
                var("r", "Monthly rate = annual pct / 12 / 100"),
                var("n", "Tenure in months, rounded"),
            ],
            vec!["r = 0: EMI = P / n.", "n ≤ 0: no result."],
        ),
        CalculatorId::Sip => (
            Finance,
            "Future value of a monthly contribution paid at the start of each month.",
            "FV = M · ((1 + i)^n − 1) / i · (1 + i); invested = M · n",
            vec![
                var("M", "Monthly investment"),
                var("i", "Monthly rate = annual pct / 12 / 100"),
                var("n", "Months = round(years · 12)"),
            ],
            vec!["i = 0: FV = M · n (limit of the formula)."],
        ),
        CalculatorId::CompoundInterest => (
            Finance,
            "Growth of a deposit compounded n times a year.",
            "A = P · (1 + r/n)^(n · t); interest = A − P",
            vec![
                var("P", "Principal"),
                var("r", "Annual rate = pct / 100"),
                var("n", "Compounds per year, rounded, at least 1"),
                var("t", "Years"),
            ],
            vec![],
        ),
        CalculatorId::Fraction => (
            NumberSystems,
            "Decimal value of a fraction.",
            "decimal = numerator / denominator",
            vec![var("numerator", "Top"), var("denominator", "Bottom")],
            vec!["Zero denominator: no result."],
        ),
        CalculatorId::BaseConverter => (
            NumberSystems,
            "Rewrites an integer from one base to another.",
            "digits(to) = format(parse(value, from), to)",
            vec![var("from, to", "Base: 2, 8, 10, 16 or 36")],
            vec!["Output digits are uppercase.", "Text that is not an integer in the source base: no result."],
        ),
    };

    FormulaMetadata {
        id,
        category,
        description,
        formula,
        variables,
        notes,
    }
}

/// Metadata of every calculator in `category`, in registry order
pub fn in_category(category: FormulaCategory) -> Vec<FormulaMetadata> {
    CalculatorId::ALL
        .into_iter()
        .map(metadata)
        .filter(|m| m.category == category)
        .collect()
}

/// Generate the Markdown formula reference.
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Tally Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every calculator is a pure function of its inputs. Undefined results
(division by zero, invalid dates, unknown units) display as `-`.

---

"#,
    );

    for category in FormulaCategory::ALL {
        let formulas = in_category(category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for meta in formulas {
            output.push_str(&format!("### {}\n\n", lookup(meta.id).title));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description |\n");
                output.push_str("|--------|-------------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} |\n", var.symbol, var.description));
                }
                output.push('\n');
            }

            for note in &meta.notes {
                output.push_str(&format!("- {}\n", note));
            }
            if !meta.notes.is_empty() {
                output.push('\n');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_calculators_have_metadata() {
        for id in CalculatorId::ALL {
            let meta = metadata(id);
            assert_eq!(meta.id, id);
            assert!(!meta.formula.is_empty(), "{} has no formula", id);
            assert!(!meta.variables.is_empty(), "{} has no variables", id);
        }
    }

    #[test]
    fn test_categories_cover_every_calculator() {
        let total: usize = FormulaCategory::ALL.iter().map(|c| in_category(*c).len()).sum();
        assert_eq!(total, CalculatorId::ALL.len());
    }

    #[test]
    fn test_markdown_lists_every_title() {
        let md = generate_formulas_markdown();
        for id in CalculatorId::ALL {
            assert!(md.contains(&format!("### {}", lookup(id).title)), "{} missing", id);
        }
        assert!(md.find("## Arithmetic").unwrap() < md.find("## Finance").unwrap());
    }
}
