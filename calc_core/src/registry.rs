//! # Calculator Registry
//!
//! The ordered list of every calculator with its display title and search
//! keywords. Order is display order; the first entry is the default tab.
//!
//! The registry only holds data. Presentation goes through the entry's
//! [`CalculatorId`], which knows the calculator's fields and how to
//! evaluate them.
//!
//! ## Search
//!
//! ```rust
//! use calc_core::calculations::CalculatorId;
//! use calc_core::registry::{filter, resolve_active, REGISTRY};
//!
//! assert_eq!(filter("").len(), REGISTRY.len());
//!
//! let hits = filter("LOAN");
//! assert_eq!(hits[0].id, CalculatorId::Emi);
//!
//! // The active tab falls back to the first visible entry
//! let active = resolve_active(&hits, CalculatorId::Bmi);
//! assert_eq!(active.id, CalculatorId::Emi);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::calculations::CalculatorId;

/// One registry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorEntry {
    pub id: CalculatorId,
    pub title: &'static str,
    /// Free-text search keywords (lowercase)
    pub keywords: &'static str,
}

impl CalculatorEntry {
    /// Case-insensitive substring match on title or keywords.
    ///
    /// `needle` must already be trimmed and lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.keywords.to_lowercase().contains(needle)
    }
}

fn entry(id: CalculatorId) -> CalculatorEntry {
    let (title, keywords) = match id {
        CalculatorId::Basic => ("Basic Calculator", "add subtract multiply divide arithmetic math plus minus"),
        CalculatorId::Percentage => ("Percentage", "percent increase decrease ratio %"),
        CalculatorId::Discount => ("Discount", "sale offer mrp price off shopping"),
        CalculatorId::Gst => ("GST / VAT", "tax gst vat sales tax inclusive exclusive"),
        CalculatorId::Bmi => ("BMI", "body mass index weight height health fitness"),
        CalculatorId::Age => ("Age", "birthday date of birth years old"),
        CalculatorId::DateDiff => ("Date Difference", "days between dates duration weeks calendar"),
        CalculatorId::Temperature => ("Temperature", "celsius fahrenheit kelvin convert degrees"),
        CalculatorId::Length => ("Length", "distance meter feet inch mm cm km convert"),
        CalculatorId::Weight => ("Weight", "mass kilogram gram pound kg lb convert"),
        CalculatorId::Time => ("Time", "seconds minutes hours days duration convert"),
        CalculatorId::Speed => ("Speed", "velocity kmh mph m/s convert"),
        CalculatorId::Area => ("Area", "square meter square feet sq m sq ft convert"),
        CalculatorId::Emi => ("Loan EMI", "loan emi mortgage installment interest finance"),
        CalculatorId::Sip => ("SIP", "investment mutual fund monthly returns systematic finance"),
        CalculatorId::CompoundInterest => ("Compound Interest", "interest savings deposit growth finance"),
        CalculatorId::Fraction => ("Fraction to Decimal", "fraction decimal numerator denominator ratio"),
        CalculatorId::BaseConverter => ("Base Converter", "binary octal decimal hexadecimal hex radix number system"),
    };
    CalculatorEntry { id, title, keywords }
}

/// Every calculator, in display order. Built once, read-only afterwards.
pub static REGISTRY: Lazy<Vec<CalculatorEntry>> = Lazy::new(|| {
    let entries: Vec<CalculatorEntry> = CalculatorId::ALL.into_iter().map(entry).collect();
    tracing::debug!(count = entries.len(), "calculator registry built");
    entries
});

/// Registry entry for `id`
pub fn lookup(id: CalculatorId) -> &'static CalculatorEntry {
    &REGISTRY[id.index()]
}

/// Entries whose title or keywords contain `query` (case-insensitive).
///
/// An empty (or all-whitespace) query returns the whole list. Order is
/// preserved in both cases.
pub fn filter_entries<'a>(entries: &'a [CalculatorEntry], query: &str) -> Vec<&'a CalculatorEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }
    entries.iter().filter(|e| e.matches(&needle)).collect()
}

/// [`filter_entries`] over the global [`REGISTRY`]
pub fn filter(query: &str) -> Vec<&'static CalculatorEntry> {
    filter_entries(&REGISTRY, query)
}

/// Pick the entry to display.
///
/// The entry for `active` if it is visible, else the first visible entry,
/// else the first entry of `all`. `None` only when `all` is empty.
pub fn resolve_active_in<'a>(
    all: &'a [CalculatorEntry],
    visible: &[&'a CalculatorEntry],
    active: CalculatorId,
) -> Option<&'a CalculatorEntry> {
    visible
        .iter()
        .find(|e| e.id == active)
        .or_else(|| visible.first())
        .copied()
        .or_else(|| all.first())
}

/// [`resolve_active_in`] over the global [`REGISTRY`], which is never empty.
pub fn resolve_active(visible: &[&'static CalculatorEntry], active: CalculatorId) -> &'static CalculatorEntry {
    resolve_active_in(&REGISTRY, visible, active).unwrap_or_else(|| lookup(active))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[&CalculatorEntry]) -> Vec<CalculatorId> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_registry_order_matches_ids() {
        assert_eq!(REGISTRY.len(), CalculatorId::ALL.len());
        for (entry, id) in REGISTRY.iter().zip(CalculatorId::ALL) {
            assert_eq!(entry.id, id);
            assert_eq!(lookup(id), entry);
        }
        assert_eq!(REGISTRY[0].id, CalculatorId::Basic);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for entry in REGISTRY.iter() {
            assert_eq!(entry.keywords, entry.keywords.to_lowercase(), "{}", entry.title);
        }
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        assert_eq!(ids(&filter("")), CalculatorId::ALL.to_vec());
        assert_eq!(ids(&filter("   ")), CalculatorId::ALL.to_vec());
    }

    #[test]
    fn test_no_match() {
        assert!(filter("zzz-no-match").is_empty());
    }

    #[test]
    fn test_matches_title_and_keywords_case_insensitively() {
        assert_eq!(ids(&filter("  Celsius ")), vec![CalculatorId::Temperature]);
        assert_eq!(ids(&filter("hex")), vec![CalculatorId::BaseConverter]);
        let finance = ids(&filter("finance"));
        assert_eq!(finance, vec![CalculatorId::Emi, CalculatorId::Sip, CalculatorId::CompoundInterest]);
    }

    #[test]
    fn test_filter_preserves_registry_order() {
        let hits = ids(&filter("convert"));
        let mut sorted = hits.clone();
        sorted.sort();
        assert_eq!(hits, sorted);
        assert!(hits.len() >= 5);
    }

    #[test]
    fn test_resolve_active() {
        let visible = filter("convert");
        assert_eq!(resolve_active(&visible, CalculatorId::Speed).id, CalculatorId::Speed);
        assert_eq!(resolve_active(&visible, CalculatorId::Basic).id, visible[0].id);
        assert_eq!(resolve_active(&[], CalculatorId::Sip).id, CalculatorId::Basic);
    }

    #[test]
    fn test_resolve_active_in_empty_registry() {
        assert_eq!(resolve_active_in(&[], &[], CalculatorId::Basic), None);
    }
}
