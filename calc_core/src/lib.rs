//! # calc_core - Everyday Calculator Engine
//!
//! `calc_core` is the computational heart of Tally: a hub of small, independent
//! calculators (arithmetic, percentages, tax, BMI, dates, unit conversion,
//! loans and investments, number bases) behind a searchable registry.
//!
//! ## Design Philosophy
//!
//! - **Pure**: every formula is a function of its inputs, recomputed on demand
//! - **Never fails**: undefined results become NaN / `None` and display as `-`
//! - **JSON-First**: typed inputs and results implement Serialize
//! - **Host-agnostic**: the [`hub::Hub`] state machine drives both the GUI and CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use calc_core::{CalculatorId, Hub};
//!
//! let mut hub = Hub::new();
//! hub.set_field(CalculatorId::Bmi, "weight", "70").unwrap();
//! hub.set_field(CalculatorId::Bmi, "height", "170").unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let eval = hub.evaluate(CalculatorId::Bmi, today);
//! assert_eq!(eval.lines[0].value, "24.22");
//! assert_eq!(eval.lines[1].value, "Normal");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculators (inputs, results, formulas)
//! - [`units`] - Unit conversion tables
//! - [`numeric`] - Number coercion and display formatting
//! - [`form`] - Field descriptors and raw input state
//! - [`registry`] - Ordered calculator list, search and tab resolution
//! - [`hub`] - Search / tab / form state for UI hosts
//! - [`formulas`] - Formula reference catalog
//! - [`settings`] - Display preferences
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod form;
pub mod formulas;
pub mod hub;
pub mod numeric;
pub mod registry;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculatorId, EvalContext, Evaluation, OutputLine};
pub use errors::{CalcError, CalcResult};
pub use hub::Hub;
pub use numeric::{format_number, parse_number};
pub use registry::{filter, resolve_active, CalculatorEntry, REGISTRY};
pub use settings::HubSettings;
