//! # Calculator Hub
//!
//! The shell behind the tab UI. The hub owns:
//!
//! - the search query that narrows the registry,
//! - the active tab id,
//! - one [`Form`] per calculator, all mounted at construction.
//!
//! Forms are independent: editing one never reads or writes another, and
//! switching tabs or searching never touches any form. Outputs are
//! recomputed from the form on every call to [`Hub::evaluate`]; nothing is
//! cached.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use calc_core::calculations::CalculatorId;
//! use calc_core::hub::Hub;
//!
//! let mut hub = Hub::new();
//! hub.set_query("loan");
//! assert_eq!(hub.active_entry().id, CalculatorId::Emi);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let eval = hub.evaluate_active(today);
//! assert_eq!(eval.lines[0].value, "10,623.52");
//! ```

use chrono::NaiveDate;

use crate::calculations::{CalculatorId, EvalContext, Evaluation};
use crate::errors::CalcResult;
use crate::form::Form;
use crate::registry::{self, CalculatorEntry};
use crate::settings::HubSettings;

#[derive(Debug, Clone)]
pub struct Hub {
    settings: HubSettings,
    query: String,
    active: CalculatorId,
    /// Indexed by [`CalculatorId::index`]
    forms: Vec<Form>,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl Hub {
    /// Hub with default settings
    pub fn new() -> Self {
        Self::with_settings(HubSettings::default())
    }

    pub fn with_settings(settings: HubSettings) -> Self {
        let settings = settings.normalized();
        Hub {
            settings,
            query: String::new(),
            active: settings.start_calculator,
            forms: CalculatorId::ALL.iter().map(|id| id.new_form()).collect(),
        }
    }

    pub fn settings(&self) -> &HubSettings {
        &self.settings
    }

    // ------------------------------------------------------------------
    // Search & selection
    // ------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, visible = self.visible_entries().len(), "search updated");
    }

    /// Registry entries matching the current query, in registry order
    pub fn visible_entries(&self) -> Vec<&'static CalculatorEntry> {
        registry::filter(&self.query)
    }

    /// The selected id, which may currently be filtered out
    pub fn selected(&self) -> CalculatorId {
        self.active
    }

    /// Make `id` the active tab
    pub fn select(&mut self, id: CalculatorId) {
        tracing::debug!(calculator = %id, "tab selected");
        self.active = id;
    }

    /// Entry actually displayed: the selection if visible, else the first
    /// visible entry, else the first registry entry.
    pub fn active_entry(&self) -> &'static CalculatorEntry {
        registry::resolve_active(&self.visible_entries(), self.active)
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    pub fn form(&self, id: CalculatorId) -> &Form {
        &self.forms[id.index()]
    }

    /// Edit one field of one calculator's form
    pub fn set_field(&mut self, id: CalculatorId, key: &str, value: impl Into<String>) -> CalcResult<()> {
        let value = value.into();
        tracing::debug!(calculator = %id, field = key, value = %value, "field edited");
        self.forms[id.index()].set(key, value)
    }

    /// Restore a calculator's form to its defaults
    pub fn reset(&mut self, id: CalculatorId) {
        self.forms[id.index()].reset();
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    pub fn context(&self, today: NaiveDate) -> EvalContext {
        EvalContext::new(today, self.settings.decimals)
    }

    /// Outputs of `id` for its current form
    pub fn evaluate(&self, id: CalculatorId, today: NaiveDate) -> Evaluation {
        id.evaluate(self.form(id), &self.context(today))
    }

    /// Outputs of the displayed calculator
    pub fn evaluate_active(&self, today: NaiveDate) -> Evaluation {
        self.evaluate(self.active_entry().id, today)
    }
}
