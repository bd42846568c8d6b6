//! UI module for Tally GUI
//!
//! # Panel Structure
//! - `toolbar` - App header, search box, theme toggle
//! - `items_panel` - Left sidebar: calculator tabs matching the search
//! - `input_panel` - Center panel: form of the active calculator
//! - `results_panel` - Right panel: formatted outputs and formula
//! - `status_bar` - Bottom status messages

pub mod toolbar;
pub mod items_panel;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
