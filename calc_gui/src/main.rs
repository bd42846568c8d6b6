//! # Tally GUI Application
//!
//! Searchable tab shell over the calculator hub. Built with Iced for
//! cross-platform support (Windows, macOS, Linux, WASM).
//!
//! Layout: header and search bar on top, the tab list on the left, the
//! active calculator's form in the center, its results on the right and
//! a status bar at the bottom. All state lives in [`calc_core::Hub`]; the
//! GUI only forwards edits and renders what the hub evaluates.

mod ui;

use calc_core::{CalculatorId, Hub};
use chrono::{Local, NaiveDate};
use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Theme};

/// Share of the main area given to the input panel
const INPUT_RATIO: f32 = 0.55;
const ITEMS_PANEL_WIDTH: f32 = 190.0;

pub struct App {
    hub: Hub,
    today: NaiveDate,
    dark_mode: bool,
    status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    SelectCalculator(CalculatorId),
    FieldChanged(CalculatorId, &'static str, String),
    ResetForm(CalculatorId),
    ToggleDarkMode,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    fn with_today(today: NaiveDate) -> Self {
        App {
            hub: Hub::new(),
            today,
            dark_mode: false,
            status: "Ready".to_string(),
        }
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn title(&self) -> String {
        format!("Tally - {}", self.hub.active_entry().title)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::SearchChanged(query) => {
                self.hub.set_query(query);
                let count = self.hub.visible_entries().len();
                self.status = match count {
                    0 => "No calculators match".to_string(),
                    1 => "1 calculator".to_string(),
                    n => format!("{} calculators", n),
                };
            }
            Message::SelectCalculator(id) => {
                self.hub.select(id);
                self.status = "Ready".to_string();
            }
            Message::FieldChanged(id, key, value) => {
                self.status = match self.hub.set_field(id, key, value) {
                    Ok(()) => "Ready".to_string(),
                    Err(e) => e.to_string(),
                };
            }
            Message::ResetForm(id) => {
                self.hub.reset(id);
                self.status = "Defaults restored".to_string();
            }
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let main_area = row![
            ui::items_panel::view_items_panel(&self.hub, ITEMS_PANEL_WIDTH),
            ui::input_panel::view_input_panel(self, INPUT_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_RATIO),
        ]
        .spacing(6)
        .height(Length::Fill);

        let content = column![
            ui::toolbar::view_header(self.hub.active_entry().title),
            ui::toolbar::view_toolbar(self.hub.query(), self.dark_mode),
            rule::horizontal(1),
            main_area,
            ui::status_bar::view_status_bar(self.today, &self.status),
        ]
        .spacing(6);

        container(content)
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("starting Tally GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_search_narrows_and_falls_back() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorId::Bmi));
        app.update(Message::SearchChanged("celsius".to_string()));
        assert_eq!(app.hub().active_entry().id, CalculatorId::Temperature);
        assert_eq!(app.status, "1 calculator");

        app.update(Message::SearchChanged(String::new()));
        assert_eq!(app.hub().active_entry().id, CalculatorId::Bmi);
    }

    #[test]
    fn test_field_edits_and_reset() {
        let mut app = app();
        app.update(Message::FieldChanged(CalculatorId::Fraction, "denominator", "4".to_string()));
        assert_eq!(app.hub().form(CalculatorId::Fraction).get("denominator"), "4");

        app.update(Message::FieldChanged(CalculatorId::Fraction, "missing", "1".to_string()));
        assert!(app.status.contains("missing"));

        app.update(Message::ResetForm(CalculatorId::Fraction));
        assert_eq!(app.hub().form(CalculatorId::Fraction).get("denominator"), "8");
    }

    #[test]
    fn test_title_follows_active_tab() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorId::Emi));
        assert_eq!(app.title(), "Tally - Loan EMI");
        app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }
}
