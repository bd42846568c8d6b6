//! Status Bar (Bottom)
//!
//! Shows the date Age calculations are measured against and the last
//! status message.

use chrono::NaiveDate;
use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(today: NaiveDate, status: &str) -> Element<'_, Message> {
    row![
        text(format!("Today: {}", today.format("%Y-%m-%d"))).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
