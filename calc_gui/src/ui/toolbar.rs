//! Toolbar component
//!
//! Contains the search box and the theme toggle.

use iced::widget::{button, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header with the active calculator's title
pub fn view_header(active_title: &str) -> Element<'_, Message> {
    row![
        text("Tally").size(28),
        Space::new().width(Length::Fill),
        text(active_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the search box and settings
pub fn view_toolbar(query: &str, dark_mode: bool) -> Element<'_, Message> {
    let search = text_input("Search calculators (e.g. loan, tax, hex)", query)
        .on_input(Message::SearchChanged)
        .padding(Padding::from([4, 8]))
        .size(12)
        .width(Length::Fixed(320.0));

    let clear = button(text("Clear").size(11))
        .on_press(Message::SearchChanged(String::new()))
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        search,
        clear,
        Space::new().width(Length::Fill),
        theme_button,
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
