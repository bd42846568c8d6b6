//! Items Panel (Left Sidebar)
//!
//! One button per calculator matching the search, in registry order. The
//! displayed tab is highlighted; when nothing matches, a hint is shown and
//! the first registry entry stays on screen.

use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Element, Length, Padding};

use calc_core::Hub;

use crate::Message;

/// Render the tab list
pub fn view_items_panel(hub: &Hub, width: f32) -> Element<'_, Message> {
    let active = hub.active_entry().id;
    let visible = hub.visible_entries();

    let mut tabs: Column<'_, Message> = column![text(format!("Calculators ({})", visible.len())).size(11)].spacing(2);

    if visible.is_empty() {
        tabs = tabs.push(text("(no match)").size(10).color([0.5, 0.5, 0.5]));
    }

    for entry in visible {
        let style = if entry.id == active {
            button::primary
        } else {
            button::secondary
        };
        tabs = tabs.push(
            button(text(entry.title).size(11))
                .on_press(Message::SelectCalculator(entry.id))
                .padding(Padding::from([3, 6]))
                .style(style)
                .width(Length::Fill),
        );
    }

    container(scrollable(tabs.padding(4)))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}
