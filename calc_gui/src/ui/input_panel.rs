//! Input Panel (Center)
//!
//! Generic form for the active calculator: a text box per number, date or
//! text field and a picker per choice field. Every edit is forwarded to the
//! hub as raw text.

use iced::widget::{button, column, container, pick_list, row, rule, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::form::{FieldKind, FieldSpec};
use calc_core::CalculatorId;

use crate::{App, Message};

const LABEL_WIDTH: f32 = 170.0;

/// Render the input panel for the displayed calculator
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let hub = app.hub();
    let entry = hub.active_entry();

    let mut panel: Column<'_, Message> = column![
        row![
            text(entry.title).size(16),
            Space::new().width(Length::Fill),
            button(text("Reset").size(10))
                .on_press(Message::ResetForm(entry.id))
                .padding(Padding::from([2, 8]))
                .style(button::secondary),
        ]
        .align_y(Alignment::Center),
        rule::horizontal(1),
    ]
    .spacing(6);

    for (spec, value) in hub.form(entry.id).entries() {
        panel = panel.push(view_field(entry.id, spec, value));
    }

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_field<'a>(id: CalculatorId, spec: &'static FieldSpec, value: &'a str) -> Element<'a, Message> {
    let key = spec.key;

    let editor: Element<'a, Message> = match spec.kind {
        FieldKind::Choice(options) => {
            let selected = options.iter().copied().find(|o| *o == value);
            pick_list(options, selected, move |option: &'static str| {
                Message::FieldChanged(id, key, option.to_string())
            })
            .text_size(11)
            .width(Length::Fixed(140.0))
            .into()
        }
        FieldKind::Date => text_input("YYYY-MM-DD", value)
            .on_input(move |s| Message::FieldChanged(id, key, s))
            .width(Length::Fixed(140.0))
            .padding(2)
            .size(11)
            .into(),
        FieldKind::Number | FieldKind::Text => text_input(spec.default, value)
            .on_input(move |s| Message::FieldChanged(id, key, s))
            .width(Length::Fixed(140.0))
            .padding(2)
            .size(11)
            .into(),
    };

    row![
        text(spec.label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        editor,
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
