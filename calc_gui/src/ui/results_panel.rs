//! Results Panel (Right Side)
//!
//! Formatted outputs of the displayed calculator, recomputed from its form
//! on every render, followed by the formula it uses.

use iced::widget::{column, container, row, rule, scrollable, text, Column, Space};
use iced::{Element, Length};

use calc_core::formulas::metadata;

use crate::{App, Message};

/// Render the results panel
///
/// Uses the complementary ratio (1 - input_ratio) of the input panel.
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let hub = app.hub();
    let id = hub.active_entry().id;
    let eval = hub.evaluate(id, app.today());

    let mut content: Column<'_, Message> = column![text("Results").size(14), Space::new().height(4)].spacing(4);

    for line in eval.lines {
        content = content.push(
            row![
                text(line.label).size(12),
                Space::new().width(Length::Fill),
                text(line.value).size(16),
            ]
            .spacing(8),
        );
    }

    let meta = metadata(id);
    content = content.push(Space::new().height(8));
    content = content.push(rule::horizontal(1));
    content = content.push(text("Formula").size(11).color([0.5, 0.5, 0.5]));
    content = content.push(text(meta.formula).size(10));
    for note in meta.notes {
        content = content.push(text(format!("• {}", note)).size(10).color([0.5, 0.5, 0.5]));
    }

    // Use complementary ratio (scale to 0-100 for better precision)
    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
