pub mod day;
pub mod event_list;
pub mod month;
pub mod week;

use ratatui::style::{Modifier, Style};
use gridcal::app::{AppState, Mode};

/// Highlight for the cursor cell. While an event is being dragged the cursor
/// is the drop target and gets its own colour.
pub(crate) fn cursor_style(app: &AppState) -> Style {
    let bg = if app.mode == Mode::Drag {
        app.theme.drag_target
    } else {
        app.theme.selected_bg
    };
    Style::default()
        .bg(bg)
        .fg(app.theme.selected_fg)
        .add_modifier(Modifier::BOLD)
}

/// First hour to draw so that `rows` hourly rows keep `selected_hour` in view.
pub(crate) fn first_visible_hour(selected_hour: u32, rows: u32) -> u32 {
    let rows = rows.clamp(1, 24);
    selected_hour.saturating_sub(rows / 2).min(24 - rows)
}
