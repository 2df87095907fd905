use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use gridcal::{app::AppState, ui::month_view};
use crate::tui::calendar_views::cursor_style;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_WIDTH: usize = 9;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(&app.view_state, app.store.list(), &app.metrics);

    let header: Vec<Span> = WEEKDAYS
        .iter()
        .map(|name| Span::styled(format!("{:^width$}", name, width = CELL_WIDTH), Style::default().fg(app.theme.weekday_header)))
        .collect();
    let mut lines = vec![Line::from(header), Line::from("")];

    for week in layout.weeks() {
        let mut day_spans = Vec::new();
        let mut event_spans = Vec::new();

        for cell in week {
            let mut style = Style::default();
            if cell.is_dimmed {
                style = style.fg(app.theme.dimmed_day);
            } else if cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }
            if cell.is_selected {
                style = cursor_style(app);
            }
            day_spans.push(Span::styled(format!(" {:>2}{:width$}", cell.date.day(), "", width = CELL_WIDTH - 3), style));

            let summary = match cell.events.as_slice() {
                [] => String::new(),
                [only] => only.title.chars().take(CELL_WIDTH - 1).collect(),
                many => format!("+{} events", many.len()),
            };
            event_spans.push(Span::styled(
                format!(" {:<width$}", summary, width = CELL_WIDTH - 1),
                Style::default().fg(app.theme.event),
            ));
        }

        lines.push(Line::from(day_spans));
        lines.push(Line::from(event_spans));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
