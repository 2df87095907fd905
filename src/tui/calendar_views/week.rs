use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use gridcal::{app::AppState, ui::week_view};
use crate::tui::calendar_views::{cursor_style, first_visible_hour};

const COLUMN_WIDTH: usize = 10;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = week_view::calculate_layout(&app.view_state, app.store.list(), &app.metrics);

    let mut header_spans = vec![Span::raw("      ")];
    for day in &layout.days {
        let style = if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };
        header_spans.push(Span::styled(
            format!("{:<width$}", format!("{} {}", day.date.format("%a"), day.date.day()), width = COLUMN_WIDTH),
            style,
        ));
    }
    let mut lines = vec![Line::from(header_spans), Line::from("")];

    let rows = u32::from(area.height.saturating_sub(4));
    let first_hour = first_visible_hour(app.selected_hour, rows);

    for hour in (first_hour..24).take(rows as usize) {
        let mut line_spans = vec![Span::styled(format!("{:02}:00 ", hour), Style::default().fg(app.theme.hour_label))];

        for day in &layout.days {
            let titles: Vec<&str> = day.events_in_hour(hour).map(|card| card.title.as_str()).collect();
            let text = match titles.as_slice() {
                [] => String::new(),
                [only] => only.chars().take(COLUMN_WIDTH - 1).collect(),
                many => format!("{} events", many.len()),
            };

            let style = if day.is_selected && hour == app.selected_hour {
                cursor_style(app)
            } else {
                Style::default().fg(app.theme.event)
            };
            line_spans.push(Span::styled(format!("{:<width$}", text, width = COLUMN_WIDTH), style));
        }

        lines.push(Line::from(line_spans));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
