use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use gridcal::{app::AppState, ui::day_view};
use crate::tui::calendar_views::{cursor_style, first_visible_hour};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = day_view::calculate_layout(&app.view_state, app.store.list(), &app.metrics);

    let rows = u32::from(area.height.saturating_sub(2));
    let first_hour = first_visible_hour(app.selected_hour, rows);

    let lines: Vec<Line> = layout
        .hours
        .iter()
        .skip(first_hour as usize)
        .take(rows as usize)
        .map(|slot| {
            let label_style = if slot.hour == app.selected_hour {
                cursor_style(app)
            } else {
                Style::default().fg(app.theme.hour_label)
            };

            let mut spans = vec![Span::styled(format!("{:02}:00", slot.hour), label_style), Span::raw("  ")];
            for (i, card) in slot.events.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" | "));
                }
                spans.push(Span::styled(
                    format!("{} ({})", card.title, card.time_label),
                    Style::default().fg(app.theme.event),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
