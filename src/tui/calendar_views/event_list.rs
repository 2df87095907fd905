use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use gridcal::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.events_for_selected_date();
    let title = format!(" {} ", app.selected_date().format("%a %B %-d, %Y"));

    let mut lines = Vec::new();

    if events.is_empty() {
        lines.push(Line::from(Span::styled("No events", Style::default().fg(app.theme.dimmed_day))));
    }

    for (idx, event) in events.iter().enumerate() {
        let is_selected = idx == app.selected_event_index;
        let title_style = if is_selected {
            Style::default()
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.event)
        };

        lines.push(Line::from(vec![
            Span::raw(if is_selected { "> " } else { "  " }),
            Span::styled(event.title.as_str(), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(event.time_range_label(), Style::default().fg(app.theme.hour_label)),
        ]));
        if !event.description.is_empty() {
            lines.push(Line::from(format!("  {}", event.description)));
        }
        lines.push(Line::from(""));
    }

    if let Some(dragged) = &app.drag {
        lines.push(Line::from(vec![
            Span::styled("Moving: ", Style::default().fg(app.theme.drag_target).add_modifier(Modifier::BOLD)),
            Span::raw(dragged.title.as_str()),
        ]));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, area);
}
