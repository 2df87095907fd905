use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use gridcal::app::AppState;
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(event_id) = app.delete_confirmation_event_id else {
        return;
    };

    let event = app.store.get(event_id);
    let event_title = event.map(|e| e.title.as_str()).unwrap_or("this event");
    let when = event
        .map(|e| format!("{} {}", e.local_date().format("%a %b %-d"), e.time_range_label()))
        .unwrap_or_default();

    let dialog_area = centered(f.size(), 56, 9);
    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(event_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::from(when),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(app.theme.today)),
            Span::raw(" = delete | "),
            Span::styled("n", Style::default().fg(app.theme.error)),
            Span::raw(" = keep"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Confirm Delete ")
            .border_style(Style::default().fg(app.theme.error)))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
