use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use gridcal::{app::AppState, calendar::EditorField};
use crate::tui::dialogs::centered;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(editor) = &app.editor else {
        return;
    };

    let form_area = centered(f.size(), 64, 15);
    f.render_widget(Clear, form_area);

    let field = |label: &'static str, value: &str, which: EditorField| {
        let label_style = if editor.active_field == which {
            Style::default().fg(app.theme.selected_fg).bg(app.theme.selected_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dimmed_day)
        };
        let cursor = if editor.active_field == which { "_" } else { "" };
        Line::from(vec![
            Span::styled(label, label_style),
            Span::raw(" "),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    };

    let mut form_text = vec![
        field("Title:      ", &editor.title, EditorField::Title),
        field("Description:", &editor.description, EditorField::Description),
        Line::from(vec![
            Span::styled("Date:       ", Style::default().fg(app.theme.dimmed_day)),
            Span::raw(" "),
            Span::raw(editor.date.format("%A, %B %-d, %Y").to_string()),
        ]),
        field("Start:      ", &editor.start_time, EditorField::StartTime),
        field("End:        ", &editor.end_time, EditorField::EndTime),
        Line::from(""),
    ];

    let mut hints = vec![
        Span::styled("Tab", Style::default().fg(app.theme.help_section)),
        Span::raw(" next | "),
        Span::styled("Enter", Style::default().fg(app.theme.today)),
        Span::raw(" save | "),
        Span::styled("Esc", Style::default().fg(app.theme.error)),
        Span::raw(" cancel"),
    ];
    if editor.is_editing() {
        hints.push(Span::raw(" | "));
        hints.push(Span::styled("Del", Style::default().fg(app.theme.error)));
        hints.push(Span::raw(" delete"));
    }
    form_text.push(Line::from(hints));

    let block_title = if editor.is_editing() { " Edit Event " } else { " New Event " };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(block_title)
            .title_style(Style::default().fg(app.theme.title)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
