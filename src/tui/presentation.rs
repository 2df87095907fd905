use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use gridcal::{
    app::{AppState, Mode, StatusMessage},
    ui::ViewType,
};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    let title_text = format!(
        "{}  [{} | {}]",
        app.view_state.header_title(),
        app.view_state.view.label(),
        mode_label(app.mode)
    );
    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" gridcal "));
    f.render_widget(title, main_chunks[0]);

    match app.view_state.view {
        ViewType::Month => calendar_views::month::render(f, app, content_chunks[0]),
        ViewType::Week => calendar_views::week::render(f, app, content_chunks[0]),
        ViewType::Day => calendar_views::day::render(f, app, content_chunks[0]),
    }

    calendar_views::event_list::render(f, app, content_chunks[1]);

    let (status_text, status_color, alignment) = match (&app.mode, &app.status) {
        (Mode::Command, _) => (app.command_buffer.clone(), app.theme.status_bar, Alignment::Left),
        (_, Some(StatusMessage::Error(message))) => (message.clone(), app.theme.error, Alignment::Center),
        (_, Some(StatusMessage::Info(message))) => (message.clone(), app.theme.status_bar, Alignment::Center),
        (_, None) => (
            format!("Events: {} | '?' for help, 'q' to quit", app.store.len()),
            app.theme.status_bar,
            Alignment::Center,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.editor.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.delete_confirmation_event_id.is_some() {
        dialogs::delete_confirmation::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "NORMAL",
        Mode::Insert => "INSERT",
        Mode::Drag => "DRAG",
        Mode::Command => "COMMAND",
        Mode::ConfirmDelete => "CONFIRM",
    }
}
