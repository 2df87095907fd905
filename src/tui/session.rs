use std::io;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use gridcal::{
    app::AppState,
    input,
    storage::{Config, EventStore},
    ui::{GridMetrics, Theme},
};
use crate::tui::presentation::ui;

pub fn run_tui(config: &Config, store: EventStore) -> io::Result<()> {
    let metrics = GridMetrics {
        hour_height: config.ui.hour_height,
        header_offset: config.ui.header_offset,
    };
    let mut app = AppState::new(store)
        .with_theme(Theme::named_or_default(&config.ui.theme))
        .with_metrics(metrics);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("TUI exited with error: {}", err);
    }
    tracing::info!("Session ended with {} events", app.store.len());

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(key.code, app);
        }
    }
    Ok(())
}
