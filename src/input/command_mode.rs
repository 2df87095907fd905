use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{Action, AppState, StatusMessage};
use crate::ui::view_state::ViewType;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    View(ViewType),
    Today,
    NewEvent(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let Some(command_text) = input.trim().strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let mut parts = command_text.split_whitespace();
    let Some(name) = parts.next() else {
        return Command::Error("Empty command".to_string());
    };
    let rest: Vec<&str> = parts.collect();

    match name {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "today" => Command::Today,
        "month" => Command::View(ViewType::Month),
        "week" => Command::View(ViewType::Week),
        "day" => Command::View(ViewType::Day),
        "goto" => match rest.first() {
            None => Command::Error("goto requires a date (YYYY-MM-DD)".to_string()),
            Some(arg) => match NaiveDate::parse_from_str(arg, "%Y-%m-%d") {
                Ok(date) => Command::Goto(date),
                Err(_) => Command::Error(format!("Invalid date: {}", arg)),
            },
        },
        "new" if rest.is_empty() => Command::NewEvent(None),
        "new" => Command::NewEvent(Some(rest.join(" "))),
        "theme" => match rest.first() {
            None => Command::Error("theme requires a theme name".to_string()),
            Some(theme) => Command::Theme(theme.to_string()),
        },
        _ => Command::Error(format!("Unknown command: {}", name)),
    }
}

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Esc => state.dispatch(Action::CancelCommand),
        KeyCode::Backspace => state.dispatch(Action::CommandBackspace),
        KeyCode::Char(c) => state.dispatch(Action::CommandInput(c)),
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            state.dispatch(Action::CancelCommand);
            execute(command, state);
        }
        _ => {}
    }
}

fn execute(command: Command, state: &mut AppState) {
    match command {
        Command::Quit => state.dispatch(Action::Quit),
        Command::Goto(date) => state.dispatch(Action::GoTo(date)),
        Command::View(view) => state.dispatch(Action::SwitchView(view)),
        Command::Today => state.dispatch(Action::Today),
        Command::NewEvent(title) => state.dispatch(Action::NewEvent { title }),
        Command::Theme(name) => state.dispatch(Action::SetTheme(name)),
        Command::Help => state.dispatch(Action::ToggleHelp),
        Command::Error(message) => state.status = Some(StatusMessage::Error(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Mode;
    use crate::storage::{DEFAULT_STORAGE_KEY, EventStore, MemoryStore};

    fn app() -> AppState {
        AppState::new(EventStore::load(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY))
    }

    fn run(state: &mut AppState, line: &str) {
        state.dispatch(Action::EnterCommandMode);
        for c in line.chars().skip(1) {
            handle_key(KeyCode::Char(c), state);
        }
        handle_key(KeyCode::Enter, state);
    }

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_goto_command_with_date() {
        let expected_date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(parse_command(":goto 2024-03-04"), Command::Goto(expected_date));
    }

    #[test]
    fn parse_goto_with_invalid_or_missing_date_returns_error() {
        assert!(matches!(parse_command(":goto 2024/03/04"), Command::Error(_)));
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_view_commands() {
        assert_eq!(parse_command(":month"), Command::View(ViewType::Month));
        assert_eq!(parse_command(":week"), Command::View(ViewType::Week));
        assert_eq!(parse_command(":day"), Command::View(ViewType::Day));
        assert_eq!(parse_command(":today"), Command::Today);
    }

    #[test]
    fn parse_new_event_with_multiple_words() {
        assert_eq!(
            parse_command(":new Sprint planning  session"),
            Command::NewEvent(Some("Sprint planning session".to_string()))
        );
        assert_eq!(parse_command(":new"), Command::NewEvent(None));
    }

    #[test]
    fn parse_theme_command() {
        assert_eq!(parse_command(":theme gruvbox"), Command::Theme("gruvbox".to_string()));
        assert!(matches!(parse_command(":theme"), Command::Error(_)));
    }

    #[test]
    fn parse_rejects_unknown_missing_colon_and_empty() {
        assert!(matches!(parse_command(":sync"), Command::Error(_)));
        assert!(matches!(parse_command("quit"), Command::Error(_)));
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }

    #[test]
    fn typed_goto_moves_anchor_and_returns_to_normal() {
        let mut state = app();

        run(&mut state, ":goto 2024-03-04");

        assert_eq!(state.selected_date(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.command_buffer.is_empty());
    }

    #[test]
    fn typed_new_opens_editor_with_title() {
        let mut state = app();

        run(&mut state, ":new Dentist");

        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.editor.as_ref().map(|e| e.title.as_str()), Some("Dentist"));
    }

    #[test]
    fn typed_quit_requests_exit() {
        let mut state = app();

        run(&mut state, ":q");

        assert!(state.should_quit);
    }

    #[test]
    fn bad_command_surfaces_error() {
        let mut state = app();

        run(&mut state, ":frobnicate");

        assert_eq!(
            state.status,
            Some(StatusMessage::Error("Unknown command: frobnicate".to_string()))
        );
    }
}
