pub mod command_mode;
pub mod drag_mode;
pub mod insert_mode;
pub mod normal_mode;

use crossterm::event::KeyCode;

use crate::app::{Action, AppState, Mode};

/// Routes a key press to the handler of the current mode. The help overlay
/// captures keys while it is open.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if state.show_help {
        match key {
            KeyCode::Char('j') | KeyCode::Down => state.dispatch(Action::ScrollHelp(1)),
            KeyCode::Char('k') | KeyCode::Up => state.dispatch(Action::ScrollHelp(-1)),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => state.dispatch(Action::ToggleHelp),
            _ => {}
        }
        return;
    }

    match state.mode {
        Mode::Normal => normal_mode::handle_key(key, state),
        Mode::Insert => insert_mode::handle_key(key, state),
        Mode::Drag => drag_mode::handle_key(key, state),
        Mode::Command => command_mode::handle_key(key, state),
        Mode::ConfirmDelete => match key {
            KeyCode::Char('y') | KeyCode::Enter => state.dispatch(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => state.dispatch(Action::CancelDelete),
            _ => {}
        },
    }
}
