use crossterm::event::KeyCode;

use crate::app::{Action, AppState};
use crate::input::normal_mode::cursor_action;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if let Some(action) = cursor_action(key, state.view_state.view) {
        state.dispatch(action);
        return;
    }

    match key {
        KeyCode::Enter => state.dispatch(Action::Drop),
        KeyCode::Esc => state.dispatch(Action::CancelDrag),
        _ => {}
    }
}
