use crossterm::event::KeyCode;

use crate::app::{Action, AppState};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if state.editor.is_none() {
        return;
    }

    let action = match key {
        KeyCode::Tab => Action::EditorNextField,
        KeyCode::BackTab => Action::EditorPrevField,
        KeyCode::Backspace => Action::EditorBackspace,
        KeyCode::Char(c) => Action::EditorInput(c),
        KeyCode::Enter => Action::SubmitEditor,
        KeyCode::Esc => Action::CancelEditor,
        KeyCode::Delete => Action::DeleteFromEditor,
        _ => return,
    };
    state.dispatch(action);
}
