use crossterm::event::KeyCode;

use crate::app::{Action, AppState};
use crate::ui::view_state::ViewType;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if let Some(action) = cursor_action(key, state.view_state.view) {
        state.dispatch(action);
        return;
    }

    let action = match key {
        KeyCode::Char('n') => Action::NextPeriod,
        KeyCode::Char('p') => Action::PrevPeriod,
        KeyCode::Char('t') => Action::Today,
        KeyCode::Char('m') => Action::SwitchView(ViewType::Month),
        KeyCode::Char('w') => Action::SwitchView(ViewType::Week),
        KeyCode::Char('d') => Action::SwitchView(ViewType::Day),
        KeyCode::Char('a') => Action::NewEvent { title: None },
        KeyCode::Tab => Action::CycleEvent,
        KeyCode::Enter => Action::EditSelected,
        KeyCode::Char('x') => Action::RequestDelete,
        KeyCode::Char('g') => Action::BeginDrag,
        KeyCode::Char(':') => Action::EnterCommandMode,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('q') => Action::Quit,
        _ => return,
    };
    state.dispatch(action);
}

/// Cursor movement shared by normal and drag mode. Vertical keys step a week
/// in the month grid and an hour in the hourly grids.
pub fn cursor_action(key: KeyCode, view: ViewType) -> Option<Action> {
    let action = match key {
        KeyCode::Char('h') | KeyCode::Left => Action::MoveDays(-1),
        KeyCode::Char('l') | KeyCode::Right => Action::MoveDays(1),
        KeyCode::Char('j') | KeyCode::Down => match view {
            ViewType::Month => Action::MoveDays(7),
            ViewType::Week | ViewType::Day => Action::MoveHours(1),
        },
        KeyCode::Char('k') | KeyCode::Up => match view {
            ViewType::Month => Action::MoveDays(-7),
            ViewType::Week | ViewType::Day => Action::MoveHours(-1),
        },
        _ => return None,
    };
    Some(action)
}
