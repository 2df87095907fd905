use chrono::{Local, NaiveDate, Timelike};

use crate::calendar::{DropTarget, EditorIntent, Event, EventEditor, EventId, drag};
use crate::storage::{EventStore, StoreError};
use crate::ui::placement::{GridMetrics, HOURS_PER_DAY, events_on_date, events_on_date_by_start};
use crate::ui::theme::Theme;
use crate::ui::view_state::{ViewState, ViewType, shift_days};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Drag,
    Command,
    ConfirmDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// An event picked up with the keyboard. The cursor position at grab time is
/// kept so a cancelled drag puts the view back where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub event_id: EventId,
    pub title: String,
    pub payload: String,
    origin: ViewState,
    origin_hour: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SwitchView(ViewType),
    NextPeriod,
    PrevPeriod,
    Today,
    GoTo(NaiveDate),
    MoveDays(i64),
    MoveHours(i32),
    CycleEvent,
    NewEvent { title: Option<String> },
    EditSelected,
    EditorNextField,
    EditorPrevField,
    EditorInput(char),
    EditorBackspace,
    SubmitEditor,
    CancelEditor,
    DeleteFromEditor,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    BeginDrag,
    Drop,
    CancelDrag,
    EnterCommandMode,
    CommandInput(char),
    CommandBackspace,
    CancelCommand,
    SetTheme(String),
    ToggleHelp,
    ScrollHelp(i32),
    Quit,
}

pub struct AppState {
    pub mode: Mode,
    pub view_state: ViewState,
    pub selected_hour: u32,
    pub selected_event_index: usize,
    pub store: EventStore,
    pub editor: Option<EventEditor>,
    pub drag: Option<DragState>,
    pub delete_confirmation_event_id: Option<EventId>,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub metrics: GridMetrics,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self {
            mode: Mode::Normal,
            view_state: ViewState::today(),
            selected_hour: Local::now().hour(),
            selected_event_index: 0,
            store,
            editor: None,
            drag: None,
            delete_confirmation_event_id: None,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            metrics: GridMetrics::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_metrics(mut self, metrics: GridMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_view_state(mut self, view_state: ViewState) -> Self {
        self.view_state = view_state;
        self
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.view_state.anchor_date
    }

    /// Events of the cursor's date in the order the current view lists them.
    pub fn events_for_selected_date(&self) -> Vec<&Event> {
        let events = self.store.list();
        match self.view_state.view {
            ViewType::Month => events_on_date(events, self.selected_date()),
            ViewType::Week | ViewType::Day => events_on_date_by_start(events, self.selected_date()),
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.events_for_selected_date()
            .get(self.selected_event_index)
            .copied()
    }

    /// Where a drop would land: Month cells carry only the date, hourly views
    /// add the cursor hour.
    pub fn drop_target(&self) -> DropTarget {
        match self.view_state.view {
            ViewType::Month => DropTarget::day(self.selected_date()),
            ViewType::Week | ViewType::Day => DropTarget::hour(self.selected_date(), self.selected_hour),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::SwitchView(view) => {
                let selected_id = self.selected_event().map(|event| event.id);
                self.view_state.set_view(view);
                self.reset_event_selection();
                if let Some(id) = selected_id {
                    self.select_event(id);
                }
            }
            Action::NextPeriod => {
                self.view_state.next();
                self.reset_event_selection();
            }
            Action::PrevPeriod => {
                self.view_state.prev();
                self.reset_event_selection();
            }
            Action::Today => self.go_to(Local::now().date_naive()),
            Action::GoTo(date) => self.go_to(date),
            Action::MoveDays(days) => self.go_to(shift_days(self.selected_date(), days)),
            Action::MoveHours(hours) => self.move_hours(hours),
            Action::CycleEvent => self.cycle_event(),
            Action::NewEvent { title } => self.open_new_event(title),
            Action::EditSelected => self.edit_selected(),
            Action::EditorNextField => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.next_field();
                }
            }
            Action::EditorPrevField => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.prev_field();
                }
            }
            Action::EditorInput(c) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.active_buffer_mut().push(c);
                }
            }
            Action::EditorBackspace => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.active_buffer_mut().pop();
                }
            }
            Action::SubmitEditor => self.submit_editor(),
            Action::CancelEditor => self.close_editor(),
            Action::DeleteFromEditor => self.delete_from_editor(),
            Action::RequestDelete => self.request_delete(),
            Action::ConfirmDelete => self.confirm_delete(),
            Action::CancelDelete => {
                self.delete_confirmation_event_id = None;
                self.mode = Mode::Normal;
            }
            Action::BeginDrag => self.begin_drag(),
            Action::Drop => self.drop_dragged(),
            Action::CancelDrag => self.cancel_drag(),
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer = ":".to_string();
            }
            Action::CommandInput(c) => self.command_buffer.push(c),
            Action::CommandBackspace => {
                self.command_buffer.pop();
                if self.command_buffer.is_empty() {
                    self.mode = Mode::Normal;
                }
            }
            Action::CancelCommand => {
                self.command_buffer.clear();
                self.mode = Mode::Normal;
            }
            Action::SetTheme(name) => match Theme::named(&name) {
                Some(theme) => {
                    self.theme = theme;
                    self.info(format!("Theme set to {}", name));
                }
                None => self.error(format!("Unknown theme: {}", name)),
            },
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.help_scroll = 0;
            }
            Action::ScrollHelp(lines) => {
                self.help_scroll = self.help_scroll.saturating_add_signed(lines as isize);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn go_to(&mut self, date: NaiveDate) {
        self.view_state.anchor_date = date;
        self.reset_event_selection();
    }

    fn move_hours(&mut self, hours: i32) {
        let hour = self.selected_hour as i32 + hours;
        self.selected_hour = hour.clamp(0, HOURS_PER_DAY as i32 - 1) as u32;
    }

    fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }

    fn cycle_event(&mut self) {
        let count = self.events_for_selected_date().len();
        if count > 0 {
            self.selected_event_index = (self.selected_event_index + 1) % count;
        }
    }

    fn open_new_event(&mut self, title: Option<String>) {
        let clicked_hour = match self.view_state.view {
            ViewType::Month => None,
            ViewType::Week | ViewType::Day => Some(self.selected_hour),
        };
        let mut editor = EventEditor::new(self.selected_date(), clicked_hour);
        if let Some(title) = title {
            editor = editor.with_title(title);
        }
        self.editor = Some(editor);
        self.mode = Mode::Insert;
    }

    fn edit_selected(&mut self) {
        if let Some(event) = self.selected_event() {
            self.editor = Some(EventEditor::for_event(event));
            self.mode = Mode::Insert;
        }
    }

    fn close_editor(&mut self) {
        self.editor = None;
        self.mode = Mode::Normal;
    }

    fn submit_editor(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };

        let intent = match editor.submit() {
            Ok(intent) => intent,
            Err(e) => {
                self.error(e.to_string());
                return;
            }
        };

        let result = match intent {
            EditorIntent::Create(draft) => self
                .store
                .add(draft)
                .map(|event| format!("Created '{}'", event.title)),
            EditorIntent::Update(event) => {
                let title = event.title.clone();
                self.store.update(event).map(|()| format!("Updated '{}'", title))
            }
        };
        self.close_editor();
        self.report(result);
    }

    fn delete_from_editor(&mut self) {
        let Some(id) = self.editor.as_ref().and_then(|editor| editor.event_id) else {
            return;
        };
        self.close_editor();
        let result = self
            .store
            .delete(id)
            .map(|event| format!("Deleted '{}'", event.title));
        self.report(result);
        self.clamp_event_selection();
    }

    fn request_delete(&mut self) {
        if let Some(id) = self.selected_event().map(|event| event.id) {
            self.delete_confirmation_event_id = Some(id);
            self.mode = Mode::ConfirmDelete;
        }
    }

    fn confirm_delete(&mut self) {
        self.mode = Mode::Normal;
        let Some(id) = self.delete_confirmation_event_id.take() else {
            return;
        };
        let result = self
            .store
            .delete(id)
            .map(|event| format!("Deleted '{}'", event.title));
        self.report(result);
        self.clamp_event_selection();
    }

    fn clamp_event_selection(&mut self) {
        let count = self.events_for_selected_date().len();
        if self.selected_event_index >= count {
            self.selected_event_index = count.saturating_sub(1);
        }
    }

    fn begin_drag(&mut self) {
        let Some(event) = self.selected_event() else {
            return;
        };
        let (event_id, title) = (event.id, event.title.clone());

        match drag::encode_payload(event) {
            Ok(payload) => {
                self.drag = Some(DragState {
                    event_id,
                    title: title.clone(),
                    payload,
                    origin: self.view_state,
                    origin_hour: self.selected_hour,
                });
                self.mode = Mode::Drag;
                self.info(format!("Moving '{}': pick a slot, Enter to drop", title));
            }
            Err(e) => self.error(format!("Cannot move '{}': {}", title, e)),
        }
    }

    fn drop_dragged(&mut self) {
        self.mode = Mode::Normal;
        let Some(dragged) = self.drag.take() else {
            return;
        };

        let Some(moved) = drag::apply_drop(&dragged.payload, self.drop_target()) else {
            return;
        };
        let label = format!("Moved '{}' to {} {}", moved.title, moved.local_date(), moved.time_range_label());
        let result = self.store.update(moved).map(|()| label);
        self.report(result);
        self.select_event(dragged.event_id);
    }

    fn cancel_drag(&mut self) {
        if let Some(dragged) = self.drag.take() {
            self.view_state = dragged.origin;
            self.selected_hour = dragged.origin_hour;
        }
        self.mode = Mode::Normal;
        self.status = None;
    }

    fn select_event(&mut self, id: EventId) {
        if let Some(index) = self
            .events_for_selected_date()
            .iter()
            .position(|event| event.id == id)
        {
            self.selected_event_index = index;
        }
    }

    fn report(&mut self, result: Result<String, StoreError>) {
        match result {
            Ok(message) => self.info(message),
            Err(e) => self.error(e.to_string()),
        }
    }

    fn info(&mut self, message: String) {
        self.status = Some(StatusMessage::Info(message));
    }

    fn error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.status = Some(StatusMessage::Error(message));
    }
}
