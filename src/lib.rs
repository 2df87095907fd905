pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{Action, AppState, Mode};
pub use calendar::{DropTarget, Event, EventDraft, EventEditor, EventId};
pub use storage::{EventStore, StoreError};
pub use ui::{ViewState, ViewType};
