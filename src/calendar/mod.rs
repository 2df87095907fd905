pub mod drag;
pub mod editor;
pub mod event;
pub mod time_codec;

pub use drag::DropTarget;
pub use editor::{EditorError, EditorField, EditorIntent, EventEditor};
pub use event::{Event, EventDraft, EventId};
pub use time_codec::TimeError;
