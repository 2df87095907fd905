mod calendar_views;
mod dialogs;
mod presentation;
mod sample_events;
mod session;

pub use sample_events::seed_sample_events;
pub use session::run_tui;
