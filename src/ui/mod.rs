pub mod day_view;
pub mod month_view;
pub mod placement;
pub mod theme;
pub mod view_state;
pub mod week_view;

pub use placement::{EventCard, GridMetrics};
pub use theme::Theme;
pub use view_state::{ViewState, ViewType};
