use chrono::NaiveDate;

use crate::calendar::Event;
use crate::ui::placement::{EventCard, GridMetrics, events_on_date_by_start};
use crate::ui::view_state::{ViewState, week_start};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub events: Vec<EventCard>,
}

impl DayColumn {
    pub fn events_in_hour(&self, hour: u32) -> impl Iterator<Item = &EventCard> {
        self.events.iter().filter(move |card| card.start_hour == hour)
    }
}

pub fn calculate_layout(view_state: &ViewState, events: &[Event], metrics: &GridMetrics) -> WeekLayout {
    let start = week_start(view_state.anchor_date);
    let today = chrono::Local::now().date_naive();

    let days = start
        .iter_days()
        .take(7)
        .map(|date| DayColumn {
            date,
            is_selected: date == view_state.anchor_date,
            is_today: date == today,
            events: events_on_date_by_start(events, date)
                .into_iter()
                .map(|event| EventCard::from_event(event, metrics))
                .collect(),
        })
        .collect();

    WeekLayout { week_start: start, days }
}
