use chrono::NaiveDate;

use crate::calendar::Event;
use crate::ui::placement::{EventCard, GridMetrics, HOURS_PER_DAY, events_on_date_by_start};
use crate::ui::view_state::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    pub hours: Vec<HourSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourSlot {
    pub hour: u32,
    pub top: f32,
    pub events: Vec<EventCard>,
}

pub fn calculate_layout(view_state: &ViewState, events: &[Event], metrics: &GridMetrics) -> DayLayout {
    let date = view_state.anchor_date;
    let today = chrono::Local::now().date_naive();
    let cards: Vec<EventCard> = events_on_date_by_start(events, date)
        .into_iter()
        .map(|event| EventCard::from_event(event, metrics))
        .collect();

    DayLayout {
        date,
        is_today: date == today,
        hours: build_hour_slots(&cards, metrics),
    }
}

fn build_hour_slots(cards: &[EventCard], metrics: &GridMetrics) -> Vec<HourSlot> {
    (0..HOURS_PER_DAY)
        .map(|hour| HourSlot {
            hour,
            top: metrics.slot_top(hour),
            events: cards
                .iter()
                .filter(|card| card.start_hour == hour)
                .cloned()
                .collect(),
        })
        .collect()
}
