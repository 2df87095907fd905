use chrono::{NaiveDate, Timelike};

use crate::calendar::{Event, EventId};

pub const HOURS_PER_DAY: u32 = 24;

/// Pixel geometry of the hourly grids. Events are positioned by start time
/// only; overlapping events share the same offset and simply stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub hour_height: f32,
    pub header_offset: f32,
}

impl GridMetrics {
    pub fn offset_for(&self, hour: u32, minute: u32) -> f32 {
        hour as f32 * self.hour_height
            + (minute as f32 / 60.0) * self.hour_height
            + self.header_offset
    }

    pub fn slot_top(&self, hour: u32) -> f32 {
        self.offset_for(hour, 0)
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            header_offset: 28.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub event_id: EventId,
    pub title: String,
    pub time_label: String,
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: i64,
    pub offset: f32,
}

impl EventCard {
    pub fn from_event(event: &Event, metrics: &GridMetrics) -> Self {
        let local_start = event.start.with_timezone(&chrono::Local);
        let (start_hour, start_minute) = (local_start.hour(), local_start.minute());
        Self {
            event_id: event.id,
            title: event.title.clone(),
            time_label: event.time_range_label(),
            start_hour,
            start_minute,
            duration_minutes: event.duration_minutes(),
            offset: metrics.offset_for(start_hour, start_minute),
        }
    }
}

/// Events whose local start date is `date`, in store order. An event is
/// shown on its start date only, even when it runs past midnight.
pub fn events_on_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.local_date() == date)
        .collect()
}

pub fn events_on_date_by_start(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let mut on_date = events_on_date(events, date);
    on_date.sort_by_key(|event| event.start);
    on_date
}
