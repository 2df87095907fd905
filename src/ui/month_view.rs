use chrono::{Datelike, NaiveDate};

use crate::calendar::Event;
use crate::ui::placement::{EventCard, GridMetrics, events_on_date};
use crate::ui::view_state::{ViewState, month_grid_start};

pub const MONTH_GRID_DAYS: usize = 42;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_dimmed: bool,
    pub events: Vec<EventCard>,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            is_dimmed: false,
            events: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_dimmed(mut self, dimmed: bool) -> Self {
        self.is_dimmed = dimmed;
        self
    }

    pub fn with_events(mut self, events: Vec<EventCard>) -> Self {
        self.events = events;
        self
    }
}

impl MonthLayout {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

pub fn calculate_layout(view_state: &ViewState, events: &[Event], metrics: &GridMetrics) -> MonthLayout {
    let anchor = view_state.anchor_date;
    let (year, month) = (anchor.year(), anchor.month());
    let today = chrono::Local::now().date_naive();

    let cells = month_grid_start(anchor)
        .iter_days()
        .take(MONTH_GRID_DAYS)
        .map(|date| {
            let cards = events_on_date(events, date)
                .into_iter()
                .map(|event| EventCard::from_event(event, metrics))
                .collect();

            DayCell::new(date)
                .with_selected(date == anchor)
                .with_today(date == today)
                .with_dimmed(date.year() != year || date.month() != month)
                .with_events(cards)
        })
        .collect();

    MonthLayout { year, month, cells }
}
