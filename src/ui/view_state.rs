use chrono::{Datelike, Days, Local, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Month,
    Week,
    Day,
}

impl ViewType {
    pub fn label(self) -> &'static str {
        match self {
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
        }
    }
}

/// Which window of the calendar is on screen. Only changes through explicit
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub view: ViewType,
    pub anchor_date: NaiveDate,
}

impl ViewState {
    pub fn new(anchor_date: NaiveDate) -> Self {
        Self {
            view: ViewType::Month,
            anchor_date,
        }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn next(&mut self) {
        self.anchor_date = match self.view {
            ViewType::Month => shift_months(self.anchor_date, 1),
            ViewType::Week => shift_days(self.anchor_date, 7),
            ViewType::Day => shift_days(self.anchor_date, 1),
        };
    }

    pub fn prev(&mut self) {
        self.anchor_date = match self.view {
            ViewType::Month => shift_months(self.anchor_date, -1),
            ViewType::Week => shift_days(self.anchor_date, -7),
            ViewType::Day => shift_days(self.anchor_date, -1),
        };
    }

    /// Dates covered by the current view: 42 for Month, 7 for Week, 1 for Day.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        let (first, count) = match self.view {
            ViewType::Month => (month_grid_start(self.anchor_date), 42),
            ViewType::Week => (week_start(self.anchor_date), 7),
            ViewType::Day => (self.anchor_date, 1),
        };
        first.iter_days().take(count).collect()
    }

    pub fn header_title(&self) -> String {
        let format = match self.view {
            ViewType::Month => "%B %Y",
            ViewType::Week => "%B %-d, %Y",
            ViewType::Day => "%A, %B %-d, %Y",
        };
        self.anchor_date.format(format).to_string()
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_sunday = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(days_from_sunday))
        .unwrap_or(date)
}

/// First cell of the six-week month grid: the Sunday on or before the 1st.
pub fn month_grid_start(date: NaiveDate) -> NaiveDate {
    week_start(first_of_month(date))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Calendar month arithmetic. Days past the end of the target month clamp to
/// its last day, so Jan 31 + 1 month is Feb 28 or 29.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
