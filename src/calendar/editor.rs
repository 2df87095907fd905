use chrono::{Local, NaiveDate, TimeZone};
use thiserror::Error;

use crate::calendar::{
    Event, EventDraft, EventId, TimeError,
    time_codec::{self, DEFAULT_START_TIME},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Title is required")]
    EmptyTitle,
    #[error(transparent)]
    InvalidTime(#[from] TimeError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    Create(EventDraft),
    Update(Event),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Description,
    StartTime,
    EndTime,
}

/// Form state for creating or editing one event. Times are kept as the
/// `HH:MM` strings the user typed and only converted on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEditor {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub event_id: Option<EventId>,
    pub active_field: EditorField,
}

impl EventEditor {
    pub fn new(date: NaiveDate, clicked_hour: Option<u32>) -> Self {
        let (start_time, end_time) = match clicked_hour.filter(|hour| *hour < 24) {
            Some(hour) => (
                time_codec::format_time_of_day(hour, 0),
                time_codec::format_time_of_day((hour + 1) % 24, 0),
            ),
            None => (DEFAULT_START_TIME.to_string(), "10:00".to_string()),
        };

        Self {
            title: String::new(),
            description: String::new(),
            date,
            start_time,
            end_time,
            event_id: None,
            active_field: EditorField::Title,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn for_event(event: &Event) -> Self {
        Self::for_event_in(&Local, event)
    }

    pub fn for_event_in<Tz: TimeZone>(tz: &Tz, event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: time_codec::local_date_in(tz, event.start),
            start_time: time_codec::to_local_time_string_in(tz, event.start),
            end_time: time_codec::to_local_time_string_in(tz, event.end),
            event_id: Some(event.id),
            active_field: EditorField::Title,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            EditorField::Title => EditorField::Description,
            EditorField::Description => EditorField::StartTime,
            EditorField::StartTime => EditorField::EndTime,
            EditorField::EndTime => EditorField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            EditorField::Title => EditorField::EndTime,
            EditorField::Description => EditorField::Title,
            EditorField::StartTime => EditorField::Description,
            EditorField::EndTime => EditorField::StartTime,
        };
    }

    pub fn active_buffer_mut(&mut self) -> &mut String {
        match self.active_field {
            EditorField::Title => &mut self.title,
            EditorField::Description => &mut self.description,
            EditorField::StartTime => &mut self.start_time,
            EditorField::EndTime => &mut self.end_time,
        }
    }

    pub fn submit(&self) -> Result<EditorIntent, EditorError> {
        self.submit_in(&Local)
    }

    /// Builds the event from the form. The end instant is the start instant
    /// plus the raw `end - start` wall-clock difference, which is negative
    /// when the end time is earlier than the start time.
    pub fn submit_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<EditorIntent, EditorError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EditorError::EmptyTitle);
        }

        let start = time_codec::to_absolute_in(tz, self.date, &self.start_time)?;
        let duration =
            time_codec::minutes_of_day(&self.end_time)? - time_codec::minutes_of_day(&self.start_time)?;
        if duration <= 0 {
            tracing::warn!(
                "Event '{}' ends at {} which is not after its start {} ({} min)",
                title,
                self.end_time,
                self.start_time,
                duration
            );
        }
        let end = time_codec::add_minutes(start, duration);

        let intent = match self.event_id {
            Some(id) => EditorIntent::Update(Event {
                id,
                title: title.to_string(),
                description: self.description.clone(),
                start,
                end,
            }),
            None => EditorIntent::Create(EventDraft {
                title: title.to_string(),
                description: self.description.clone(),
                start,
                end,
            }),
        };
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn plus_one() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    fn filled(start: &str, end: &str) -> EventEditor {
        let mut editor = EventEditor::new(date(2024, 3, 4), None).with_title("Standup");
        editor.start_time = start.to_string();
        editor.end_time = end.to_string();
        editor
    }

    #[test]
    fn new_editor_defaults_to_nine_to_ten() {
        let editor = EventEditor::new(date(2024, 3, 4), None);

        assert_eq!(editor.start_time, "09:00");
        assert_eq!(editor.end_time, "10:00");
        assert!(!editor.is_editing());
    }

    #[test]
    fn clicked_hour_sets_default_times() {
        let editor = EventEditor::new(date(2024, 3, 4), Some(14));

        assert_eq!(editor.start_time, "14:00");
        assert_eq!(editor.end_time, "15:00");
    }

    #[test]
    fn default_end_wraps_at_midnight() {
        let editor = EventEditor::new(date(2024, 3, 4), Some(23));

        assert_eq!(editor.start_time, "23:00");
        assert_eq!(editor.end_time, "00:00");
    }

    #[test]
    fn fields_cycle_in_both_directions() {
        let mut editor = EventEditor::new(date(2024, 3, 4), None);

        editor.next_field();
        assert_eq!(editor.active_field, EditorField::Description);
        editor.next_field();
        editor.next_field();
        assert_eq!(editor.active_field, EditorField::EndTime);
        editor.next_field();
        assert_eq!(editor.active_field, EditorField::Title);
        editor.prev_field();
        assert_eq!(editor.active_field, EditorField::EndTime);
    }

    #[test]
    fn active_buffer_follows_field() {
        let mut editor = EventEditor::new(date(2024, 3, 4), None);
        editor.active_field = EditorField::StartTime;

        editor.active_buffer_mut().clear();
        editor.active_buffer_mut().push_str("08:15");

        assert_eq!(editor.start_time, "08:15");
    }

    #[test]
    fn blank_title_is_rejected() {
        let editor = EventEditor::new(date(2024, 3, 4), None).with_title("   ");

        assert_eq!(editor.submit_in(&Utc), Err(EditorError::EmptyTitle));
    }

    #[test]
    fn malformed_time_is_rejected() {
        let editor = filled("9am", "10:00");

        assert!(matches!(editor.submit_in(&Utc), Err(EditorError::InvalidTime(_))));
    }

    #[test]
    fn submit_creates_draft_in_local_time() {
        let editor = filled("09:00", "09:30");

        let Ok(EditorIntent::Create(draft)) = editor.submit_in(&plus_one()) else {
            panic!("expected a create intent");
        };

        assert_eq!(draft.title, "Standup");
        assert_eq!(draft.start, Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap());
        assert_eq!(draft.end - draft.start, Duration::minutes(30));
    }

    #[test]
    fn submit_trims_title() {
        let editor = filled("09:00", "09:30").with_title("  Standup  ");

        let Ok(EditorIntent::Create(draft)) = editor.submit_in(&Utc) else {
            panic!("expected a create intent");
        };

        assert_eq!(draft.title, "Standup");
    }

    #[test]
    fn end_before_start_passes_negative_duration_through() {
        let editor = filled("22:00", "01:00");

        let Ok(EditorIntent::Create(draft)) = editor.submit_in(&Utc) else {
            panic!("expected a create intent");
        };

        assert_eq!(draft.end - draft.start, Duration::minutes(-21 * 60));
    }

    #[test]
    fn editing_existing_event_prefills_local_fields() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 23, 15, 0).unwrap();
        let event = Event {
            id: 9,
            title: "Late call".to_string(),
            description: "APAC".to_string(),
            start,
            end: start + Duration::minutes(45),
        };

        let editor = EventEditor::for_event_in(&plus_one(), &event);

        assert_eq!(editor.date, date(2024, 3, 5));
        assert_eq!(editor.start_time, "00:15");
        assert_eq!(editor.end_time, "01:00");
        assert_eq!(editor.event_id, Some(9));
    }

    #[test]
    fn submitting_edit_produces_update_with_same_id() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let event = Event {
            id: 9,
            title: "Sync".to_string(),
            description: String::new(),
            start,
            end: start + Duration::hours(1),
        };
        let mut editor = EventEditor::for_event_in(&Utc, &event);
        editor.end_time = "11:30".to_string();

        let Ok(EditorIntent::Update(updated)) = editor.submit_in(&Utc) else {
            panic!("expected an update intent");
        };

        assert_eq!(updated.id, 9);
        assert_eq!(updated.start, start);
        assert_eq!(updated.duration_minutes(), 150);
    }
}
