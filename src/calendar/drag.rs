use chrono::{Local, NaiveDate, NaiveTime, TimeZone};

use crate::calendar::{Event, TimeError, time_codec};

/// Where a dragged event was released. Month cells carry no hour; Week and
/// Day slots do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub date: NaiveDate,
    pub hour: Option<u32>,
}

impl DropTarget {
    pub fn day(date: NaiveDate) -> Self {
        Self { date, hour: None }
    }

    pub fn hour(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour: Some(hour) }
    }
}

pub fn reschedule(event: &Event, target: DropTarget) -> Result<Event, TimeError> {
    reschedule_in(&Local, event, target)
}

/// Moves `event` onto `target`, keeping its exact duration.
///
/// Without a target hour the local start time of day is kept and only the
/// date changes. With one, the event starts at the top of that hour.
pub fn reschedule_in<Tz: TimeZone>(
    tz: &Tz,
    event: &Event,
    target: DropTarget,
) -> Result<Event, TimeError> {
    let start_time = match target.hour {
        Some(hour) => NaiveTime::from_hms_opt(hour, 0, 0).ok_or(TimeError::InvalidHour(hour))?,
        None => {
            let (hour, minute) = time_codec::local_hour_minute_in(tz, event.start);
            NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::InvalidHour(hour))?
        }
    };

    let duration = event.duration();
    let start = time_codec::resolve_local_in(tz, target.date.and_time(start_time))?;

    Ok(Event {
        start,
        end: start + duration,
        ..event.clone()
    })
}

pub fn encode_payload(event: &Event) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

pub fn decode_payload(payload: &str) -> Option<Event> {
    match serde_json::from_str(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::debug!("Ignoring drop with unreadable payload: {}", e);
            None
        }
    }
}

/// Parses a drag payload and reschedules it. Any failure makes the drop a
/// no-op.
pub fn apply_drop(payload: &str, target: DropTarget) -> Option<Event> {
    apply_drop_in(&Local, payload, target)
}

pub fn apply_drop_in<Tz: TimeZone>(tz: &Tz, payload: &str, target: DropTarget) -> Option<Event> {
    let dragged = decode_payload(payload)?;
    match reschedule_in(tz, &dragged, target) {
        Ok(moved) => Some(moved),
        Err(e) => {
            tracing::debug!("Ignoring drop of event {}: {}", dragged.id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset, Utc};
    use chrono_tz::America::New_York;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn minus_five() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn event_at(tz: &FixedOffset, day: NaiveDate, time: &str, minutes: i64) -> Event {
        let start = time_codec::to_absolute_in(tz, day, time).unwrap();
        Event {
            id: 3,
            title: "Review".to_string(),
            description: "Quarterly".to_string(),
            start,
            end: start + Duration::minutes(minutes),
        }
    }

    #[test]
    fn day_drop_keeps_local_time_of_day() {
        let tz = minus_five();
        let event = event_at(&tz, date(2024, 3, 4), "10:45", 50);

        let moved = reschedule_in(&tz, &event, DropTarget::day(date(2024, 3, 20))).unwrap();

        assert_eq!(time_codec::to_local_time_string_in(&tz, moved.start), "10:45");
        assert_eq!(time_codec::local_date_in(&tz, moved.start), date(2024, 3, 20));
        assert_eq!(moved.duration(), Duration::minutes(50));
    }

    #[test]
    fn day_drop_into_dst_gap_keeps_duration() {
        let start = time_codec::to_absolute_in(&New_York, date(2024, 3, 9), "02:30").unwrap();
        let event = Event {
            id: 4,
            title: "Night shift".to_string(),
            description: String::new(),
            start,
            end: start + Duration::minutes(90),
        };

        let moved = reschedule_in(&New_York, &event, DropTarget::day(date(2024, 3, 10))).unwrap();

        assert_eq!(time_codec::to_local_time_string_in(&New_York, moved.start), "03:30");
        assert_eq!(time_codec::local_date_in(&New_York, moved.start), date(2024, 3, 10));
        assert_eq!(moved.duration(), Duration::minutes(90));
        assert_eq!(time_codec::minutes_between(moved.start, moved.end), 90);
    }

    #[test]
    fn hour_drop_into_dst_gap_lands_after_the_jump() {
        let start = time_codec::to_absolute_in(&New_York, date(2024, 3, 8), "09:00").unwrap();
        let event = Event {
            id: 5,
            title: "Early call".to_string(),
            description: String::new(),
            start,
            end: start + Duration::minutes(45),
        };

        let moved = reschedule_in(&New_York, &event, DropTarget::hour(date(2024, 3, 10), 2)).unwrap();

        assert_eq!(moved.start, Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap());
        assert_eq!(moved.end - moved.start, Duration::minutes(45));
    }

    #[test]
    fn hour_drop_starts_at_top_of_hour() {
        let tz = minus_five();
        let event = event_at(&tz, date(2024, 3, 4), "10:45", 50);

        let moved = reschedule_in(&tz, &event, DropTarget::hour(date(2024, 3, 6), 16)).unwrap();

        assert_eq!(time_codec::to_local_time_string_in(&tz, moved.start), "16:00");
        assert_eq!(time_codec::to_local_time_string_in(&tz, moved.end), "16:50");
        assert_eq!(time_codec::local_date_in(&tz, moved.start), date(2024, 3, 6));
    }

    #[test]
    fn reschedule_keeps_identity_and_text() {
        let tz = minus_five();
        let event = event_at(&tz, date(2024, 3, 4), "08:00", 30);

        let moved = reschedule_in(&tz, &event, DropTarget::hour(date(2024, 3, 5), 9)).unwrap();

        assert_eq!(moved.id, event.id);
        assert_eq!(moved.title, event.title);
        assert_eq!(moved.description, event.description);
    }

    #[test]
    fn late_hour_drop_spills_past_midnight_with_same_duration() {
        let tz = minus_five();
        let event = event_at(&tz, date(2024, 3, 4), "08:00", 120);

        let moved = reschedule_in(&tz, &event, DropTarget::hour(date(2024, 3, 4), 23)).unwrap();

        assert_eq!(time_codec::local_date_in(&tz, moved.end), date(2024, 3, 5));
        assert_eq!(moved.duration_minutes(), 120);
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        let event = event_at(&minus_five(), date(2024, 3, 4), "08:00", 30);

        let result = reschedule_in(&Utc, &event, DropTarget::hour(date(2024, 3, 4), 24));

        assert_eq!(result, Err(TimeError::InvalidHour(24)));
    }

    #[test]
    fn payload_round_trips_event() {
        let event = event_at(&minus_five(), date(2024, 3, 4), "08:00", 30);

        let payload = encode_payload(&event).unwrap();

        assert_eq!(decode_payload(&payload), Some(event));
    }

    #[test]
    fn garbage_payload_makes_drop_a_no_op() {
        assert_eq!(apply_drop("", DropTarget::day(date(2024, 3, 4))), None);
        assert_eq!(apply_drop("{\"id\":", DropTarget::day(date(2024, 3, 4))), None);
        assert_eq!(apply_drop("[1,2,3]", DropTarget::hour(date(2024, 3, 4), 9)), None);
    }

    #[test]
    fn apply_drop_moves_decoded_event() {
        let tz = minus_five();
        let event = event_at(&tz, date(2024, 3, 4), "09:00", 30);
        let payload = encode_payload(&event).unwrap();

        let moved = apply_drop_in(&tz, &payload, DropTarget::hour(date(2024, 3, 5), 14)).unwrap();

        assert_eq!(time_codec::to_local_time_string_in(&tz, moved.start), "14:00");
        assert_eq!(moved.duration_minutes(), 30);
    }

    fn arbitrary_event() -> impl Strategy<Value = Event> {
        (0i64..4_000_000_000, 1i64..100_000, 0i64..60_000).prop_map(|(start_secs, minutes, ms)| {
            let start = DateTime::<Utc>::from_timestamp(start_secs, 0).unwrap();
            Event {
                id: 1,
                title: "Any".to_string(),
                description: String::new(),
                start,
                end: start + Duration::minutes(minutes) + Duration::milliseconds(ms),
            }
        })
    }

    proptest! {
        #[test]
        fn day_drop_preserves_duration(
            event in arbitrary_event(),
            day_offset in -400i64..400,
            offset_hours in -12i32..=14,
        ) {
            let tz = FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let target = date(2024, 6, 1) + Duration::days(day_offset);

            let moved = reschedule_in(&tz, &event, DropTarget::day(target)).unwrap();

            prop_assert_eq!(moved.duration(), event.duration());
            prop_assert_eq!(
                time_codec::minutes_between(moved.start, moved.end),
                time_codec::minutes_between(event.start, event.end)
            );
        }

        #[test]
        fn hour_drop_preserves_duration(
            event in arbitrary_event(),
            day_offset in -400i64..400,
            hour in 0u32..24,
        ) {
            let target = date(2024, 6, 1) + Duration::days(day_offset);

            let moved = reschedule_in(&Utc, &event, DropTarget::hour(target, hour)).unwrap();

            prop_assert_eq!(moved.duration(), event.duration());
            prop_assert_eq!(time_codec::local_hour_minute_in(&Utc, moved.start), (hour, 0));
        }
    }
}
