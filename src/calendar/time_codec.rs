use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc,
};
use thiserror::Error;

pub const DEFAULT_START_TIME: &str = "09:00";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid time of day '{0}', expected HH:MM")]
    InvalidTimeOfDay(String),
    #[error("Invalid hour {0}, expected 0-23")]
    InvalidHour(u32),
    #[error("Local time {0} does not exist in this timezone")]
    NonexistentLocalTime(NaiveDateTime),
}

/// Parses a wall-clock `HH:MM` string. The hour may be one or two digits,
/// the minute is always two.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, TimeError> {
    let invalid = || TimeError::InvalidTimeOfDay(input.to_string());

    let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Minutes since midnight for an `HH:MM` string.
pub fn minutes_of_day(input: &str) -> Result<i64, TimeError> {
    let time = parse_time_of_day(input)?;
    Ok(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

pub fn format_time_of_day(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

pub fn to_absolute(date: NaiveDate, time: &str) -> Result<DateTime<Utc>, TimeError> {
    to_absolute_in(&Local, date, time)
}

pub fn to_absolute_in<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    time: &str,
) -> Result<DateTime<Utc>, TimeError> {
    let time = parse_time_of_day(time)?;
    resolve_local_in(tz, date.and_time(time))
}

/// Maps a wall-clock datetime onto an instant. Times inside a DST gap move
/// forward by an hour; ambiguous times take the earlier instant.
pub fn resolve_local_in<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
) -> Result<DateTime<Utc>, TimeError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or(TimeError::NonexistentLocalTime(naive)),
    }
}

pub fn to_local_time_string(instant: DateTime<Utc>) -> String {
    to_local_time_string_in(&Local, instant)
}

pub fn to_local_time_string_in<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>) -> String {
    let (hour, minute) = local_hour_minute_in(tz, instant);
    format_time_of_day(hour, minute)
}

pub fn local_hour_minute_in<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>) -> (u32, u32) {
    let local = instant.with_timezone(tz);
    (local.hour(), local.minute())
}

pub fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    local_date_in(&Local, instant)
}

pub fn local_date_in<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

pub fn add_minutes(instant: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    instant + Duration::minutes(minutes)
}

/// Rounded to the nearest minute, halves rounding up. Negative when the
/// instants are misordered.
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis + 30_000).div_euclid(60_000)
}
