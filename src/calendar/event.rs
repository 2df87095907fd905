use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::time_codec;

pub type EventId = i64;

/// A timed event. Instants are stored in UTC; wall-clock values are derived
/// from the machine timezone whenever they are displayed or edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startTime", with = "iso_instant")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endTime", with = "iso_instant")]
    pub end: DateTime<Utc>,
}

/// An event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        time_codec::minutes_between(self.start, self.end)
    }

    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }

    pub fn local_date(&self) -> NaiveDate {
        time_codec::local_date(self.start)
    }

    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            time_codec::to_local_time_string(self.start),
            time_codec::to_local_time_string(self.end)
        )
    }
}

mod iso_instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
