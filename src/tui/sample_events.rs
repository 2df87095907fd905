use chrono::{Duration, Local, NaiveDate};
use gridcal::{
    calendar::{EventDraft, time_codec},
    storage::{EventStore, StoreError},
};

const SAMPLES: [(&str, i64, &str, i64); 6] = [
    ("Morning Standup", 0, "09:00", 30),
    ("Team Sync", 0, "14:00", 60),
    ("Code Review", 1, "10:00", 60),
    ("Sprint Planning", 1, "15:00", 90),
    ("1-on-1", -1, "11:00", 30),
    ("Lunch with Team", -1, "12:30", 60),
];

/// Adds a few events around today when the store is empty. Returns how many
/// were added.
pub fn seed_sample_events(store: &mut EventStore) -> Result<usize, StoreError> {
    seed_sample_events_around(store, Local::now().date_naive())
}

fn seed_sample_events_around(store: &mut EventStore, today: NaiveDate) -> Result<usize, StoreError> {
    if !store.is_empty() {
        return Ok(0);
    }

    let mut added = 0;
    for (title, day_offset, time, minutes) in SAMPLES {
        let date = today + Duration::days(day_offset);
        let start = match time_codec::to_absolute(date, time) {
            Ok(start) => start,
            Err(e) => {
                tracing::warn!("Skipping sample '{}': {}", title, e);
                continue;
            }
        };
        store.add(EventDraft {
            title: title.to_string(),
            description: "Sample event".to_string(),
            start,
            end: time_codec::add_minutes(start, minutes),
        })?;
        added += 1;
    }
    Ok(added)
}
