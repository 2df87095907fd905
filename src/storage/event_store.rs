use std::collections::HashSet;

use thiserror::Error;

use crate::calendar::{Event, EventDraft, EventId};
use crate::storage::kv::{KeyValueStore, KvError};

pub const DEFAULT_STORAGE_KEY: &str = "calendar-events";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Event {0} not found")]
    NotFound(EventId),
    #[error("Failed to persist events: {0}")]
    Persist(#[from] KvError),
    #[error("Failed to serialize events: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("No event ids left to allocate")]
    IdsExhausted,
}

#[derive(Debug, Error)]
enum DecodeError {
    #[error("malformed event list: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate event id {0}")]
    DuplicateId(EventId),
    #[error("event id {0} leaves no room for new ids")]
    IdOutOfRange(EventId),
}

/// In-memory event list mirrored to a single key of a [`KeyValueStore`].
///
/// Every mutation rewrites the whole list. Ids are handed out from a counter
/// seeded past the largest stored id, so they never repeat within a session.
pub struct EventStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    events: Vec<Event>,
    next_id: EventId,
    exhausted: bool,
}

impl EventStore {
    /// Reads the stored list. Missing, unreadable or corrupt data yields an
    /// empty store.
    pub fn load(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();

        let events = match backend.get(&key) {
            Ok(Some(raw)) => match decode_events(&raw) {
                Ok(events) => events,
                Err(e) => {
                    tracing::warn!("Discarding stored events under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read stored events under '{}': {}", key, e);
                Vec::new()
            }
        };

        // Decoding rejects `EventId::MAX`, so the increment cannot overflow.
        let next_id = events.iter().map(|event| event.id).max().map_or(1, |max| max + 1);

        tracing::info!("Loaded {} events", events.len());

        Self {
            backend,
            key,
            events,
            next_id,
            exhausted: false,
        }
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<Event, StoreError> {
        let event = Event::from_draft(self.allocate_id()?, draft);
        if !event.is_well_formed() {
            tracing::warn!("Event {} '{}' does not end after it starts", event.id, event.title);
        }
        self.events.push(event.clone());
        tracing::info!("Added event {} '{}'", event.id, event.title);
        self.persist()?;
        Ok(event)
    }

    pub fn update(&mut self, event: Event) -> Result<(), StoreError> {
        let Some(slot) = self.events.iter_mut().find(|existing| existing.id == event.id) else {
            return Err(StoreError::NotFound(event.id));
        };
        if !event.is_well_formed() {
            tracing::warn!("Event {} '{}' does not end after it starts", event.id, event.title);
        }
        *slot = event;
        self.persist()
    }

    pub fn delete(&mut self, id: EventId) -> Result<Event, StoreError> {
        let Some(index) = self.events.iter().position(|event| event.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        let removed = self.events.remove(index);
        tracing::info!("Deleted event {} '{}'", removed.id, removed.title);
        self.persist()?;
        Ok(removed)
    }

    /// The counter only moves forward. Once it passes `EventId::MAX` every
    /// later `add` fails with [`StoreError::IdsExhausted`].
    fn allocate_id(&mut self) -> Result<EventId, StoreError> {
        if self.exhausted {
            return Err(StoreError::IdsExhausted);
        }
        while self.get(self.next_id).is_some() {
            self.next_id = self.next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        }
        let id = self.next_id;
        match self.next_id.checked_add(1) {
            Some(next) => self.next_id = next,
            None => self.exhausted = true,
        }
        Ok(id)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.events)?;
        if let Err(e) = self.backend.set(&self.key, &raw) {
            tracing::error!("Failed to persist {} events: {}", self.events.len(), e);
            return Err(e.into());
        }
        tracing::debug!("Persisted {} events", self.events.len());
        Ok(())
    }
}

fn decode_events(raw: &str) -> Result<Vec<Event>, DecodeError> {
    let events: Vec<Event> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(events.len());
    for event in &events {
        if !seen.insert(event.id) {
            return Err(DecodeError::DuplicateId(event.id));
        }
        if event.id == EventId::MAX {
            return Err(DecodeError::IdOutOfRange(event.id));
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{MemoryStore, MockKeyValueStore};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    }

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: String::new(),
            start: start(),
            end: start() + Duration::minutes(30),
        }
    }

    fn empty_store() -> EventStore {
        EventStore::load(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY)
    }

    fn store_with(raw: &str) -> EventStore {
        let backend = MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, raw);
        EventStore::load(Box::new(backend), DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn missing_key_loads_empty_store() {
        let store = empty_store();

        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_data_loads_empty_store() {
        for raw in ["not json", "{\"id\":1}", "[{\"id\":1,\"title\":\"x\"}]"] {
            let store = store_with(raw);
            assert!(store.is_empty(), "raw {raw:?}");
        }
    }

    #[test]
    fn one_bad_entry_discards_the_whole_list() {
        let raw = r#"[
            {"id":1,"title":"ok","description":"","startTime":"2024-03-04T09:00:00.000Z","endTime":"2024-03-04T10:00:00.000Z"},
            {"id":2,"title":"bad","description":"","startTime":"soon","endTime":"2024-03-04T10:00:00.000Z"}
        ]"#;

        let store = store_with(raw);

        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_ids_count_as_corruption() {
        let raw = r#"[
            {"id":1,"title":"a","description":"","startTime":"2024-03-04T09:00:00.000Z","endTime":"2024-03-04T10:00:00.000Z"},
            {"id":1,"title":"b","description":"","startTime":"2024-03-05T09:00:00.000Z","endTime":"2024-03-05T10:00:00.000Z"}
        ]"#;

        let store = store_with(raw);

        assert!(store.is_empty());
    }

    #[test]
    fn unreadable_backend_loads_empty_store() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_get()
            .returning(|_| Err(KvError::IoError(std::io::Error::other("disk gone"))));

        let store = EventStore::load(Box::new(backend), DEFAULT_STORAGE_KEY);

        assert!(store.is_empty());
    }

    #[test]
    fn add_assigns_id_and_appends() {
        let mut store = empty_store();

        let first = store.add(draft("First")).unwrap();
        let second = store.add(draft("Second")).unwrap();

        assert_ne!(first.id, second.id);
        let titles: Vec<_> = store.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn ids_continue_after_largest_stored_id() {
        let raw = r#"[{"id":1709542800000,"title":"old","description":"","startTime":"2024-03-04T09:00:00.000Z","endTime":"2024-03-04T10:00:00.000Z"}]"#;
        let mut store = store_with(raw);

        let added = store.add(draft("New")).unwrap();

        assert_eq!(added.id, 1_709_542_800_001);
    }

    #[test]
    fn stored_id_at_integer_limit_counts_as_corruption() {
        let raw = format!(
            r#"[{{"id":{},"title":"edge","description":"","startTime":"2024-03-04T09:00:00.000Z","endTime":"2024-03-04T10:00:00.000Z"}}]"#,
            EventId::MAX
        );
        let mut store = store_with(&raw);

        assert!(store.is_empty());
        assert_eq!(store.add(draft("Fresh")).unwrap().id, 1);
    }

    #[test]
    fn add_fails_once_ids_run_out() {
        let raw = format!(
            r#"[{{"id":{},"title":"edge","description":"","startTime":"2024-03-04T09:00:00.000Z","endTime":"2024-03-04T10:00:00.000Z"}}]"#,
            EventId::MAX - 1
        );
        let mut store = store_with(&raw);

        let last = store.add(draft("Last")).unwrap();
        let result = store.add(draft("One too many"));

        assert_eq!(last.id, EventId::MAX);
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = empty_store();
        let first = store.add(draft("First")).unwrap();
        store.delete(first.id).unwrap();

        let second = store.add(draft("Second")).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn mutations_are_written_through_to_backend() {
        let mut store = empty_store();
        store.add(draft("Persisted")).unwrap();

        let raw = store.backend.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let reloaded = store_with(&raw);

        assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn update_replaces_matching_event() {
        let mut store = empty_store();
        let mut event = store.add(draft("Original")).unwrap();
        event.title = "Renamed".to_string();

        store.update(event.clone()).unwrap();

        assert_eq!(store.get(event.id), Some(&event));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_of_unknown_id_leaves_list_untouched() {
        let mut store = empty_store();
        let existing = store.add(draft("Keep")).unwrap();
        let stranger = Event::from_draft(999, draft("Stranger"));

        let result = store.update(stranger);

        assert!(matches!(result, Err(StoreError::NotFound(999))));
        assert_eq!(store.list(), &[existing]);
    }

    #[test]
    fn misordered_event_is_stored_as_is() {
        let mut store = empty_store();
        let mut backwards = draft("Backwards");
        backwards.end = backwards.start - Duration::minutes(15);

        let added = store.add(backwards).unwrap();

        assert!(!added.is_well_formed());
        assert_eq!(store.get(added.id), Some(&added));
    }

    #[test]
    fn delete_removes_event() {
        let mut store = empty_store();
        let keep = store.add(draft("Keep")).unwrap();
        let drop = store.add(draft("Drop")).unwrap();

        let removed = store.delete(drop.id).unwrap();

        assert_eq!(removed.id, drop.id);
        assert_eq!(store.list(), &[keep]);
    }

    #[test]
    fn delete_of_unknown_id_is_not_found() {
        let mut store = empty_store();
        store.add(draft("Keep")).unwrap();

        assert!(matches!(store.delete(42), Err(StoreError::NotFound(42))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_write_is_reported_but_mutation_stands() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_set()
            .returning(|_, _| Err(KvError::IoError(std::io::Error::other("read-only"))));
        let mut store = EventStore::load(Box::new(backend), DEFAULT_STORAGE_KEY);

        let result = store.add(draft("Unsaved"));

        assert!(matches!(result, Err(StoreError::Persist(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn writes_use_configured_key() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_set()
            .withf(|key, value| key.to_string() == "custom-key" && value.contains("\"title\":\"Keyed\""))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut store = EventStore::load(Box::new(backend), "custom-key");

        store.add(draft("Keyed")).unwrap();
    }

    proptest! {
        #[test]
        fn added_ids_are_unique_and_deleted_ids_disappear(
            adds in 1usize..30,
            delete_picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
        ) {
            let mut store = empty_store();
            let mut ids = Vec::new();
            for n in 0..adds {
                let before: Vec<EventId> = store.list().iter().map(|e| e.id).collect();
                let added = store.add(draft(&format!("Event {n}"))).unwrap();
                prop_assert!(!before.contains(&added.id));
                ids.push(added.id);
            }

            for pick in delete_picks {
                if ids.is_empty() {
                    break;
                }
                let id = ids.remove(pick.index(ids.len()));
                store.delete(id).unwrap();
                prop_assert!(store.list().iter().all(|e| e.id != id));
            }

            prop_assert_eq!(store.len(), ids.len());
        }
    }
}
