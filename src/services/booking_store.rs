use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::models::{Booking, BookingStatus, NewBooking};
use crate::services::storage::{Storage, StorageError};

/// Key under which each storage area keeps its JSON array of bookings.
pub const BOOKINGS_KEY: &str = "bookings";

/// Append-only booking log persisted as one JSON array per storage area.
///
/// `save` and `load` never fail outward: storage and parse errors are logged
/// and collapse to `None` and an empty list respectively. Writers are
/// serialized so a read-modify-write cannot lose a concurrent update.
#[derive(Clone)]
pub struct BookingStore {
    storage: Option<Arc<dyn Storage>>,
    writer: Arc<Mutex<()>>,
}

impl BookingStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// A store with no storage behind it. Loads are empty and saves fail.
    pub fn detached() -> Self {
        Self {
            storage: None,
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }

    pub fn save(&self, area: &str, request: NewBooking) -> Option<Booking> {
        match self.try_save(area, request) {
            Ok(booking) => {
                tracing::info!(area, booking_id = booking.id, "booking saved");
                Some(booking)
            }
            Err(e) => {
                tracing::error!(area, error = %e, "failed to save booking");
                None
            }
        }
    }

    pub fn load(&self, area: &str) -> Vec<Booking> {
        if self.storage.is_none() {
            return Vec::new();
        }

        self.read_all(area).unwrap_or_else(|e| {
            tracing::error!(area, error = %e, "failed to load bookings");
            Vec::new()
        })
    }

    pub fn find(&self, area: &str, id: i64) -> Option<Booking> {
        self.load(area).into_iter().find(|b| b.id == id)
    }

    /// Persists a status change. Returns `Ok(None)` when no booking has `id`.
    pub fn update_status(
        &self,
        area: &str,
        id: i64,
        status: BookingStatus,
    ) -> Result<Option<Booking>, StorageError> {
        let _guard = self.lock_writer();
        let mut bookings = self.read_all(area)?;

        let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        booking.status = status;
        let updated = booking.clone();

        self.write_all(area, &bookings)?;
        tracing::info!(area, booking_id = id, status = status.as_str(), "booking status updated");
        Ok(Some(updated))
    }

    fn try_save(&self, area: &str, request: NewBooking) -> Result<Booking, StorageError> {
        let _guard = self.lock_writer();
        let mut bookings = self.read_all(area)?;

        let booking = request.into_booking(next_id(&bookings), Utc::now());
        bookings.push(booking.clone());

        self.write_all(area, &bookings)?;
        Ok(booking)
    }

    fn read_all(&self, area: &str) -> Result<Vec<Booking>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        match storage.get_item(area, BOOKINGS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, area: &str, bookings: &[Booking]) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(bookings)?;
        storage.set_item(area, BOOKINGS_KEY, &raw)
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Millisecond timestamp, bumped past every existing id so ids stay unique
/// and increasing even when several saves land in the same millisecond.
fn next_id(existing: &[Booking]) -> i64 {
    let now = Utc::now().timestamp_millis();
    existing
        .iter()
        .map(|b| b.id)
        .max()
        .map_or(now, |last| now.max(last + 1))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::Location;
    use crate::services::storage::MemoryStorage;

    const AREA: &str = "alice@example.com";

    struct FailingWrites {
        inner: MemoryStorage,
    }

    impl Storage for FailingWrites {
        fn get_item(&self, area: &str, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(area, key)
        }

        fn set_item(&self, _area: &str, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    fn request(service_name: &str) -> NewBooking {
        NewBooking {
            service_id: "s1".to_string(),
            service_name: service_name.to_string(),
            duration: 2.0,
            location: Location {
                area: "X".to_string(),
                ..Location::default()
            },
            total_cost: 40.0,
            status: BookingStatus::Pending,
        }
    }

    fn memory_store() -> (BookingStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (BookingStore::new(storage.clone()), storage)
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let (store, _) = memory_store();
        assert!(store.load(AREA).is_empty());
    }

    #[test]
    fn test_load_malformed_value_is_empty() {
        let (store, storage) = memory_store();
        storage.set_item(AREA, BOOKINGS_KEY, "{not json").unwrap();
        assert!(store.load(AREA).is_empty());

        storage.set_item(AREA, BOOKINGS_KEY, r#"{"id":1}"#).unwrap();
        assert!(store.load(AREA).is_empty());
    }

    #[test]
    fn test_load_keeps_fractional_durations() {
        let (store, storage) = memory_store();
        let raw = r#"[
            {"id":1,"serviceId":"s1","serviceName":"Babysitting","duration":2,
             "location":{"area":"X"},"totalCost":40,"status":"Pending",
             "createdAt":"2024-06-10T06:13:20.000Z"},
            {"id":2,"serviceId":"s1","serviceName":"Babysitting","duration":1.5,
             "location":{"area":"Y"},"totalCost":30,"status":"Pending",
             "createdAt":"2024-06-10T06:14:00.000Z"}
        ]"#;
        storage.set_item(AREA, BOOKINGS_KEY, raw).unwrap();

        let loaded = store.load(AREA);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].duration, 1.5);

        let saved = store.save(AREA, request("Elderly Care")).unwrap();
        assert!(saved.id > 2);
        assert_eq!(store.load(AREA).len(), 3);
    }

    #[test]
    fn test_save_then_load() {
        let (store, _) = memory_store();
        let saved = store.save(AREA, request("Babysitting")).unwrap();

        let loaded = store.load(AREA);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], saved);
        assert_eq!(loaded[0].status, BookingStatus::Pending);
        assert_eq!(loaded[0].duration, 2.0);
        assert_eq!(loaded[0].total_cost, 40.0);
        assert!(loaded[0].id > 0);
    }

    #[test]
    fn test_sequential_saves_keep_order_and_unique_ids() {
        let (store, _) = memory_store();
        let names: Vec<String> = (0..25).map(|i| format!("service-{i}")).collect();
        for name in &names {
            assert!(store.save(AREA, request(name)).is_some());
        }

        let loaded = store.load(AREA);
        assert_eq!(loaded.len(), names.len());
        let loaded_names: Vec<&str> = loaded.iter().map(|b| b.service_name.as_str()).collect();
        assert_eq!(loaded_names, names.iter().map(String::as_str).collect::<Vec<_>>());

        let ids: HashSet<i64> = loaded.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), loaded.len());
        assert!(loaded.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_save_with_failing_writes_returns_none() {
        let store = BookingStore::new(Arc::new(FailingWrites {
            inner: MemoryStorage::new(),
        }));
        assert!(store.save(AREA, request("Babysitting")).is_none());
        assert!(store.load(AREA).is_empty());
    }

    #[test]
    fn test_save_does_not_clobber_corrupt_value() {
        let (store, storage) = memory_store();
        storage.set_item(AREA, BOOKINGS_KEY, "garbage").unwrap();

        assert!(store.save(AREA, request("Babysitting")).is_none());
        assert_eq!(
            storage.get_item(AREA, BOOKINGS_KEY).unwrap().as_deref(),
            Some("garbage")
        );
    }

    #[test]
    fn test_detached_store() {
        let store = BookingStore::detached();
        assert!(!store.is_attached());
        assert!(store.load(AREA).is_empty());
        assert!(store.save(AREA, request("Babysitting")).is_none());
        assert!(matches!(
            store.update_status(AREA, 1, BookingStatus::Cancelled),
            Err(StorageError::Unavailable)
        ));
    }

    #[test]
    fn test_areas_are_isolated() {
        let (store, _) = memory_store();
        store.save(AREA, request("Babysitting")).unwrap();

        assert_eq!(store.load(AREA).len(), 1);
        assert!(store.load("bob@example.com").is_empty());
    }

    #[test]
    fn test_update_status_persists() {
        let (store, _) = memory_store();
        let first = store.save(AREA, request("first")).unwrap();
        let second = store.save(AREA, request("second")).unwrap();

        let updated = store
            .update_status(AREA, first.id, BookingStatus::Cancelled)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);

        let loaded = store.load(AREA);
        assert_eq!(loaded[0].status, BookingStatus::Cancelled);
        assert_eq!(loaded[1].status, BookingStatus::Pending);
        assert_eq!(store.find(AREA, second.id).unwrap().service_name, "second");
    }

    #[test]
    fn test_update_status_unknown_id() {
        let (store, _) = memory_store();
        store.save(AREA, request("first")).unwrap();
        assert!(store
            .update_status(AREA, 42, BookingStatus::Cancelled)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_concurrent_saves_lose_nothing() {
        let (store, _) = memory_store();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..10 {
                        store.save(AREA, request(&format!("{i}-{j}"))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let loaded = store.load(AREA);
        assert_eq!(loaded.len(), 80);
        let ids: HashSet<i64> = loaded.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 80);
    }

    #[test]
    fn test_next_id_moves_past_existing() {
        let (store, _) = memory_store();
        let booking = store.save(AREA, request("first")).unwrap();
        let future = Booking {
            id: booking.id + 1_000_000,
            ..booking
        };
        assert_eq!(next_id(std::slice::from_ref(&future)), future.id + 1);
        assert!(next_id(&[]) > 0);
    }
}
