//! Time slot availability.
//!
//! Every day offers the standard slots unless the store holds an override
//! for that exact date key. Slots already reserved are left out. This stands
//! in for a real scheduling backend.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::AppCache;
use crate::db::LeadStore;
use crate::error::Result;

/// Slots offered on days without an override
pub const DEFAULT_SLOTS: [&str; 4] = ["09:00", "12:00", "15:00", "18:00"];

pub fn default_slots() -> Vec<String> {
    DEFAULT_SLOTS.iter().map(|slot| slot.to_string()).collect()
}

/// Open slots for a date key straight from the store, bypassing the cache.
pub async fn load_slots(store: &LeadStore, date_key: &str) -> Result<Vec<String>> {
    let offered = store
        .slot_override(date_key)
        .await?
        .unwrap_or_else(default_slots);
    let booked = store.booked_slots(date_key).await?;

    Ok(offered
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect())
}

/// Slots for a date key, going through the cache.
///
/// A store failure degrades to the default slots and is not cached.
pub async fn get_slots_for_date(
    store: &LeadStore,
    cache: &AppCache,
    date_key: &str,
) -> Result<Arc<Vec<String>>> {
    if let Some(cached) = cache.slots.get(date_key).await {
        debug!("Cache HIT for slots: {}", date_key);
        return Ok(cached);
    }
    debug!("Cache MISS for slots: {}", date_key);

    let slots = match load_slots(store, date_key).await {
        Ok(open) => Arc::new(open),
        Err(e) => {
            warn!("Slot lookup failed for {}, using defaults: {}", date_key, e);
            return Ok(Arc::new(default_slots()));
        }
    };

    cache.slots.insert(date_key.to_string(), slots.clone()).await;
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn store_with(date: &str, slots: &[&str]) -> LeadStore {
        let mut overrides = HashMap::new();
        overrides.insert(
            date.to_string(),
            slots.iter().map(|s| s.to_string()).collect(),
        );
        LeadStore::in_memory(overrides)
    }

    #[tokio::test]
    async fn test_default_slots_for_any_date() {
        let store = LeadStore::in_memory(HashMap::new());
        let cache = AppCache::default();

        let slots = get_slots_for_date(&store, &cache, "2025-05-05").await.unwrap();
        assert_eq!(*slots, vec!["09:00", "12:00", "15:00", "18:00"]);

        // Not even a date; still answered
        let slots = get_slots_for_date(&store, &cache, "whenever").await.unwrap();
        assert_eq!(*slots, default_slots());
    }

    #[tokio::test]
    async fn test_override_for_exact_key() {
        let store = store_with("2025-07-04", &["10:00", "14:00"]);
        let cache = AppCache::default();

        let slots = get_slots_for_date(&store, &cache, "2025-07-04").await.unwrap();
        assert_eq!(*slots, vec!["10:00", "14:00"]);

        let slots = get_slots_for_date(&store, &cache, "2025-07-05").await.unwrap();
        assert_eq!(*slots, default_slots());
    }

    #[tokio::test]
    async fn test_empty_override_means_fully_booked() {
        let store = store_with("2025-08-01", &[]);
        let cache = AppCache::default();

        let slots = get_slots_for_date(&store, &cache, "2025-08-01").await.unwrap();
        assert!(slots.is_empty());
    }

    #[tokio::test]
    async fn test_booked_slots_are_left_out() {
        let store = LeadStore::in_memory(HashMap::new());
        let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        store
            .save_reservation(&crate::models::Reservation::new(date, "12:00".to_string(), 199))
            .await
            .unwrap();

        let open = load_slots(&store, "2025-06-14").await.unwrap();
        assert_eq!(open, vec!["09:00", "15:00", "18:00"]);
        assert_eq!(load_slots(&store, "2025-06-15").await.unwrap(), default_slots());
    }

    #[tokio::test]
    async fn test_result_is_cached() {
        let store = LeadStore::in_memory(HashMap::new());
        let cache = AppCache::default();

        get_slots_for_date(&store, &cache, "2025-09-09").await.unwrap();
        assert!(cache.slots.get("2025-09-09").await.is_some());
    }
}
