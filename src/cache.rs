//! In-memory caching using moka
//!
//! Availability is read on every date the visitor clicks in the booking
//! calendar, so slot lists are cached per date and invalidated when a
//! reservation lands on that date.

use chrono::{Days, Utc};
use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::booking::slots;
use crate::db::LeadStore;

/// How many upcoming days the warmer preloads
const WARM_DAYS: u64 = 14;

/// Application cache holding slot lists
#[derive(Clone)]
pub struct AppCache {
    /// Slots offered per day (date key -> slots)
    pub slots: Cache<String, Arc<Vec<String>>>,
}

impl AppCache {
    /// Create a new cache instance with the given slot TTL
    pub fn new(slot_ttl: Duration) -> Self {
        Self {
            // 366 days covers a year of calendar browsing
            slots: Cache::builder()
                .max_capacity(366)
                .time_to_live(slot_ttl)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            slots_size: self.slots.entry_count(),
        }
    }

    /// Drop the cached slots for one day
    pub async fn invalidate_date(&self, date_key: &str) {
        self.slots.invalidate(date_key).await;
        info!("Slot cache invalidated for date: {}", date_key);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub slots_size: u64,
}

/// Start background cache warmer
///
/// Warms the next two weeks of slots on startup and refreshes every 10 minutes.
pub async fn start_cache_warmer(cache: AppCache, store: LeadStore) {
    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        warm_cache(&cache, &store).await;
    }
}

/// Preload slot lists for the upcoming days.
///
/// Fresh values replace cached ones in place, so readers never see a gap.
async fn warm_cache(cache: &AppCache, store: &LeadStore) {
    info!("Starting cache warm-up...");

    let today = Utc::now().date_naive();
    for offset in 0..WARM_DAYS {
        let Some(day) = today.checked_add_days(Days::new(offset)) else {
            break;
        };
        let key = day.format("%Y-%m-%d").to_string();
        match slots::load_slots(store, &key).await {
            Ok(open) => cache.slots.insert(key, Arc::new(open)).await,
            Err(e) => warn!("Failed to warm slots for {}: {}", key, e),
        }
    }

    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
