//! Lead, reservation and availability storage.
//!
//! Postgres when `DATABASE_URL` is configured, otherwise an in-process
//! store that keeps submissions in memory for the lifetime of the server.

pub mod queries;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{ContactMessage, Lead, Reservation};

/// Storage backend shared by all handlers
#[derive(Clone)]
pub enum LeadStore {
    Memory(Arc<MemoryStore>),
    Postgres(PgPool),
}

impl LeadStore {
    /// In-memory store with a fixed slot override table
    pub fn in_memory(slot_overrides: HashMap<String, Vec<String>>) -> Self {
        LeadStore::Memory(Arc::new(MemoryStore::new(slot_overrides)))
    }

    /// Connect to Postgres and make sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        queries::ensure_schema(&pool).await?;
        tracing::info!("Connected to Postgres lead store");
        Ok(LeadStore::Postgres(pool))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            LeadStore::Memory(_) => "memory",
            LeadStore::Postgres(_) => "postgres",
        }
    }

    pub async fn save_lead(&self, lead: &Lead) -> Result<()> {
        match self {
            LeadStore::Memory(store) => {
                store.leads.write().await.push(lead.clone());
                Ok(())
            }
            LeadStore::Postgres(pool) => queries::insert_lead(pool, lead).await,
        }
    }

    pub async fn save_contact(&self, message: &ContactMessage) -> Result<()> {
        match self {
            LeadStore::Memory(store) => {
                store.contacts.write().await.push(message.clone());
                Ok(())
            }
            LeadStore::Postgres(pool) => queries::insert_contact_message(pool, message).await,
        }
    }

    /// Record a reservation and mark its slot as taken.
    ///
    /// # Errors
    /// `AppError::Validation` when the date/slot is already held.
    pub async fn save_reservation(&self, reservation: &Reservation) -> Result<()> {
        match self {
            LeadStore::Memory(store) => {
                let mut reservations = store.reservations.write().await;
                if reservations
                    .iter()
                    .any(|held| held.date == reservation.date && held.slot == reservation.slot)
                {
                    return Err(slot_taken(reservation));
                }
                reservations.push(reservation.clone());
                Ok(())
            }
            LeadStore::Postgres(pool) => {
                let mut tx = pool.begin().await?;
                match queries::insert_reservation(&mut tx, reservation).await {
                    Err(AppError::Database(sqlx::Error::Database(e))) if e.is_unique_violation() => {
                        return Err(slot_taken(reservation));
                    }
                    other => other?,
                }
                queries::mark_slot_booked(&mut tx, reservation.date, &reservation.slot).await?;
                tx.commit().await?;
                Ok(())
            }
        }
    }

    /// Slots already reserved on a date key; empty when the key is not a date
    pub async fn booked_slots(&self, date_key: &str) -> Result<Vec<String>> {
        let Ok(date) = NaiveDate::parse_from_str(date_key, "%Y-%m-%d") else {
            return Ok(Vec::new());
        };
        match self {
            LeadStore::Memory(store) => Ok(store
                .reservations
                .read()
                .await
                .iter()
                .filter(|held| held.date == date)
                .map(|held| held.slot.clone())
                .collect()),
            LeadStore::Postgres(pool) => queries::get_booked_slots(pool, date).await,
        }
    }

    /// Override slots for an exact date key, if any are configured
    pub async fn slot_override(&self, date_key: &str) -> Result<Option<Vec<String>>> {
        match self {
            LeadStore::Memory(store) => Ok(store.slot_overrides.get(date_key).cloned()),
            LeadStore::Postgres(pool) => queries::get_open_slots(pool, date_key).await,
        }
    }
}

fn slot_taken(reservation: &Reservation) -> AppError {
    AppError::validation(
        "Slot is no longer available",
        vec![format!(
            "slot: {} is already booked on {}",
            reservation.slot,
            reservation.date_key()
        )],
    )
}

/// Process-local storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    leads: RwLock<Vec<Lead>>,
    contacts: RwLock<Vec<ContactMessage>>,
    reservations: RwLock<Vec<Reservation>>,
    slot_overrides: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new(slot_overrides: HashMap<String, Vec<String>>) -> Self {
        Self {
            slot_overrides,
            ..Self::default()
        }
    }

    pub async fn leads(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }

    pub async fn contacts(&self) -> Vec<ContactMessage> {
        self.contacts.read().await.clone()
    }

    pub async fn reservations(&self) -> Vec<Reservation> {
        self.reservations.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_memory_slot_override_exact_key() {
        let mut overrides = HashMap::new();
        overrides.insert("2025-12-24".to_string(), vec!["10:00".to_string()]);
        let store = LeadStore::in_memory(overrides);

        assert_eq!(
            store.slot_override("2025-12-24").await.unwrap(),
            Some(vec!["10:00".to_string()])
        );
        assert_eq!(store.slot_override("2025-12-25").await.unwrap(), None);
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_memory_store_records_reservations() {
        let inner = Arc::new(MemoryStore::default());
        let store = LeadStore::Memory(inner.clone());
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        store
            .save_reservation(&Reservation::new(date, "12:00".to_string(), 199))
            .await
            .unwrap();

        let saved = inner.reservations().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].slot, "12:00");
    }

    #[tokio::test]
    async fn test_memory_store_refuses_held_slot() {
        let store = LeadStore::in_memory(HashMap::new());
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();

        store
            .save_reservation(&Reservation::new(date, "12:00".to_string(), 199))
            .await
            .unwrap();
        let err = store
            .save_reservation(&Reservation::new(date, "12:00".to_string(), 250))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        // Other slots and days stay open
        store
            .save_reservation(&Reservation::new(date, "15:00".to_string(), 199))
            .await
            .unwrap();
        assert_eq!(
            store.booked_slots("2025-06-14").await.unwrap(),
            vec!["12:00".to_string(), "15:00".to_string()]
        );
        assert!(store.booked_slots("2025-06-15").await.unwrap().is_empty());
        assert!(store.booked_slots("soon").await.unwrap().is_empty());
    }
}
