//! Postgres queries for leads, contact messages and bookings

use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::error::{AppError, Result};
use crate::models::{ContactMessage, Lead, Reservation};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS leads (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    preferred_window TEXT NOT NULL,
    notes TEXT NOT NULL,
    quote JSONB NOT NULL,
    price_low BIGINT NOT NULL,
    price_high BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS contact_messages (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    subject TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS reservations (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    slot TEXT NOT NULL,
    deposit_amount INTEGER NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS reservations_date_slot_key
    ON reservations (date, slot);

CREATE TABLE IF NOT EXISTS availability (
    date DATE NOT NULL,
    slot TEXT NOT NULL,
    is_booked BOOLEAN NOT NULL DEFAULT FALSE,
    PRIMARY KEY (date, slot)
);
"#;

/// Create tables that do not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

fn to_bigint(value: u64, field: &str) -> Result<i64> {
    i64::try_from(value).map_err(|_| AppError::Internal(format!("{} out of range: {}", field, value)))
}

fn to_integer(value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| AppError::Internal(format!("deposit out of range: {}", value)))
}

pub async fn insert_lead(pool: &PgPool, lead: &Lead) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO leads (
            id, name, email, phone, preferred_window, notes,
            quote, price_low, price_high, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(lead.id)
    .bind(&lead.name)
    .bind(&lead.email)
    .bind(&lead.phone)
    .bind(lead.preferred_window.label())
    .bind(&lead.notes)
    .bind(Json(&lead.quote))
    .bind(to_bigint(lead.price.low, "price_low")?)
    .bind(to_bigint(lead.price.high, "price_high")?)
    .bind(lead.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_contact_message(pool: &PgPool, message: &ContactMessage) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO contact_messages (id, name, email, phone, subject, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(message.id)
    .bind(&message.name)
    .bind(&message.email)
    .bind(&message.phone)
    .bind(message.subject.label())
    .bind(&message.message)
    .bind(message.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert a reservation; fails with a unique violation when the slot is held
pub async fn insert_reservation(conn: &mut PgConnection, reservation: &Reservation) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO reservations (id, date, slot, deposit_amount, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(reservation.id)
    .bind(reservation.date)
    .bind(&reservation.slot)
    .bind(to_integer(reservation.deposit)?)
    .bind(reservation.status.as_str())
    .bind(reservation.created_at)
    .execute(conn)
    .await?;

    Ok(())
}

/// Flag a slot as taken; a no-op for days without availability rows
pub async fn mark_slot_booked(conn: &mut PgConnection, date: NaiveDate, slot: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE availability
        SET is_booked = TRUE
        WHERE date = $1 AND slot = $2
        "#,
    )
    .bind(date)
    .bind(slot)
    .execute(conn)
    .await?;

    Ok(())
}

/// Slots already reserved on a day
pub async fn get_booked_slots(pool: &PgPool, date: NaiveDate) -> Result<Vec<String>> {
    let slots = sqlx::query_scalar::<_, String>(
        r#"
        SELECT slot
        FROM reservations
        WHERE date = $1
        ORDER BY slot
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Open slots for a day that has availability rows.
///
/// Returns `None` when the day has no rows (or the key is not a date), so
/// the caller falls back to the standard slots.
pub async fn get_open_slots(pool: &PgPool, date_key: &str) -> Result<Option<Vec<String>>> {
    let Ok(date) = NaiveDate::parse_from_str(date_key, "%Y-%m-%d") else {
        return Ok(None);
    };

    let rows = sqlx::query_as::<_, (String, bool)>(
        r#"
        SELECT slot, is_booked
        FROM availability
        WHERE date = $1
        ORDER BY slot
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Ok(None);
    }

    Ok(Some(
        rows.into_iter()
            .filter(|(_, is_booked)| !is_booked)
            .map(|(slot, _)| slot)
            .collect(),
    ))
}
