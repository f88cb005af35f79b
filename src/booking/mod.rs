//! Slot availability and deposit booking.

pub mod gateway;
pub mod qr;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod slots;

pub use gateway::{CheckoutGateway, CheckoutSession};
pub use routes::router;
pub use slots::{get_slots_for_date, DEFAULT_SLOTS};
