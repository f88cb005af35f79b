//! Records captured from site visitors

pub mod lead;
pub mod reservation;

pub use lead::{ContactMessage, ContactSubject, Lead, PreferredWindow};
pub use reservation::{Reservation, ReservationStatus};
