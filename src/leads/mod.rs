//! Quote and contact form intake.

pub mod emails;
pub mod notifier;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

pub use notifier::Notifier;
pub use routes::router;
