//! Quote pricing engine.
//!
//! Turns quote form selections into an estimated price range using static
//! rate tables. Everything here is pure except the route handlers.

pub mod calculators;
pub mod catalog;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_price_range, round_whole, PriceRange};
pub use requests::QuoteRequest;
pub use routes::router;
