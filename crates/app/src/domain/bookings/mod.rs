//! Bookings
//!
//! Booking submissions captured by the proxy API. Bookings live only in
//! memory and are lost when the process exits.

pub mod errors;
pub mod kpis;
pub mod models;
pub mod service;
pub mod validation;

pub use errors::BookingsServiceError;
pub use service::*;
