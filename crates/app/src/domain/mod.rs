//! Order Capture Domain Concerns

pub mod bookings;
pub mod customers;
pub mod orders;
pub mod products;
pub mod sync;
