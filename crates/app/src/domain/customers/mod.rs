//! Customers

pub mod models;
pub(crate) mod repository;
