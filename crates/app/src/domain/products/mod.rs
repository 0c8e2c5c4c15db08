//! Products

pub mod catalog;
pub mod models;
pub(crate) mod repository;
