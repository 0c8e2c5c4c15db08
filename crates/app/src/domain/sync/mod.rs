//! Spreadsheet to database synchronisation

pub mod errors;
pub mod models;
pub mod rows;
pub mod service;

pub use errors::SyncError;
pub use service::*;
