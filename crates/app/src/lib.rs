//! Shared order-capture domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod sheets;

#[cfg(test)]
mod test;

mod ids;
