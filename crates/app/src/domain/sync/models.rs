//! Sync Models

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Counts describing one completed sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub rows_read: usize,
    pub catalog_products_seeded: usize,
    pub customers_created: usize,
    pub products_created: usize,
    pub orders_created: usize,
    pub orders_skipped: usize,
}

impl Display for SyncReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "rows read: {}, catalog products seeded: {}, customers created: {}, \
             products created: {}, orders created: {}, orders skipped: {}",
            self.rows_read,
            self.catalog_products_seeded,
            self.customers_created,
            self.products_created,
            self.orders_created,
            self.orders_skipped,
        )
    }
}
