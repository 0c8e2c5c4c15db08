//! State

use std::sync::Arc;

use snugfit_app::domain::bookings::{BookingsService, InMemoryBookingsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) bookings: Arc<dyn BookingsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(bookings: Arc<dyn BookingsService>) -> Self {
        Self { bookings }
    }

    /// Fresh state around an empty process-scoped booking store.
    #[must_use]
    pub(crate) fn in_memory() -> Arc<Self> {
        Arc::new(Self::new(Arc::new(InMemoryBookingsService::new())))
    }
}
