//! Bookings service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::bookings::{
    errors::BookingsServiceError,
    kpis::BookingKpis,
    models::{Booking, BookingChanges, BookingId, BookingSubmission, BookingUpdate},
    validation::validate,
};

/// Append-only, process-scoped booking store.
///
/// Starts empty and owns the id sequence; nothing is ever removed.
#[derive(Debug, Default)]
pub struct InMemoryBookingsService {
    store: RwLock<BookingStore>,
}

#[derive(Debug, Default)]
struct BookingStore {
    bookings: Vec<Booking>,
    sequence: u64,
}

impl InMemoryBookingsService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingsService for InMemoryBookingsService {
    async fn list_bookings(&self) -> Vec<Booking> {
        self.store.read().await.bookings.clone()
    }

    async fn count_bookings(&self) -> usize {
        self.store.read().await.bookings.len()
    }

    async fn create_booking(
        &self,
        submission: BookingSubmission,
    ) -> Result<Booking, BookingsServiceError> {
        validate(&submission).map_err(BookingsServiceError::Invalid)?;

        let mut store = self.store.write().await;

        store.sequence += 1;

        let booking = Booking::from_submission(
            BookingId::from_sequence(store.sequence),
            Timestamp::now(),
            submission,
        );

        store.bookings.push(booking.clone());

        info!(id = %booking.id, costing = %booking.costing, "booking captured");

        Ok(booking)
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking, BookingsServiceError> {
        self.store
            .read()
            .await
            .bookings
            .iter()
            .find(|booking| booking.id == *id)
            .cloned()
            .ok_or_else(|| BookingsServiceError::NotFound(id.clone()))
    }

    async fn update_booking(
        &self,
        id: &BookingId,
        update: BookingUpdate,
    ) -> Result<BookingChanges, BookingsServiceError> {
        let mut store = self.store.write().await;

        let stored = store
            .bookings
            .iter_mut()
            .find(|booking| booking.id == *id)
            .ok_or_else(|| BookingsServiceError::NotFound(id.clone()))?;

        let mut merged = stored.clone();
        let changes = merged.apply(&update);

        validate(&merged.as_submission(update.logo_image.flatten()))
            .map_err(BookingsServiceError::Invalid)?;

        *stored = merged;

        debug!(id = %id, fields = changes.len(), "booking updated");

        Ok(changes)
    }

    async fn booking_kpis(&self) -> BookingKpis {
        BookingKpis::summarise(&self.store.read().await.bookings)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Retrieves all bookings in capture order.
    async fn list_bookings(&self) -> Vec<Booking>;

    /// Number of bookings currently held.
    async fn count_bookings(&self) -> usize;

    /// Validates and stores a new booking under the next sequential id.
    async fn create_booking(
        &self,
        submission: BookingSubmission,
    ) -> Result<Booking, BookingsServiceError>;

    /// Retrieve a single booking.
    async fn get_booking(&self, id: &BookingId) -> Result<Booking, BookingsServiceError>;

    /// Applies a partial update; the stored booking is untouched when the
    /// merged result fails validation.
    async fn update_booking(
        &self,
        id: &BookingId,
        update: BookingUpdate,
    ) -> Result<BookingChanges, BookingsServiceError>;

    /// Derived metrics over all bookings.
    async fn booking_kpis(&self) -> BookingKpis;
}
