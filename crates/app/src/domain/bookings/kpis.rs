//! Booking KPIs

use crate::domain::bookings::models::Booking;

/// Costing category used when a booking has none.
pub const UNKNOWN_COSTING: &str = "Unknown";

/// Summary metrics derived from the captured bookings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingKpis {
    pub total_orders: usize,

    /// Bookings per costing category, in first-seen order.
    pub costing_breakdown: Vec<(String, usize)>,
}

impl BookingKpis {
    #[must_use]
    pub fn summarise(bookings: &[Booking]) -> Self {
        let mut costing_breakdown: Vec<(String, usize)> = Vec::new();

        for booking in bookings {
            let costing = if booking.costing.is_empty() {
                UNKNOWN_COSTING
            } else {
                booking.costing.as_str()
            };

            match costing_breakdown
                .iter_mut()
                .find(|(category, _)| category == costing)
            {
                Some((_, count)) => *count += 1,
                None => costing_breakdown.push((costing.to_string(), 1)),
            }
        }

        Self {
            total_orders: bookings.len(),
            costing_breakdown,
        }
    }

    #[must_use]
    pub fn distinct_costing_types(&self) -> usize {
        self.costing_breakdown.len()
    }

    /// The modal costing category; ties go to the category seen first.
    #[must_use]
    pub fn popular_costing(&self) -> Option<&str> {
        self.costing_breakdown
            .iter()
            .fold(None, |best: Option<&(String, usize)>, entry| match best {
                Some(current) if current.1 >= entry.1 => Some(current),
                _ => Some(entry),
            })
            .map(|(category, _)| category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::bookings::models::{BookingId, BookingSubmission};

    use super::*;

    fn booking(n: u64, costing: &str) -> Booking {
        Booking::from_submission(
            BookingId::from_sequence(n),
            Timestamp::UNIX_EPOCH,
            BookingSubmission {
                costing: Some(costing.to_string()),
                ..BookingSubmission::default()
            },
        )
    }

    #[test]
    fn empty_store_has_no_popular_costing() {
        let kpis = BookingKpis::summarise(&[]);

        assert_eq!(kpis.total_orders, 0);
        assert_eq!(kpis.distinct_costing_types(), 0);
        assert_eq!(kpis.popular_costing(), None);
    }

    #[test]
    fn counts_per_costing_and_reports_mode() {
        let kpis = BookingKpis::summarise(&[
            booking(1, "MG Standard"),
            booking(2, "Ortho (T)"),
            booking(3, "Ortho (T)"),
        ]);

        assert_eq!(kpis.total_orders, 3);
        assert_eq!(kpis.distinct_costing_types(), 2);
        assert_eq!(
            kpis.costing_breakdown,
            vec![("MG Standard".to_string(), 1), ("Ortho (T)".to_string(), 2)]
        );
        assert_eq!(kpis.popular_costing(), Some("Ortho (T)"));
    }

    #[test]
    fn ties_resolve_to_first_seen() {
        let kpis = BookingKpis::summarise(&[booking(1, "Retainer"), booking(2, "Bleaching")]);

        assert_eq!(kpis.popular_costing(), Some("Retainer"));
    }

    #[test]
    fn empty_costing_counts_as_unknown() {
        let kpis = BookingKpis::summarise(&[booking(1, "")]);

        assert_eq!(kpis.costing_breakdown, vec![(UNKNOWN_COSTING.to_string(), 1)]);
    }
}
