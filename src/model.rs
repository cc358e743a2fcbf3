use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open stay interval `[check_in, check_out)` in whole calendar days.
/// The check-out day itself is not occupied, so one stay may check out on
/// the day another checks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Occupied dates in chronological order: every day of the stay,
    /// check-out day excluded.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        std::iter::successors(Some(self.check_in), |d| d.succ_opt())
            .take_while(move |d| *d < self.check_out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Guest,
    Host,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Ulid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// A bookable unit of lodging. `open_dates` is the explicit set of calendar
/// days the listing accepts stays on — discrete days, not a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Ulid,
    pub host_id: Ulid,
    pub location: String,
    pub description: String,
    pub nightly_price: f64,
    pub open_dates: BTreeSet<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Status is set once at creation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub user_id: Ulid,
    pub listing_id: Ulid,
    pub stay: Stay,
    pub status: BookingStatus,
}

/// Candidate input to booking admission. `id` is `Some` only when
/// re-validating a booking that has already been persisted; fresh requests
/// carry no identifier and get one assigned on admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub id: Option<Ulid>,
    pub user_id: Ulid,
    pub listing_id: Ulid,
    pub stay: Stay,
}

impl BookingRequest {
    pub fn new(user_id: Ulid, listing_id: Ulid, stay: Stay) -> Self {
        Self {
            id: None,
            user_id,
            listing_id,
            stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stay_basics() {
        let s = Stay::new(date(2024, 6, 1), date(2024, 6, 4));
        assert_eq!(s.nights(), 3);
        assert!(s.contains(date(2024, 6, 1)));
        assert!(s.contains(date(2024, 6, 3)));
        assert!(!s.contains(date(2024, 6, 4))); // half-open
    }

    #[test]
    fn stay_overlap() {
        let a = Stay::new(date(2024, 6, 1), date(2024, 6, 3));
        let b = Stay::new(date(2024, 6, 2), date(2024, 6, 5));
        let c = Stay::new(date(2024, 6, 3), date(2024, 6, 6));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // checkout day == check-in day, no conflict
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn stay_dates_excludes_checkout() {
        let s = Stay::new(date(2024, 6, 1), date(2024, 6, 4));
        let days: Vec<_> = s.dates().collect();
        assert_eq!(
            days,
            vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]
        );
    }

    #[test]
    fn stay_dates_empty_for_backwards_range() {
        let s = Stay::new(date(2024, 6, 5), date(2024, 6, 5));
        assert_eq!(s.dates().count(), 0);
        let s = Stay::new(date(2024, 6, 5), date(2024, 6, 1));
        assert_eq!(s.dates().count(), 0);
    }

    #[test]
    fn single_night_stay() {
        let s = Stay::new(date(2024, 6, 1), date(2024, 6, 2));
        assert_eq!(s.nights(), 1);
        let days: Vec<_> = s.dates().collect();
        assert_eq!(days, vec![date(2024, 6, 1)]);
    }

    #[test]
    fn booking_serialization_roundtrip() {
        let booking = Booking {
            id: Ulid::new(),
            user_id: Ulid::new(),
            listing_id: Ulid::new(),
            stay: Stay::new(date(2024, 6, 1), date(2024, 6, 3)),
            status: BookingStatus::Pending,
        };
        let json = serde_json::to_string(&booking).unwrap();
        let decoded: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(booking, decoded);
    }
}
