use chrono::NaiveDate;
use ulid::Ulid;

use crate::model::{Booking, Stay};

use super::EngineError;

pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub(crate) fn validate_stay(stay: &Stay) -> Result<(), EngineError> {
    if stay.check_out <= stay.check_in {
        return Err(EngineError::InvalidDateRange {
            check_in: stay.check_in,
            check_out: stay.check_out,
        });
    }
    Ok(())
}

/// Scan existing bookings for a stay that intersects the candidate under
/// half-open semantics. A booking whose id equals `exclude` is skipped so
/// re-validating an already-persisted booking does not conflict with itself.
/// Scan order does not matter: every interval is checked, so conflict-or-not
/// is independent of store ordering.
pub(crate) fn check_no_conflict(
    existing: &[Booking],
    stay: &Stay,
    exclude: Option<Ulid>,
) -> Result<(), EngineError> {
    for booking in existing {
        if exclude.is_some_and(|id| id == booking.id) {
            continue;
        }
        if booking.stay.overlaps(stay) {
            return Err(EngineError::OverlapConflict(booking.id));
        }
    }
    Ok(())
}
