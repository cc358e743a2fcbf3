use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::model::Stay;

// ── Open-date calendar ────────────────────────────────────────────

/// Earliest date of the stay that is missing from the listing's open-date
/// set. Scans `[check_in, check_out)` left to right, so the reported date is
/// always the first offending one in chronological order.
pub fn first_missing_date(open: &BTreeSet<NaiveDate>, stay: &Stay) -> Option<NaiveDate> {
    stay.dates().find(|d| !open.contains(d))
}

/// True if every occupied date of the stay is in the open-date set.
pub fn covers_stay(open: &BTreeSet<NaiveDate>, stay: &Stay) -> bool {
    first_missing_date(open, stay).is_none()
}

/// Derive the stay for a demo booking from the listing's calendar:
/// check-in is the first open date (or `today` when the calendar is empty),
/// check-out is the second open date if there is one, else check-in + 1 day.
pub fn default_demo_stay(open: &BTreeSet<NaiveDate>, today: NaiveDate) -> Stay {
    let mut dates = open.iter();
    match dates.next() {
        Some(&check_in) => {
            let check_out = dates
                .next()
                .copied()
                .or_else(|| check_in.succ_opt())
                .unwrap_or(check_in);
            Stay::new(check_in, check_out)
        }
        None => {
            let check_out = today.succ_opt().unwrap_or(today);
            Stay::new(today, check_out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open(days: &[NaiveDate]) -> BTreeSet<NaiveDate> {
        days.iter().copied().collect()
    }

    // ── first_missing_date ───────────────────────────────

    #[test]
    fn fully_open_stay_has_no_missing_date() {
        let open = open(&[date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
        let stay = Stay::new(date(2024, 6, 1), date(2024, 6, 3));
        assert_eq!(first_missing_date(&open, &stay), None);
        assert!(covers_stay(&open, &stay));
    }

    #[test]
    fn reports_earliest_missing_date() {
        // Open on the 1st and 2nd only; a stay through the 4th is first
        // blocked on the 3rd.
        let open = open(&[date(2024, 6, 1), date(2024, 6, 2)]);
        let stay = Stay::new(date(2024, 6, 1), date(2024, 6, 4));
        assert_eq!(first_missing_date(&open, &stay), Some(date(2024, 6, 3)));
    }

    #[test]
    fn missing_date_in_gap() {
        let open = open(&[date(2024, 6, 1), date(2024, 6, 3)]);
        let stay = Stay::new(date(2024, 6, 1), date(2024, 6, 4));
        assert_eq!(first_missing_date(&open, &stay), Some(date(2024, 6, 2)));
    }

    #[test]
    fn checkout_day_not_required_open() {
        // [1st, 3rd) occupies the 1st and 2nd only.
        let open = open(&[date(2024, 6, 1), date(2024, 6, 2)]);
        let stay = Stay::new(date(2024, 6, 1), date(2024, 6, 3));
        assert!(covers_stay(&open, &stay));
    }

    #[test]
    fn empty_calendar_blocks_first_day() {
        let open = BTreeSet::new();
        let stay = Stay::new(date(2024, 6, 1), date(2024, 6, 2));
        assert_eq!(first_missing_date(&open, &stay), Some(date(2024, 6, 1)));
    }

    // ── default_demo_stay ────────────────────────────────

    #[test]
    fn demo_stay_uses_first_two_open_dates() {
        let open = open(&[date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
        let stay = default_demo_stay(&open, date(2024, 1, 1));
        assert_eq!(stay, Stay::new(date(2024, 6, 1), date(2024, 6, 2)));
    }

    #[test]
    fn demo_stay_spans_gap_to_second_open_date() {
        // Second open date is not adjacent; checkout lands on it anyway.
        let open = open(&[date(2024, 6, 1), date(2024, 6, 5)]);
        let stay = default_demo_stay(&open, date(2024, 1, 1));
        assert_eq!(stay, Stay::new(date(2024, 6, 1), date(2024, 6, 5)));
    }

    #[test]
    fn demo_stay_single_open_date() {
        let open = open(&[date(2024, 6, 1)]);
        let stay = default_demo_stay(&open, date(2024, 1, 1));
        assert_eq!(stay, Stay::new(date(2024, 6, 1), date(2024, 6, 2)));
    }

    #[test]
    fn demo_stay_empty_calendar_falls_back_to_today() {
        let open = BTreeSet::new();
        let today = date(2024, 3, 15);
        let stay = default_demo_stay(&open, today);
        assert_eq!(stay, Stay::new(today, date(2024, 3, 16)));
    }
}
