//! Gestation date arithmetic for cattle.

use chrono::{Days, NaiveDate};

/// Average bovine gestation length in days.
pub const GESTATION_DAYS: u64 = 283;

/// Expected calving date for a given breeding date.
///
/// Returns `None` only when the offset overflows the calendar, which no
/// plausible breeding date does.
#[must_use]
pub fn expected_calving(breeding_date: NaiveDate) -> Option<NaiveDate> {
    breeding_date.checked_add_days(Days::new(GESTATION_DAYS))
}

/// Days of gestation elapsed on a given date; negative before breeding.
#[must_use]
pub fn days_in_calf(breeding_date: NaiveDate, on: NaiveDate) -> i64 {
    (on - breeding_date).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn calving_is_283_days_out() {
        let expected = expected_calving(date(2026, 1, 10)).unwrap();
        assert_eq!((expected - date(2026, 1, 10)).num_days(), 283);
        assert_eq!(expected, date(2026, 10, 20));
    }

    #[test]
    fn calving_crosses_year_boundary() {
        let expected = expected_calving(date(2025, 11, 3)).unwrap();
        assert_eq!(expected, date(2026, 8, 13));
    }

    #[test]
    fn days_in_calf_counts_from_breeding() {
        assert_eq!(days_in_calf(date(2026, 1, 10), date(2026, 1, 10)), 0);
        assert_eq!(days_in_calf(date(2026, 1, 10), date(2026, 2, 10)), 31);
        assert_eq!(days_in_calf(date(2026, 1, 10), date(2026, 1, 1)), -9);
    }
}
