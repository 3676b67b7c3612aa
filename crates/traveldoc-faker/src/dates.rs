//! Random calendar dates.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use traveldoc_core::AgeRange;

/// A date in `[min, max)`.
///
/// The span is clamped to at least one day, so `min` is returned when
/// `max <= min`.
pub fn random_date<R: Rng>(min: NaiveDate, max: NaiveDate, rng: &mut R) -> NaiveDate {
    let days = (max - min).num_days().max(1);
    min + Duration::days(rng.gen_range(0..days))
}

/// Birth-date bounds for ages in `ages` as of `today`.
///
/// Returns `(earliest, latest)`. Both bounds use `today`'s month and a day
/// of month capped at 28, so every year has the date.
pub fn birth_date_window(today: NaiveDate, ages: AgeRange) -> (NaiveDate, NaiveDate) {
    let day = today.day().min(28);
    let at = |years_back: u32| {
        let year = today.year().saturating_sub(i32::try_from(years_back).unwrap_or(i32::MAX));
        NaiveDate::from_ymd_opt(year, today.month(), day).unwrap_or(NaiveDate::MIN)
    };
    (at(ages.max), at(ages.min))
}
