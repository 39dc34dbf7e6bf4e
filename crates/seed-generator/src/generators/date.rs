//! Calendar date generators.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Draw a date uniformly from the inclusive range `[start, end]`.
///
/// If the range is empty or degenerate (`start >= end`), `start` is
/// returned as-is.
pub fn date_between<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    if start >= end {
        return start;
    }

    let span_days = (end - start).num_days() as u64;
    let offset = rng.random_range(0..=span_days);
    start.checked_add_days(Days::new(offset)).unwrap_or(start)
}
