//! Sunday-anchored week helpers for the projection grid.
//!
//! The display grid anchors weeks on Sunday (day-of-week 0), so week 0 of a
//! projection starts on the Sunday of the reference date's week. The growth
//! regression is the one deliberate exception: it buckets runs by ISO-8601
//! weeks (Monday-anchored, Thursday rule), matching how its source data is
//! reported.

use jiff::ToSpan;
use jiff::civil::Date;

/// The Sunday on or before `date`: the anchor of its display week.
pub fn sunday_of_week(date: Date) -> Date {
    let offset = i64::from(date.weekday().to_sunday_zero_offset());
    date.saturating_sub(offset.days())
}

/// Sunday anchor dates for a projection of `total_weeks` weeks, starting
/// with the week containing `reference`.
pub fn week_dates(reference: Date, total_weeks: u32) -> Vec<Date> {
    let start = sunday_of_week(reference);
    (0..total_weeks)
        .map(|week| start.saturating_add((i64::from(week) * 7).days()))
        .collect()
}

/// Fraction of the current week still ahead of `date`, in (0, 1].
///
/// Sunday yields 1.0 (the whole week remains), Saturday 1/7. Scales week
/// 0's income so a partially-elapsed week is not overstated; later weeks
/// always use the full figure.
pub fn proration_factor(date: Date) -> f64 {
    let days_remaining = 7 - i64::from(date.weekday().to_sunday_zero_offset());
    days_remaining as f64 / 7.0
}

/// ISO-8601 week key `(year, week)` for regression bucketing. The tuple
/// orders chronologically.
pub fn iso_week_key(date: Date) -> (i16, i8) {
    let week_date = date.iso_week_date();
    (week_date.year(), week_date.week())
}

/// Inclusive lower bound of a lookback window of `months` calendar months
/// ending at `reference`.
pub fn lookback_floor(reference: Date, months: i64) -> Date {
    reference.saturating_sub(months.months())
}
