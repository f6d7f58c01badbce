//! Historical income and growth derivation from the run log.
//!
//! Two independent derivations feed a derivable currency's config. Weekly
//! income comes from the trailing seven days of runs, grouped by calendar
//! day and extrapolated to a full week. The growth rate comes from an
//! ordinary-least-squares regression of ISO-week totals over the lookback
//! window — a trend line across all points is robust to one volatile week
//! (a tournament week with an outsized haul) in a way a first-to-last
//! delta is not.

use jiff::ToSpan;
use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::model::{
    Currency, DerivedGrowthRateResult, DerivedIncomeResult, DerivedValues, LookbackPeriod, Run,
};
use crate::week_math::{iso_week_key, lookback_floor};

/// Minimum distinct days before the income figure is trustworthy.
const MIN_INCOME_DAYS: usize = 3;
/// Minimum ISO weeks before the growth figure is trustworthy.
const MIN_GROWTH_WEEKS: usize = 4;

/// Derive both income and growth for a currency, or `None` when the
/// currency is not derivable. Never fails on an empty or sparse log; the
/// sufficiency flags report how much data backed each figure.
pub fn derive_values(
    runs: &[Run],
    currency: Currency,
    lookback: LookbackPeriod,
    reference_date: Date,
) -> Option<DerivedValues> {
    if !currency.is_derivable() {
        return None;
    }
    Some(DerivedValues {
        income: derive_weekly_income(runs, currency, reference_date),
        growth: derive_growth_rate(runs, currency, lookback, reference_date),
    })
}

/// 7-day rolling income, extrapolated to a weekly figure.
///
/// Runs from the seven calendar days ending at `reference_date` are
/// grouped by day; the figure is `total / distinct_days * 7`, rounded to
/// a whole unit. Days without runs shrink the divisor rather than
/// appearing as zeros.
pub fn derive_weekly_income(
    runs: &[Run],
    currency: Currency,
    reference_date: Date,
) -> DerivedIncomeResult {
    let earliest = reference_date.saturating_sub(6.days());

    let mut daily_totals: FxHashMap<Date, f64> = FxHashMap::default();
    let mut runs_analyzed = 0;
    for run in runs {
        let day = run.recorded_at.date();
        if day < earliest || day > reference_date {
            continue;
        }
        runs_analyzed += 1;
        *daily_totals.entry(day).or_insert(0.0) += run.total_for(currency);
    }

    let days_of_data = daily_totals.len();
    if days_of_data == 0 {
        return DerivedIncomeResult {
            weekly_income: 0.0,
            has_sufficient_data: false,
            days_of_data: 0,
            runs_analyzed: 0,
        };
    }

    let total: f64 = daily_totals.values().sum();
    let weekly_income = (total / days_of_data as f64 * 7.0).round();

    DerivedIncomeResult {
        weekly_income,
        has_sufficient_data: days_of_data >= MIN_INCOME_DAYS,
        days_of_data,
        runs_analyzed,
    }
}

/// Regression-based weekly growth rate over the lookback window.
///
/// Runs are bucketed by ISO-8601 week; weeks with no runs simply do not
/// appear as data points. The reported rate is the OLS slope of the
/// chronologically-ordered weekly totals, expressed as a percent of their
/// mean and rounded to one decimal.
pub fn derive_growth_rate(
    runs: &[Run],
    currency: Currency,
    lookback: LookbackPeriod,
    reference_date: Date,
) -> DerivedGrowthRateResult {
    let floor = lookback.months().map(|m| lookback_floor(reference_date, m));

    let mut weekly_totals: FxHashMap<(i16, i8), f64> = FxHashMap::default();
    for run in runs {
        let day = run.recorded_at.date();
        if day > reference_date {
            continue;
        }
        if let Some(floor) = floor
            && day < floor
        {
            continue;
        }
        *weekly_totals.entry(iso_week_key(day)).or_insert(0.0) += run.total_for(currency);
    }

    let mut week_keys: Vec<(i16, i8)> = weekly_totals.keys().copied().collect();
    week_keys.sort_unstable();
    let totals: Vec<f64> = week_keys.iter().map(|key| weekly_totals[key]).collect();

    let weeks_of_data = totals.len();
    DerivedGrowthRateResult {
        growth_rate_percent: growth_percent(&totals),
        has_sufficient_data: weeks_of_data >= MIN_GROWTH_WEEKS,
        weeks_of_data,
    }
}

/// OLS slope of weekly totals against week index 0, 1, 2, …, as a percent
/// of the mean total, rounded to one decimal. Zero when fewer than two
/// points exist or the mean is not positive.
fn growth_percent(totals: &[f64]) -> f64 {
    let n = totals.len();
    if n < 2 {
        return 0.0;
    }

    let count = n as f64;
    let mean_y = totals.iter().sum::<f64>() / count;
    if mean_y <= 0.0 {
        return 0.0;
    }

    let mean_x = (count - 1.0) / 2.0;
    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (index, total) in totals.iter().enumerate() {
        let dx = index as f64 - mean_x;
        covariance += dx * (total - mean_y);
        variance += dx * dx;
    }

    let slope = covariance / variance;
    (slope / mean_y * 1000.0).round() / 10.0
}
