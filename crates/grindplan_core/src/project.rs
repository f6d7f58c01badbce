//! Balance projection for a single currency.
//!
//! Walks the week sequence from week 0, combining the starting balance,
//! growth-compounded weekly income (prorated for the partially-elapsed
//! current week), and scheduled expenditure into the per-week display
//! rows. Negative balances are a valid, displayed state signalling
//! insufficient funds; nothing here clamps them.

use rustc_hash::FxHashMap;

use crate::model::{PositionedEvent, WeekDisplayData};

/// Inputs for projecting one currency across the horizon.
#[derive(Debug, Clone)]
pub struct ProjectionInput<'a> {
    /// Balance on hand at the start of week 0.
    pub starting_balance: f64,
    /// Full (unprorated) weekly income at week 0's growth base.
    pub weekly_income: f64,
    /// Week-over-week growth percent applied per elapsed week.
    pub growth_rate_percent: f64,
    /// Fraction of week 0 still remaining; scales only week 0's income.
    pub proration_factor: f64,
    /// Number of weeks to project.
    pub total_weeks: u32,
    /// Scheduled expenditure per week index, already apportioned.
    pub expenditures: &'a FxHashMap<u32, f64>,
}

/// Project one currency week by week.
///
/// Income for week N is `weekly_income * (1 + growth/100)^N`; week 0 is
/// additionally scaled by the proration factor — the current week is the
/// only one assumed not to complete fully. Each week's ending balance
/// feeds the next week's prior balance.
pub fn project_currency(input: &ProjectionInput) -> Vec<WeekDisplayData> {
    let growth = 1.0 + input.growth_rate_percent / 100.0;

    let mut weeks = Vec::with_capacity(input.total_weeks as usize);
    let mut prior_balance = input.starting_balance;

    for week in 0..input.total_weeks {
        let mut income = input.weekly_income * growth.powi(week as i32);
        if week == 0 {
            income *= input.proration_factor;
        }
        let expenditure = input.expenditures.get(&week).copied().unwrap_or(0.0);
        let balance = prior_balance + income - expenditure;

        weeks.push(WeekDisplayData {
            prior_balance,
            income,
            expenditure,
            balance,
        });
        prior_balance = balance;
    }

    weeks
}

/// Sum the apportioned cost of every positioned event into a per-week
/// expenditure map. A multi-week commitment debits `amount / span_weeks`
/// in each covered week.
pub fn weekly_expenditures(
    events: &[PositionedEvent],
    total_weeks: u32,
) -> FxHashMap<u32, f64> {
    let mut by_week = FxHashMap::default();
    for positioned in events {
        let weekly_cost = positioned.weekly_cost();
        let end = (positioned.start_week + positioned.span_weeks).min(total_weeks);
        for week in positioned.start_week..end {
            *by_week.entry(week).or_insert(0.0) += weekly_cost;
        }
    }
    by_week
}
