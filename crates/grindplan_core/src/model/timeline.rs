//! Assembled timeline output
//!
//! Contains the output types from one assembly pass: per-currency week
//! rows, the shared positioned-event grid, and the unaffordable-event
//! list. Presentation performs no further balance arithmetic on these,
//! only formatting.

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::events::PositionedEvent;
use super::ids::EventId;

/// Supported projection horizons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizonWeeks {
    Four,
    Eight,
    #[default]
    Twelve,
    TwentySix,
    FiftyTwo,
}

impl HorizonWeeks {
    /// Every horizon, shortest first.
    pub const ALL: [HorizonWeeks; 5] = [
        HorizonWeeks::Four,
        HorizonWeeks::Eight,
        HorizonWeeks::Twelve,
        HorizonWeeks::TwentySix,
        HorizonWeeks::FiftyTwo,
    ];

    /// Number of weeks projected.
    pub fn count(self) -> u32 {
        match self {
            HorizonWeeks::Four => 4,
            HorizonWeeks::Eight => 8,
            HorizonWeeks::Twelve => 12,
            HorizonWeeks::TwentySix => 26,
            HorizonWeeks::FiftyTwo => 52,
        }
    }
}

/// One rendered week for one currency.
///
/// Invariants: `balance = prior_balance + income - expenditure`, and the
/// prior balance of week N equals the balance of week N-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekDisplayData {
    pub prior_balance: f64,
    pub income: f64,
    pub expenditure: f64,
    pub balance: f64,
}

/// Full projection for one currency across the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyProjection {
    pub currency: Currency,
    /// One entry per week, index 0 = current week.
    pub weeks: Vec<WeekDisplayData>,
    /// Positioned events owned by this currency.
    pub events: Vec<PositionedEvent>,
}

impl CurrencyProjection {
    /// Ending balance of the last projected week.
    pub fn final_balance(&self) -> f64 {
        self.weeks.last().map_or(0.0, |w| w.balance)
    }

    /// Lowest ending balance across the horizon.
    pub fn lowest_balance(&self) -> f64 {
        self.weeks
            .iter()
            .map(|w| w.balance)
            .fold(f64::INFINITY, f64::min)
    }

    /// First week whose ending balance is negative, if any.
    pub fn first_negative_week(&self) -> Option<usize> {
        self.weeks.iter().position(|w| w.balance < 0.0)
    }
}

/// Everything presentation needs to render the timeline grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    /// Sunday anchor date of each projected week, index 0 = current week.
    pub week_dates: Vec<jiff::civil::Date>,
    /// Per-currency projections, in registry order of the enabled set.
    pub projections: Vec<CurrencyProjection>,
    /// All positioned events across currencies, for the shared row grid.
    pub positioned_events: Vec<PositionedEvent>,
    /// Events whose currency balance goes negative at their trigger week
    /// and never recovers within the horizon.
    pub unaffordable: Vec<EventId>,
}

impl TimelineData {
    /// Number of weeks projected.
    pub fn horizon_weeks(&self) -> usize {
        self.week_dates.len()
    }

    /// Projection for a single currency, if it is enabled.
    pub fn projection(&self, currency: Currency) -> Option<&CurrencyProjection> {
        self.projections.iter().find(|p| p.currency == currency)
    }

    /// Positioned events covering the given week, across all currencies.
    pub fn events_in_week(&self, week: u32) -> impl Iterator<Item = &PositionedEvent> {
        self.positioned_events
            .iter()
            .filter(move |p| p.covers_week(week))
    }

    /// Whether the given event was flagged unaffordable.
    pub fn is_unaffordable(&self, event_id: EventId) -> bool {
        self.unaffordable.contains(&event_id)
    }

    /// Number of rows the shared event grid needs.
    pub fn row_count(&self) -> u32 {
        self.positioned_events
            .iter()
            .map(|p| p.row + 1)
            .max()
            .unwrap_or(0)
    }

    /// Ending balance of the last week for a currency, zero when the
    /// currency is not enabled.
    pub fn final_balance(&self, currency: Currency) -> f64 {
        self.projection(currency).map_or(0.0, |p| p.final_balance())
    }
}
