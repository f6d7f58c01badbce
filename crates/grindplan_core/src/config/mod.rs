//! Planner snapshot configuration
//!
//! A `PlannerSnapshot` captures everything one timeline computation reads:
//! the reference date, the horizon, per-currency income configs, the event
//! queue, and the run log. Mutation happens here, behind validation; the
//! projection components downstream assume pre-validated input.
//!
//! For ergonomic setup use the builder DSL:
//!
//! ```ignore
//! use grindplan_core::{Currency, EventSpec, HorizonWeeks, SnapshotBuilder};
//!
//! let snapshot = SnapshotBuilder::new(jiff::civil::date(2026, 8, 6))
//!     .horizon(HorizonWeeks::Twelve)
//!     .currency(Currency::Coins, 2_400.0, 500.0, 2.0)
//!     .currency(Currency::Stones, 130.0, 40.0, 0.0)
//!     .event(EventSpec::new("Forge tier 4", Currency::Coins, 1_800.0, 3))
//!     .event(EventSpec::new("Lab: haste", Currency::Stones, 90.0, 1).duration_days(21))
//!     .build()?;
//! ```

mod builder;

pub use builder::{EventSpec, SnapshotBuilder};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::derive::derive_values;
use crate::error::ConfigError;
use crate::model::{
    Currency, CurrencyIncomeConfig, EventId, HorizonWeeks, LookbackPeriod, Run, SpendingEvent,
};

/// Everything one timeline computation reads, captured as an immutable
/// value for the duration of that computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    /// The "now" date; week 0 is the week containing it.
    pub reference_date: Date,
    pub horizon: HorizonWeeks,
    /// One config per enabled currency. A currency absent here is simply
    /// not projected.
    pub currencies: Vec<CurrencyIncomeConfig>,
    pub events: Vec<SpendingEvent>,
    pub runs: Vec<Run>,
}

impl PlannerSnapshot {
    /// Empty snapshot at the given reference date and horizon.
    pub fn new(reference_date: Date, horizon: HorizonWeeks) -> Self {
        Self {
            reference_date,
            horizon,
            currencies: Vec::new(),
            events: Vec::new(),
            runs: Vec::new(),
        }
    }

    /// Enable a currency by adding its income config. Each currency can be
    /// configured at most once.
    pub fn add_currency(&mut self, config: CurrencyIncomeConfig) -> Result<(), ConfigError> {
        if self.currencies.iter().any(|c| c.currency == config.currency) {
            return Err(ConfigError::DuplicateCurrency(config.currency));
        }
        self.currencies.push(config);
        Ok(())
    }

    /// Queue a spending event. Validation happened when the event was
    /// constructed.
    pub fn add_event(&mut self, event: SpendingEvent) {
        self.events.push(event);
    }

    /// Remove one event by id. Returns whether anything was removed.
    pub fn remove_event(&mut self, event_id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.event_id != event_id);
        self.events.len() != before
    }

    /// Clear the event queue.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Enabled currencies in canonical registry order.
    pub fn enabled_currencies(&self) -> Vec<Currency> {
        let enabled: Vec<Currency> = self.currencies.iter().map(|c| c.currency).collect();
        Currency::enabled_in_order(&enabled)
    }

    /// Income configs in canonical registry order — the order the grid
    /// renders currencies in.
    pub fn configs_in_order(&self) -> Vec<&CurrencyIncomeConfig> {
        self.enabled_currencies()
            .into_iter()
            .filter_map(|currency| self.config(currency))
            .collect()
    }

    /// Config for one currency, if enabled.
    pub fn config(&self, currency: Currency) -> Option<&CurrencyIncomeConfig> {
        self.currencies.iter().find(|c| c.currency == currency)
    }

    /// Mutable config for one currency, if enabled.
    pub fn config_mut(&mut self, currency: Currency) -> Option<&mut CurrencyIncomeConfig> {
        self.currencies.iter_mut().find(|c| c.currency == currency)
    }

    /// Re-run the historical deriver against the current run log and cache
    /// the results on every enabled derivable currency, switching their
    /// source to `Derived`.
    pub fn refresh_derived(&mut self, lookback: LookbackPeriod) {
        let reference_date = self.reference_date;
        let runs = &self.runs;
        for config in &mut self.currencies {
            if let Some(derived) = derive_values(runs, config.currency, lookback, reference_date) {
                config.apply_derived(derived);
            }
        }
    }
}
