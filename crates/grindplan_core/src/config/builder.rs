//! Snapshot builder
//!
//! Fluent API for assembling a `PlannerSnapshot` with automatic event-id
//! assignment. Specs are collected as written and resolved in one pass at
//! `build()`, which is where validation errors surface.

use jiff::civil::Date;

use crate::error::ConfigError;
use crate::model::{
    Currency, CurrencyIncomeConfig, EventId, HorizonWeeks, Run, SpendingEvent,
};

use super::PlannerSnapshot;

/// Declarative description of one spending event, before id assignment.
#[derive(Debug, Clone)]
pub struct EventSpec {
    name: String,
    currency: Currency,
    amount: f64,
    trigger_week: u32,
    duration_days: Option<u32>,
    priority: u8,
}

impl EventSpec {
    /// A single-week expenditure.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        amount: f64,
        trigger_week: u32,
    ) -> Self {
        Self {
            name: name.into(),
            currency,
            amount,
            trigger_week,
            duration_days: None,
            priority: 0,
        }
    }

    /// Spread the cost over a multi-week commitment of this many days.
    #[must_use]
    pub fn duration_days(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }

    /// Tie-break priority; lower claims the upper row on shared weeks.
    #[must_use]
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

/// Builder for creating snapshots with automatic id assignment.
pub struct SnapshotBuilder {
    reference_date: Date,
    horizon: HorizonWeeks,
    currencies: Vec<CurrencyIncomeConfig>,
    pending_events: Vec<EventSpec>,
    runs: Vec<Run>,
}

impl SnapshotBuilder {
    /// Start a snapshot anchored at the given reference date, with the
    /// default 12-week horizon.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        Self {
            reference_date,
            horizon: HorizonWeeks::default(),
            currencies: Vec::new(),
            pending_events: Vec::new(),
            runs: Vec::new(),
        }
    }

    /// Set the projection horizon.
    #[must_use]
    pub fn horizon(mut self, horizon: HorizonWeeks) -> Self {
        self.horizon = horizon;
        self
    }

    /// Enable a currency with manual figures. Growth is clamped and
    /// negative figures are rejected at `build()`.
    #[must_use]
    pub fn currency(
        mut self,
        currency: Currency,
        current_balance: f64,
        weekly_income: f64,
        growth_rate_percent: f64,
    ) -> Self {
        // Defer validation to build() so the fluent chain stays flat; the
        // config constructor re-checks there.
        self.currencies.push(CurrencyIncomeConfig {
            currency,
            current_balance,
            weekly_income,
            growth_rate_percent,
            source: Default::default(),
            last_derived: None,
        });
        self
    }

    /// Enable a currency from an already-validated config.
    #[must_use]
    pub fn currency_config(mut self, config: CurrencyIncomeConfig) -> Self {
        self.currencies.push(config);
        self
    }

    /// Queue a spending event. Ids are assigned in insertion order at
    /// `build()`.
    #[must_use]
    pub fn event(mut self, spec: EventSpec) -> Self {
        self.pending_events.push(spec);
        self
    }

    /// Append one historical run.
    #[must_use]
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a batch of historical runs.
    #[must_use]
    pub fn runs(mut self, runs: impl IntoIterator<Item = Run>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Resolve every pending spec into a validated snapshot.
    pub fn build(self) -> Result<PlannerSnapshot, ConfigError> {
        let mut snapshot = PlannerSnapshot::new(self.reference_date, self.horizon);

        for config in self.currencies {
            let validated = CurrencyIncomeConfig::new(
                config.currency,
                config.current_balance,
                config.weekly_income,
                config.growth_rate_percent,
            )?;
            snapshot.add_currency(CurrencyIncomeConfig {
                source: config.source,
                last_derived: config.last_derived,
                ..validated
            })?;
        }

        for (index, spec) in self.pending_events.into_iter().enumerate() {
            let mut event = SpendingEvent::new(
                EventId(index as u16),
                spec.name,
                spec.currency,
                spec.amount,
                spec.trigger_week,
            )?;
            if let Some(days) = spec.duration_days {
                event = event.with_duration_days(days)?;
            }
            snapshot.add_event(event.with_priority(spec.priority));
        }

        snapshot.runs = self.runs;
        Ok(snapshot)
    }
}
