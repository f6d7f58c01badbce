//! Spending events and their positioned form
//!
//! A spending event is a planned future expenditure against one currency:
//! a one-shot purchase, or a multi-week commitment (a lab upgrade that
//! locks in its cost over its duration). Positioning assigns each event a
//! week span and a display row; the positioned form is derived per render
//! and never persisted.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::currency::Currency;
use super::ids::EventId;

/// A planned future expenditure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEvent {
    pub event_id: EventId,
    pub name: String,
    /// Currency the amount is debited from.
    pub currency: Currency,
    /// Total cost in native units. Always positive.
    pub amount: f64,
    /// Week the expenditure begins; week 0 is the current week.
    pub trigger_week: u32,
    /// For multi-week commitments, the duration in days. Absent means the
    /// event occupies exactly one week.
    pub duration_days: Option<u32>,
    /// Tie-break for events starting the same week: lower priority claims
    /// the upper row.
    pub priority: u8,
}

impl SpendingEvent {
    /// Validated constructor: the amount must be positive.
    pub fn new(
        event_id: EventId,
        name: impl Into<String>,
        currency: Currency,
        amount: f64,
        trigger_week: u32,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if amount <= 0.0 {
            return Err(ConfigError::NonPositiveAmount {
                event: name,
                value: amount,
            });
        }
        Ok(Self {
            event_id,
            name,
            currency,
            amount,
            trigger_week,
            duration_days: None,
            priority: 0,
        })
    }

    /// Attach a duration, builder-style. Zero days is rejected; use no
    /// duration for a single-week event.
    pub fn with_duration_days(mut self, days: u32) -> Result<Self, ConfigError> {
        if days == 0 {
            return Err(ConfigError::ZeroDuration { event: self.name });
        }
        self.duration_days = Some(days);
        Ok(self)
    }

    /// Set the tie-break priority, builder-style.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Number of weeks the event occupies on a grid of `total_weeks`,
    /// clipped so the span never extends past the horizon. Zero when the
    /// trigger week itself is past the horizon.
    pub fn span_weeks(&self, total_weeks: u32) -> u32 {
        let natural = self.duration_days.map_or(1, |d| d.div_ceil(7).max(1));
        natural.min(total_weeks.saturating_sub(self.trigger_week))
    }
}

/// A spending event with its computed grid placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub event: SpendingEvent,
    pub start_week: u32,
    pub span_weeks: u32,
    /// Vertical row on the shared event grid. Events whose week ranges
    /// intersect never share a row.
    pub row: u32,
}

impl PositionedEvent {
    /// Whether the event's `[start_week, start_week + span_weeks)` range
    /// covers the given week index.
    pub fn covers_week(&self, week: u32) -> bool {
        week >= self.start_week && week < self.start_week + self.span_weeks
    }

    /// Cost debited in each covered week: the total amount spread evenly
    /// across the span.
    pub fn weekly_cost(&self) -> f64 {
        self.event.amount / self.span_weeks as f64
    }
}
