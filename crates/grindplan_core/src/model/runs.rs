//! Historical play-session records
//!
//! A run is one recorded play session: a civil timestamp plus a map of named
//! numeric fields. The log carries more fields than the planner reads; the
//! deriver only looks at the fields a derivable currency names via
//! [`Currency::run_fields`].

use jiff::civil::DateTime;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Named numeric fields a run may carry. Closed set: the engine never reads
/// fields it does not know about, even if the surrounding application logs
/// more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunField {
    /// Coins earned over the run (combined total).
    Coins,
    /// Stone drops, already converted to whole stones.
    Stones,
    /// Raw stone fragments picked up but not yet converted.
    RawStones,
    /// Trophies awarded at run end.
    Trophies,
    /// Enemies defeated. Logged, never read by the planner.
    Kills,
    /// Wall-clock length of the session. Logged, never read by the planner.
    DurationSeconds,
}

/// One recorded play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// When the session finished, as a civil (wall-clock) timestamp.
    /// Day bucketing truncates this to its calendar date; no timezone
    /// normalisation is applied.
    pub recorded_at: DateTime,
    /// Numeric fields captured for the session.
    pub fields: FxHashMap<RunField, f64>,
}

impl Run {
    /// Create an empty run at the given timestamp.
    pub fn new(recorded_at: DateTime) -> Self {
        Self {
            recorded_at,
            fields: FxHashMap::default(),
        }
    }

    /// Attach a field value, builder-style.
    #[must_use]
    pub fn with_field(mut self, field: RunField, value: f64) -> Self {
        self.fields.insert(field, value);
        self
    }

    /// Value of a single field, zero when the run did not record it.
    pub fn field(&self, field: RunField) -> f64 {
        self.fields.get(&field).copied().unwrap_or(0.0)
    }

    /// Total contribution of this run to a currency's income: the sum of
    /// every field the currency's registry entry names. Zero for
    /// non-derivable currencies.
    pub fn total_for(&self, currency: Currency) -> f64 {
        currency.run_fields().iter().map(|f| self.field(*f)).sum()
    }
}
