//! Per-currency income configuration and derivation results
//!
//! Each enabled currency carries one `CurrencyIncomeConfig`: the starting
//! balance, the full (unprorated) weekly income, and a growth-rate percent.
//! For derivable currencies the config also records whether those figures
//! are manually entered or come from the historical deriver, along with the
//! most recent derivation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::currency::Currency;

/// Lower clamp for the growth-rate percent.
pub const GROWTH_RATE_MIN: f64 = -100.0;
/// Upper clamp for the growth-rate percent.
pub const GROWTH_RATE_MAX: f64 = 1000.0;

/// Where a derivable currency's income figures come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeSource {
    /// Figures typed in by the user.
    #[default]
    Manual,
    /// Figures computed from the run log.
    Derived,
}

/// Lookback window for the growth-rate regression, measured in calendar
/// months back from the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookbackPeriod {
    ThreeMonths,
    SixMonths,
    AllTime,
}

impl LookbackPeriod {
    /// Month offset from the reference date, `None` for no lower bound.
    pub fn months(self) -> Option<i64> {
        match self {
            LookbackPeriod::ThreeMonths => Some(3),
            LookbackPeriod::SixMonths => Some(6),
            LookbackPeriod::AllTime => None,
        }
    }
}

/// Weekly income derived from the trailing seven days of runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedIncomeResult {
    /// 7-day-extrapolated weekly figure, rounded to a whole unit. Always
    /// the extrapolated value even when fewer than seven days of data
    /// exist.
    pub weekly_income: f64,
    /// True once at least three distinct days contributed runs.
    pub has_sufficient_data: bool,
    /// Count of distinct calendar days with at least one run.
    pub days_of_data: usize,
    /// Count of runs inside the trailing window.
    pub runs_analyzed: usize,
}

/// Weekly growth rate derived by regression over ISO-week totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedGrowthRateResult {
    /// Regression slope as a percent of the mean weekly total, rounded to
    /// one decimal. Zero when fewer than two weeks exist or the mean is
    /// not positive.
    pub growth_rate_percent: f64,
    /// True once at least four ISO weeks contributed runs.
    pub has_sufficient_data: bool,
    /// Count of distinct ISO weeks with at least one run.
    pub weeks_of_data: usize,
}

/// One full derivation pass for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedValues {
    pub income: DerivedIncomeResult,
    pub growth: DerivedGrowthRateResult,
}

/// Income configuration for one enabled currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyIncomeConfig {
    pub currency: Currency,
    /// Balance on hand at the start of week 0. Never negative.
    pub current_balance: f64,
    /// Full weekly income before proration and growth. Never negative.
    pub weekly_income: f64,
    /// Week-over-week growth percent, clamped to [-100, 1000].
    pub growth_rate_percent: f64,
    /// Whether the projection reads the manual figures or the cached
    /// derivation. Meaningless (always `Manual`) for non-derivable
    /// currencies.
    pub source: IncomeSource,
    /// Most recent deriver output, kept so the projection can use it
    /// without re-running the deriver.
    pub last_derived: Option<DerivedValues>,
}

impl CurrencyIncomeConfig {
    /// Validated constructor: rejects negative balance and income, clamps
    /// the growth rate into [-100, 1000]. The source starts as `Manual`
    /// with no cached derivation.
    pub fn new(
        currency: Currency,
        current_balance: f64,
        weekly_income: f64,
        growth_rate_percent: f64,
    ) -> Result<Self, ConfigError> {
        if current_balance < 0.0 {
            return Err(ConfigError::NegativeBalance {
                currency,
                value: current_balance,
            });
        }
        if weekly_income < 0.0 {
            return Err(ConfigError::NegativeIncome {
                currency,
                value: weekly_income,
            });
        }
        Ok(Self {
            currency,
            current_balance,
            weekly_income,
            growth_rate_percent: growth_rate_percent.clamp(GROWTH_RATE_MIN, GROWTH_RATE_MAX),
            source: IncomeSource::Manual,
            last_derived: None,
        })
    }

    /// Cache a fresh derivation and switch the source over to it. This is
    /// the mutation the host performs when the user re-runs the deriver.
    pub fn apply_derived(&mut self, derived: DerivedValues) {
        self.last_derived = Some(derived);
        self.source = IncomeSource::Derived;
    }

    /// Weekly income the projection should use: the cached derivation when
    /// the source is `Derived` and a derivation exists, otherwise the
    /// manual figure.
    pub fn effective_weekly_income(&self) -> f64 {
        match (self.source, self.last_derived) {
            (IncomeSource::Derived, Some(derived)) => derived.income.weekly_income,
            _ => self.weekly_income,
        }
    }

    /// Growth-rate percent the projection should use, by the same rule as
    /// [`Self::effective_weekly_income`].
    pub fn effective_growth_rate(&self) -> f64 {
        match (self.source, self.last_derived) {
            (IncomeSource::Derived, Some(derived)) => derived.growth.growth_rate_percent,
            _ => self.growth_rate_percent,
        }
    }
}
