mod currency;
mod events;
mod ids;
mod income;
mod runs;
mod timeline;

pub use currency::Currency;
pub use events::{PositionedEvent, SpendingEvent};
pub use ids::EventId;
pub use income::{
    CurrencyIncomeConfig, DerivedGrowthRateResult, DerivedIncomeResult, DerivedValues,
    GROWTH_RATE_MAX, GROWTH_RATE_MIN, IncomeSource, LookbackPeriod,
};
pub use runs::{Run, RunField};
pub use timeline::{CurrencyProjection, HorizonWeeks, TimelineData, WeekDisplayData};
