//! Game-economy timeline projection library
//!
//! This crate is the planning engine behind a grind-economy planner: it
//! projects a player's future in-game currency balances across a multi-week
//! horizon, schedules discrete spending events against those balances, and
//! derives weekly income and growth-rate figures from historical
//! play-session logs. It supports:
//! - A closed currency registry with per-currency capability flags
//! - Collision-free positioning of overlapping events on the week grid
//! - Growth-compounded balance projection with current-week proration
//! - Multi-week commitments with evenly apportioned costs
//! - Trailing-7-day income derivation and ISO-week regression growth rates
//! - An unaffordable-event check over the projected horizon
//!
//! Everything is a synchronous pure function over an immutable snapshot;
//! rendering, persistence, and formatting live in the host application.
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic snapshot setup:
//!
//! ```ignore
//! use grindplan_core::{Currency, EventSpec, HorizonWeeks, SnapshotBuilder, assemble};
//!
//! let snapshot = SnapshotBuilder::new(jiff::civil::date(2026, 8, 6))
//!     .horizon(HorizonWeeks::Twelve)
//!     .currency(Currency::Coins, 2_400.0, 500.0, 2.0)
//!     .event(EventSpec::new("Forge tier 4", Currency::Coins, 1_800.0, 3))
//!     .build()?;
//!
//! let timeline = assemble(&snapshot);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod assemble;
pub mod derive;
pub mod error;
pub mod position;
pub mod project;
pub mod week_math;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use assemble::assemble;
pub use config::{EventSpec, PlannerSnapshot, SnapshotBuilder};
pub use derive::derive_values;
pub use error::ConfigError;
pub use model::{
    Currency, CurrencyIncomeConfig, EventId, HorizonWeeks, LookbackPeriod, Run, RunField,
    SpendingEvent, TimelineData,
};
