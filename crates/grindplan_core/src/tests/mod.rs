//! Integration tests for the grindplan projection engine
//!
//! Tests are organized by topic:
//! - `positioning` - Event placement on the shared week grid
//! - `projection` - Balance projection mechanics
//! - `derivation` - Historical income/growth derivation
//! - `assembly` - Full timeline assembly from snapshots

mod positioning;
mod projection;
