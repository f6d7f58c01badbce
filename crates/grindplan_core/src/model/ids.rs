//! Unique identifiers for planner entities
//!
//! Ids are small integer newtypes so different entity kinds cannot be
//! mixed up at call sites.

use serde::{Deserialize, Serialize};

/// Unique identifier for a spending event within a planning session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u16);
