//! Currency registry
//!
//! The set of planner currencies is closed: each variant carries its display
//! metadata and capability flags as process-wide constants. A currency is
//! either *derivable* (its weekly income and growth can be computed from the
//! run log) or manual-entry only, and a derivable currency names the run
//! fields that contribute to it. Stones are the breakdown case: no single
//! per-run income field exists, so the combined drop total and the raw
//! fragment accumulator are summed.

use serde::{Deserialize, Serialize};

use super::runs::RunField;

/// A planner currency. The set is fixed at compile time; currencies are
/// never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    Coins,
    Stones,
    Gems,
    Trophies,
}

impl Currency {
    /// Every currency, in canonical registry (display) order.
    pub const ALL: [Currency; 4] = [
        Currency::Coins,
        Currency::Stones,
        Currency::Gems,
        Currency::Trophies,
    ];

    /// Full display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Currency::Coins => "Coins",
            Currency::Stones => "Stones",
            Currency::Gems => "Gems",
            Currency::Trophies => "Trophies",
        }
    }

    /// Short label used in dense grid cells.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Currency::Coins => "CN",
            Currency::Stones => "ST",
            Currency::Gems => "GM",
            Currency::Trophies => "TR",
        }
    }

    /// Theme color token the presentation layer maps to an actual color.
    pub fn color_token(self) -> &'static str {
        match self {
            Currency::Coins => "gold",
            Currency::Stones => "slate",
            Currency::Gems => "emerald",
            Currency::Trophies => "amber",
        }
    }

    /// Whether weekly income and growth can be derived from the run log.
    /// Gems are purchase/reward-only and carry no per-run income field.
    pub fn is_derivable(self) -> bool {
        !matches!(self, Currency::Gems)
    }

    /// Whether the currency's per-run income is a breakdown across several
    /// fields rather than a single cached total.
    pub fn has_breakdown(self) -> bool {
        matches!(self, Currency::Stones)
    }

    /// Run fields that contribute to this currency's income. Empty for
    /// non-derivable currencies.
    pub fn run_fields(self) -> &'static [RunField] {
        match self {
            Currency::Coins => &[RunField::Coins],
            Currency::Stones => &[RunField::Stones, RunField::RawStones],
            Currency::Gems => &[],
            Currency::Trophies => &[RunField::Trophies],
        }
    }

    /// Filter an enabled set down to registry order, dropping duplicates.
    /// The grid renders currencies in this order regardless of the order
    /// the caller enabled them in.
    pub fn enabled_in_order(enabled: &[Currency]) -> Vec<Currency> {
        Currency::ALL
            .iter()
            .copied()
            .filter(|c| enabled.contains(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_in_order_ignores_input_order() {
        let enabled = [Currency::Trophies, Currency::Coins, Currency::Coins];
        assert_eq!(
            Currency::enabled_in_order(&enabled),
            vec![Currency::Coins, Currency::Trophies]
        );
    }

    #[test]
    fn test_gems_are_manual_only() {
        assert!(!Currency::Gems.is_derivable());
        assert!(Currency::Gems.run_fields().is_empty());
    }

    #[test]
    fn test_stones_breakdown_fields() {
        assert!(Currency::Stones.has_breakdown());
        assert_eq!(
            Currency::Stones.run_fields(),
            &[RunField::Stones, RunField::RawStones]
        );
    }
}
