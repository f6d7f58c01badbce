use std::fmt;

use crate::model::Currency;

/// Errors raised at the configuration-mutation boundary.
///
/// The projection components assume pre-validated input and never return
/// errors for data-shape reasons; everything that can be rejected is
/// rejected here, when a snapshot is being built or mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NegativeBalance { currency: Currency, value: f64 },
    NegativeIncome { currency: Currency, value: f64 },
    NonPositiveAmount { event: String, value: f64 },
    ZeroDuration { event: String },
    DuplicateCurrency(Currency),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeBalance { currency, value } => {
                write!(
                    f,
                    "balance for {} cannot be negative (got {value})",
                    currency.display_name()
                )
            }
            ConfigError::NegativeIncome { currency, value } => {
                write!(
                    f,
                    "weekly income for {} cannot be negative (got {value})",
                    currency.display_name()
                )
            }
            ConfigError::NonPositiveAmount { event, value } => {
                write!(f, "event {event:?} must cost more than zero (got {value})")
            }
            ConfigError::ZeroDuration { event } => {
                write!(f, "event {event:?} cannot have a zero-day duration")
            }
            ConfigError::DuplicateCurrency(currency) => {
                write!(
                    f,
                    "{} is already configured in this snapshot",
                    currency.display_name()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;
