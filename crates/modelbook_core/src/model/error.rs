//! Shared validation error for all model setters.
//!
//! # Responsibility
//! - Name every precondition a validated setter can reject.
//! - Keep error data structured so callers can match on the exact cause.
//!
//! # Invariants
//! - A returned error means the target entity was not mutated at all.
//! - Validation order is uniform: finiteness before range checks.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection cause for a validated write.
///
/// Every setter in this crate fails fast with one of these variants and
/// leaves the entity in its prior, still-valid state.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    /// A floating-point input was NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// Base salary below zero.
    NegativeBaseSalary { base_salary: i64 },
    /// Bonus percentage below zero.
    NegativeBonusPercent { bonus_percent: f64 },
    /// A full name needs at least a first and a last token.
    FullNameTokenCount { found: usize },
    /// Circle radius below zero.
    NegativeRadius { radius: f64 },
    /// Circle diameter below zero.
    NegativeDiameter { diameter: f64 },
    /// A validated number must be strictly positive.
    NonPositiveValue { value: f64 },
    /// Salary components must be set as a pair.
    PartialSalaryPair { present: &'static str },
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            Self::NegativeBaseSalary { base_salary } => {
                write!(f, "base salary must be non-negative, got {base_salary}")
            }
            Self::NegativeBonusPercent { bonus_percent } => {
                write!(f, "bonus percent must be non-negative, got {bonus_percent}")
            }
            Self::FullNameTokenCount { found } => write!(
                f,
                "full name must include both first and last names, got {found} token(s)"
            ),
            Self::NegativeRadius { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::NegativeDiameter { diameter } => {
                write!(f, "diameter must be non-negative, got {diameter}")
            }
            Self::NonPositiveValue { value } => {
                write!(f, "value must be strictly positive, got {value}")
            }
            Self::PartialSalaryPair { present } => write!(
                f,
                "base salary and bonus percent must be set together; only {present} was provided"
            ),
        }
    }
}

impl Error for InvalidArgument {}

/// Rejects NaN and infinities before any range check runs.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), InvalidArgument> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidArgument::NonFinite { field, value })
    }
}
