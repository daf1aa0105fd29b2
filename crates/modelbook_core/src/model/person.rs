//! Person record with derived age, full name and compensation.
//!
//! # Responsibility
//! - Hold name parts, birth year and the salary pair behind validated setters.
//! - Derive age, full name and total compensation from stored state.
//!
//! # Invariants
//! - Base salary and bonus percent are always set together or not at all.
//! - Both salary components are non-negative after any successful write.
//! - A failed setter leaves every field unchanged.

use crate::model::error::{require_finite, InvalidArgument};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Salary pair stored atomically on a [`PersonRecord`].
///
/// Kept as one struct so the "never observed half-updated" contract is
/// enforced by the type rather than by setter discipline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salary {
    base: i64,
    bonus_percent: f64,
}

impl Salary {
    fn new(base: i64, bonus_percent: f64) -> Result<Self, InvalidArgument> {
        require_finite("bonus_percent", bonus_percent)?;
        if base < 0 {
            return Err(InvalidArgument::NegativeBaseSalary { base_salary: base });
        }
        if bonus_percent < 0.0 {
            return Err(InvalidArgument::NegativeBonusPercent { bonus_percent });
        }
        Ok(Self {
            base,
            bonus_percent,
        })
    }

    /// Base component plus the percentage bonus applied to it.
    fn total(&self) -> f64 {
        self.base as f64 + self.base as f64 * (self.bonus_percent / 100.0)
    }
}

/// Personal record with validated mutation and derived values.
///
/// Fields stay private; every write path that can violate an invariant
/// goes through a setter returning [`InvalidArgument`] on rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PersonRecordWire", try_from = "PersonRecordWire")]
pub struct PersonRecord {
    first_name: String,
    last_name: String,
    birth_year: Option<i32>,
    salary: Option<Salary>,
}

impl PersonRecord {
    /// Creates a record from optional initial parts.
    ///
    /// # Contract
    /// - Construction inputs are stored as given, without validation.
    /// - The salary pair starts unset and is only reachable via
    ///   [`PersonRecord::set_salary`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
            salary: None,
        }
    }

    /// Age relative to an explicit reference year.
    ///
    /// Returns `None` while the birth year is unset. No bounds are
    /// applied, so a future birth year yields a negative age.
    pub fn age_at(&self, current_year: i32) -> Option<i32> {
        self.birth_year.map(|year| current_year - year)
    }

    /// Age relative to the local clock's current year.
    pub fn age(&self) -> Option<i32> {
        self.age_at(chrono::Local::now().year())
    }

    /// Stores the birth year unconditionally.
    ///
    /// Integer-ness is guaranteed by the parameter type; negative and
    /// future years are accepted on purpose.
    pub fn set_birth_year(&mut self, year: i32) {
        self.birth_year = Some(year);
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// First and last name joined by one space, trimmed.
    ///
    /// Trimming keeps an empty first or last name from producing a
    /// stray leading or trailing space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Splits `text` on whitespace and stores the first two tokens.
    ///
    /// # Contract
    /// - Fewer than two tokens is rejected with
    ///   [`InvalidArgument::FullNameTokenCount`].
    /// - Tokens beyond the second (middle names etc.) are silently
    ///   discarded.
    pub fn set_full_name(&mut self, text: &str) -> Result<(), InvalidArgument> {
        let mut tokens = text.split_whitespace();
        let (first, last) = match (tokens.next(), tokens.next()) {
            (Some(first), Some(last)) => (first, last),
            (Some(_), None) => return Err(InvalidArgument::FullNameTokenCount { found: 1 }),
            _ => return Err(InvalidArgument::FullNameTokenCount { found: 0 }),
        };
        self.first_name = first.to_string();
        self.last_name = last.to_string();
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Stored base salary, `None` while the pair is unset.
    pub fn base_salary(&self) -> Option<i64> {
        self.salary.as_ref().map(|salary| salary.base)
    }

    /// Bonus percentage, `None` while the pair is unset.
    pub fn bonus_percent(&self) -> Option<f64> {
        self.salary.as_ref().map(|salary| salary.bonus_percent)
    }

    /// Total compensation: `base + base * (bonus_percent / 100)`.
    ///
    /// Returns `0.0` while the salary pair is unset.
    pub fn total_salary(&self) -> f64 {
        self.salary.as_ref().map(Salary::total).unwrap_or(0.0)
    }

    /// Validates and stores the salary pair atomically.
    ///
    /// # Contract
    /// - Checks run in order: bonus finiteness, base non-negativity,
    ///   bonus non-negativity.
    /// - All checks complete before any field is written, so a failed
    ///   call is a no-op and the pair is never half-updated.
    ///
    /// # Errors
    /// - [`InvalidArgument::NonFinite`] for a NaN or infinite bonus.
    /// - [`InvalidArgument::NegativeBaseSalary`] for `base_salary < 0`.
    /// - [`InvalidArgument::NegativeBonusPercent`] for `bonus_percent < 0`.
    pub fn set_salary(&mut self, base_salary: i64, bonus_percent: f64) -> Result<(), InvalidArgument> {
        self.salary = Some(Salary::new(base_salary, bonus_percent)?);
        Ok(())
    }
}

/// Flat serialization shape; decoding re-runs setter validation.
#[derive(Debug, Serialize, Deserialize)]
struct PersonRecordWire {
    first_name: String,
    last_name: String,
    birth_year: Option<i32>,
    base_salary: Option<i64>,
    bonus_percent: Option<f64>,
}

impl From<PersonRecord> for PersonRecordWire {
    fn from(record: PersonRecord) -> Self {
        Self {
            birth_year: record.birth_year,
            base_salary: record.base_salary(),
            bonus_percent: record.bonus_percent(),
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

impl TryFrom<PersonRecordWire> for PersonRecord {
    type Error = InvalidArgument;

    fn try_from(wire: PersonRecordWire) -> Result<Self, Self::Error> {
        let salary = match (wire.base_salary, wire.bonus_percent) {
            (Some(base), Some(bonus_percent)) => Some(Salary::new(base, bonus_percent)?),
            (None, None) => None,
            (Some(_), None) => {
                return Err(InvalidArgument::PartialSalaryPair {
                    present: "base_salary",
                })
            }
            (None, Some(_)) => {
                return Err(InvalidArgument::PartialSalaryPair {
                    present: "bonus_percent",
                })
            }
        };
        Ok(Self {
            first_name: wire.first_name,
            last_name: wire.last_name,
            birth_year: wire.birth_year,
            salary,
        })
    }
}
