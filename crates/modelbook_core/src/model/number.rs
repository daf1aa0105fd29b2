//! Strictly-positive numeric holder.

use crate::model::error::{require_finite, InvalidArgument};
use serde::{Deserialize, Serialize};

/// Single numeric slot that only accepts strictly positive, finite writes.
///
/// The value starts unset; a failed write leaves the previous state
/// (including "never set") untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "ValidatedNumberWire", try_from = "ValidatedNumberWire")]
pub struct ValidatedNumber {
    value: Option<f64>,
}

impl ValidatedNumber {
    /// Creates an unset holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value, `None` before the first successful write.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Validates and stores a value.
    ///
    /// # Errors
    /// - [`InvalidArgument::NonFinite`] for NaN or infinite input.
    /// - [`InvalidArgument::NonPositiveValue`] for `value <= 0`.
    pub fn set_value(&mut self, value: f64) -> Result<(), InvalidArgument> {
        require_finite("value", value)?;
        if value <= 0.0 {
            return Err(InvalidArgument::NonPositiveValue { value });
        }
        self.value = Some(value);
        Ok(())
    }
}

/// Serialization shape; decoding re-runs setter validation.
#[derive(Debug, Serialize, Deserialize)]
struct ValidatedNumberWire {
    value: Option<f64>,
}

impl From<ValidatedNumber> for ValidatedNumberWire {
    fn from(number: ValidatedNumber) -> Self {
        Self {
            value: number.value,
        }
    }
}

impl TryFrom<ValidatedNumberWire> for ValidatedNumber {
    type Error = InvalidArgument;

    fn try_from(wire: ValidatedNumberWire) -> Result<Self, Self::Error> {
        let mut number = ValidatedNumber::new();
        if let Some(value) = wire.value {
            number.set_value(value)?;
        }
        Ok(number)
    }
}
