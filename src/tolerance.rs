//! Permitted-deviation model shared by every matcher that accepts one.
//!
//! A tolerance is a `{value, unit}` pair. Pixel tolerances are used as-is;
//! percent tolerances are scaled against a reference dimension that varies
//! by matcher (a container size, the reference element's size, or the
//! expected value itself). Matchers validate the tolerance before fetching
//! any geometry so a bad configuration fails without touching the page.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceUnit {
    Percent,
    Pixels,
}

impl Default for ToleranceUnit {
    fn default() -> Self {
        ToleranceUnit::Percent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tolerance {
    pub value: f64,
    pub unit: ToleranceUnit,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            value: 0.0,
            unit: ToleranceUnit::Percent,
        }
    }
}

impl Tolerance {
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: ToleranceUnit::Percent,
        }
    }

    pub fn pixels(value: f64) -> Self {
        Self {
            value,
            unit: ToleranceUnit::Pixels,
        }
    }

    /// Rejects negative and non-finite values. A NaN tolerance would make
    /// every inclusive comparison false and masquerade as a layout failure.
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(MatchError::InvalidTolerance { value: self.value });
        }
        Ok(())
    }

    /// Resolved allowance in pixels. `reference_dimension` only participates
    /// for percent tolerances.
    pub fn resolve(&self, reference_dimension: f64) -> f64 {
        match self.unit {
            ToleranceUnit::Pixels => self.value,
            ToleranceUnit::Percent => (self.value / 100.0) * reference_dimension,
        }
    }
}
