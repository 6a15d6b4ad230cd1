//! Linear normalization of attribute values into the unit interval.

use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, Result};

/// Normalized position used for every value when the range collapses to a point
pub const DEGENERATE_MIDPOINT: f64 = 0.5;

/// What to do when every value is identical (`min == max`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateRangePolicy {
    /// Map every value to the middle of the ramp
    #[default]
    Midpoint,
    /// Fail with [`ChoroplethError::DegenerateRange`]
    Reject,
}

/// Minimum and maximum of the attribute over all regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationRange {
    pub min: f64,
    pub max: f64,
}

impl NormalizationRange {
    /// Build a range, rejecting non-finite or inverted bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChoroplethError::InvalidParameter {
                param: "range".to_string(),
                message: format!("invalid normalization range [{}, {}]", min, max),
            });
        }
        Ok(Self { min, max })
    }

    /// Scan the values once for their minimum and maximum.
    ///
    /// Fails on an empty input and on the first NaN or infinite value.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(f64, f64)> = None;

        for (index, value) in values.into_iter().enumerate() {
            if !value.is_finite() {
                return Err(ChoroplethError::NonFiniteValue { index, value });
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        let (min, max) = bounds.ok_or(ChoroplethError::EmptyInput)?;
        Ok(Self { min, max })
    }

    /// True when every value was the same
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Width of the range; infinite when `max - min` overflows
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Normalize `value` to `(value - min) / (max - min)`.
    ///
    /// The result is not clamped; values from the same collection always land
    /// in [0, 1].
    pub fn normalize(&self, value: f64, policy: DegenerateRangePolicy) -> Result<f64> {
        if self.is_degenerate() {
            return match policy {
                DegenerateRangePolicy::Midpoint => Ok(DEGENERATE_MIDPOINT),
                DegenerateRangePolicy::Reject => {
                    Err(ChoroplethError::DegenerateRange { value: self.min })
                }
            };
        }
        let span = self.span();
        if span.is_finite() {
            return Ok((value - self.min) / span);
        }
        // Both ends are finite, so their halves differ by at most f64::MAX
        Ok((value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0))
    }

    /// Value at normalized position `t`, used for legend ticks
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min * (1.0 - t) + self.max * t
    }
}
