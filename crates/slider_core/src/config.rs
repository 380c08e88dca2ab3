//! Typed slider configuration and its single validation pass.

use crate::error::{SliderError, SliderResult};
use crate::rounding::Rounding;
use crate::value::{Limits, Range, ValueModel};

/// Configuration as supplied by the caller; any field may still be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliderConfig {
    pub rounding: Option<Rounding>,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    pub cur_min: Option<f64>,
    /// Defaults to `cur_min` when absent.
    pub cur_max: Option<f64>,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
}

/// A configuration that passed [`SliderConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedConfig {
    pub rounding: Rounding,
    pub range: Range,
    pub limits: Limits,
    pub cur_min: f64,
    pub cur_max: f64,
}

impl SliderConfig {
    /// Fails with [`SliderError::MissingConfiguration`] naming the first
    /// absent required field, checked in the order rounding, range_min,
    /// range_max, cur_min.
    pub fn check_required(&self) -> SliderResult<()> {
        required(self.rounding.as_ref(), "rounding")?;
        required(self.range_min, "range_min")?;
        required(self.range_max, "range_max")?;
        required(self.cur_min, "cur_min")?;
        Ok(())
    }

    pub fn validate(&self) -> SliderResult<ValidatedConfig> {
        let rounding = required(self.rounding.clone(), "rounding")?;
        let range_min = required(self.range_min, "range_min")?;
        let range_max = required(self.range_max, "range_max")?;
        let cur_min = required(self.cur_min, "cur_min")?;

        let limits = Limits::new(self.lower_limit, self.upper_limit)?;
        let range = Range::new(range_min, range_max)?;

        Ok(ValidatedConfig {
            rounding,
            range,
            limits,
            cur_min,
            cur_max: self.cur_max.unwrap_or(cur_min),
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> SliderResult<T> {
    value.ok_or(SliderError::MissingConfiguration { field })
}

impl ValidatedConfig {
    pub fn into_model(self) -> SliderResult<ValueModel> {
        ValueModel::new(
            self.range,
            self.limits,
            self.rounding,
            self.cur_min,
            self.cur_max,
        )
    }
}
