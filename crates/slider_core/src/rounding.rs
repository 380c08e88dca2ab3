//! Fixed-step and tiered rounding.
//!
//! Rounding is anchored at absolute zero, never at the slider's range
//! minimum: with step `10` the reachable interior values are `..., 10, 20,
//! 30, ...` whatever the range is. A remainder of exactly half a step rounds
//! down, so `5` rounds to `0` and `35` to `30` with step `10`.

use crate::error::{SliderError, SliderResult};
use serde_json::Value;

/// Round `value` to a multiple of `step`, ties toward negative infinity.
///
/// Non-positive or non-finite steps leave `value` untouched.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if !(step > 0.0) || !step.is_finite() {
        return value;
    }
    let r = value.rem_euclid(step);
    if r <= step / 2.0 {
        value - r
    } else {
        value - r + step
    }
}

/// Round `value` according to `rounding`.
pub fn round(value: f64, rounding: &Rounding) -> f64 {
    round_to_step(value, rounding.step_for(value))
}

/// One band of a [`RoundingTable`]: values below `threshold` use `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundingTier {
    pub step: f64,
    pub threshold: f64,
}

/// Magnitude-banded rounding steps.
///
/// Lookup uses the tiers sorted ascending by threshold, so two tables built
/// from the same `(step, threshold)` pairs compare equal whatever order they
/// were configured in. The tier with the largest threshold also covers every
/// value at or above that threshold. The entries are also kept as
/// configured, see [`RoundingTable::entries`].
#[derive(Clone, Debug)]
pub struct RoundingTable {
    entries: Vec<RoundingTier>,
    tiers: Vec<RoundingTier>,
}

impl RoundingTable {
    /// Build a table from `(step, threshold)` pairs.
    ///
    /// When two entries share a threshold the first one wins.
    pub fn new(entries: impl IntoIterator<Item = (f64, f64)>) -> SliderResult<Self> {
        let mut configured = Vec::new();
        for (step, threshold) in entries {
            check_positive("step", step)?;
            check_positive("threshold", threshold)?;
            configured.push(RoundingTier { step, threshold });
        }
        if configured.is_empty() {
            return Err(SliderError::InvalidRounding {
                reason: "rounding table has no entries".to_string(),
            });
        }

        let mut tiers = configured.clone();
        // Stable sort, so equal thresholds stay in configured order.
        tiers.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        tiers.dedup_by(|later, earlier| later.threshold == earlier.threshold);
        Ok(Self {
            entries: configured,
            tiers,
        })
    }

    /// Entries in configured order, duplicates included.
    pub fn entries(&self) -> &[RoundingTier] {
        &self.entries
    }

    pub fn tiers(&self) -> &[RoundingTier] {
        &self.tiers
    }

    /// Step of the first tier whose threshold exceeds `|value|`, falling back
    /// to the tier with the largest threshold.
    pub fn step_for(&self, value: f64) -> f64 {
        let magnitude = value.abs();
        let tier = self
            .tiers
            .iter()
            .find(|t| t.threshold > magnitude)
            .or_else(|| self.tiers.last());
        match tier {
            Some(t) => {
                log::trace!(target: "slider.rounding", "value {value} uses step {}", t.step);
                t.step
            }
            // `new` rejects empty tables.
            None => 1.0,
        }
    }
}

impl PartialEq for RoundingTable {
    fn eq(&self, other: &Self) -> bool {
        self.tiers == other.tiers
    }
}

/// Rounding configured for a slider: one step everywhere, or a tier table.
#[derive(Clone, Debug, PartialEq)]
pub enum Rounding {
    Step(f64),
    Tiered(RoundingTable),
}

impl Rounding {
    pub fn step(step: f64) -> SliderResult<Self> {
        check_positive("step", step)?;
        Ok(Rounding::Step(step))
    }

    pub fn tiered(entries: impl IntoIterator<Item = (f64, f64)>) -> SliderResult<Self> {
        RoundingTable::new(entries).map(Rounding::Tiered)
    }

    /// Parse the text of a `data-rounding` attribute.
    ///
    /// Accepts a plain number (`"10"`) or a JSON object mapping step to
    /// threshold, where either side may be a number or a numeric string:
    /// `{"1": "10", "10": 50}`.
    pub fn parse(text: &str) -> SliderResult<Self> {
        let text = text.trim();
        if text.starts_with('{') {
            return Self::parse_table(text);
        }
        let step = text
            .parse::<f64>()
            .map_err(|_| SliderError::InvalidAttribute {
                field: "rounding",
                value: text.to_string(),
            })?;
        Self::step(step)
    }

    fn parse_table(text: &str) -> SliderResult<Self> {
        // `preserve_order` keeps object members in document order.
        let raw: serde_json::Map<String, Value> =
            serde_json::from_str(text).map_err(|e| SliderError::InvalidRounding {
                reason: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (step, threshold) in &raw {
            let invalid = || SliderError::InvalidRounding {
                reason: format!("entry {step:?} is not a numeric step/threshold pair"),
            };
            let step_value = step.trim().parse::<f64>().map_err(|_| invalid())?;
            let threshold_value = match threshold {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }
            .ok_or_else(invalid)?;
            entries.push((step_value, threshold_value));
        }
        Self::tiered(entries)
    }

    /// Step that applies to `value`.
    pub fn step_for(&self, value: f64) -> f64 {
        match self {
            Rounding::Step(step) => *step,
            Rounding::Tiered(table) => table.step_for(value),
        }
    }

    pub fn round(&self, value: f64) -> f64 {
        round(value, self)
    }
}

fn check_positive(what: &str, v: f64) -> SliderResult<()> {
    if v > 0.0 && v.is_finite() {
        Ok(())
    } else {
        Err(SliderError::InvalidRounding {
            reason: format!("{what} must be a positive number, got {v}"),
        })
    }
}
