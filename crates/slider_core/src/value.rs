//! Range, limits and the live `(min, max)` selection.
//!
//! The track spans [`Range`]. [`Limits`] say which value a grip reports
//! when it sits at a track end, so they may widen the reachable values past
//! the range or narrow them inside it. An endpoint at or beyond a track end
//! takes the effective bound exactly and is never rounded; only endpoints
//! strictly inside the track are rounded, and they are then clamped so they
//! can neither leave the track nor the limits.

use crate::error::{SliderError, SliderResult};
use crate::rounding::Rounding;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> SliderResult<Self> {
        if min < max {
            Ok(Self { min, max })
        } else {
            Err(SliderError::InvalidRange { min, max })
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Limits {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Limits {
    /// Fails with [`SliderError::InvalidLimits`] when both are set and cross.
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> SliderResult<Self> {
        if let (Some(lower), Some(upper)) = (lower, upper)
            && lower >= upper
        {
            return Err(SliderError::InvalidLimits { lower, upper });
        }
        Ok(Self { lower, upper })
    }
}

/// The live selection. Always `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentValue {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug)]
pub struct ValueModel {
    range: Range,
    limits: Limits,
    rounding: Rounding,
    current: CurrentValue,
}

impl ValueModel {
    /// Build a model and place the grips at `(cur_min, cur_max)`.
    pub fn new(
        range: Range,
        limits: Limits,
        rounding: Rounding,
        cur_min: f64,
        cur_max: f64,
    ) -> SliderResult<Self> {
        let (lower, upper) = effective_bounds(range, limits);
        if lower >= upper {
            return Err(SliderError::InvalidLimits { lower, upper });
        }

        let mut model = Self {
            range,
            limits,
            rounding,
            current: CurrentValue {
                min: lower,
                max: upper,
            },
        };
        model.set_position(cur_min, cur_max);
        Ok(model)
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn rounding(&self) -> &Rounding {
        &self.rounding
    }

    pub fn current(&self) -> CurrentValue {
        self.current
    }

    pub fn range_min(&self) -> f64 {
        self.range.min
    }

    pub fn range_max(&self) -> f64 {
        self.range.max
    }

    pub fn current_min(&self) -> f64 {
        self.current.min
    }

    pub fn current_max(&self) -> f64 {
        self.current.max
    }

    pub fn effective_lower(&self) -> f64 {
        self.limits.lower.unwrap_or(self.range.min)
    }

    pub fn effective_upper(&self) -> f64 {
        self.limits.upper.unwrap_or(self.range.max)
    }

    pub fn round(&self, value: f64) -> f64 {
        self.rounding.round(value)
    }

    /// Place the grips at `a` and `b`, in either order.
    ///
    /// The pair is sorted first, so grips may cross; each endpoint is then
    /// rounded and constrained independently. NaN is treated as the lower
    /// track end.
    pub fn set_position(&mut self, a: f64, b: f64) -> CurrentValue {
        let lower = self.effective_lower();
        let (a, b) = (
            if a.is_nan() { lower } else { a },
            if b.is_nan() { lower } else { b },
        );
        let (lo, hi) = if b < a { (b, a) } else { (a, b) };
        let min = self.constrain(lo, true);
        let max = self.constrain(hi, true);
        debug_assert!(min <= max, "constrain must be monotone: {min} > {max}");
        self.current = CurrentValue { min, max };
        self.current
    }

    /// Replace the range and re-constrain the current value without rounding.
    ///
    /// Fails if `min >= max` or if the new range would make the effective
    /// bounds cross; the model is unchanged on failure.
    pub fn set_range(&mut self, min: f64, max: f64) -> SliderResult<CurrentValue> {
        let range = Range::new(min, max)?;
        let (lower, upper) = effective_bounds(range, self.limits);
        if lower >= upper {
            return Err(SliderError::InvalidRange { min, max });
        }

        self.range = range;
        let CurrentValue { min: lo, max: hi } = self.current;
        self.current = CurrentValue {
            min: self.constrain(lo, false),
            max: self.constrain(hi, false),
        };
        Ok(self.current)
    }

    pub fn is_at_lower_extreme(&self) -> bool {
        self.current.min == self.effective_lower()
    }

    pub fn is_at_upper_extreme(&self) -> bool {
        self.current.max == self.effective_upper()
    }

    /// Value under the track position `fraction` (0 = left end, 1 = right end).
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        self.range.min + fraction * self.range.span()
    }

    fn constrain(&self, v: f64, round: bool) -> f64 {
        let lower = self.effective_lower();
        let upper = self.effective_upper();

        // Track ends take precedence over limits.
        if v <= self.range.min {
            return lower;
        }
        if v >= self.range.max {
            return upper;
        }
        if v <= lower {
            return lower;
        }
        if v >= upper {
            return upper;
        }

        // Here lower < v < upper and range.min < v < range.max, so the
        // window below is never empty.
        let lo = self.range.min.max(lower);
        let hi = self.range.max.min(upper);
        let v = if round { self.rounding.round(v) } else { v };
        v.max(lo).min(hi)
    }
}

fn effective_bounds(range: Range, limits: Limits) -> (f64, f64) {
    (
        limits.lower.unwrap_or(range.min),
        limits.upper.unwrap_or(range.max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(
        rounding: f64,
        range: (f64, f64),
        limits: (Option<f64>, Option<f64>),
        cur: (f64, f64),
    ) -> ValueModel {
        ValueModel::new(
            Range::new(range.0, range.1).expect("range"),
            Limits::new(limits.0, limits.1).expect("limits"),
            Rounding::step(rounding).expect("rounding"),
            cur.0,
            cur.1,
        )
        .expect("model")
    }

    fn pair(m: &ValueModel) -> (f64, f64) {
        (m.current_min(), m.current_max())
    }

    #[test]
    fn initial_value_is_constrained_to_range() {
        let m = model(100.0, (100.0, 1000.0), (None, None), (10.0, 500.0));
        assert_eq!(pair(&m), (100.0, 500.0));

        let m = model(100.0, (500.0, 800.0), (None, None), (500.0, 1000.0));
        assert_eq!(pair(&m), (500.0, 800.0));
    }

    #[test]
    fn rounds_interior_endpoints() {
        let mut m = model(100.0, (0.0, 1000.0), (None, None), (10.0, 500.0));
        assert_eq!(pair(&m), (0.0, 500.0));

        m.set_position(150.0, 400.1);
        assert_eq!(pair(&m), (100.0, 400.0));

        m.set_position(151.0, 560.0);
        assert_eq!(pair(&m), (200.0, 600.0));

        m.set_position(2.0, 7.0);
        assert_eq!(pair(&m), (0.0, 0.0));
    }

    #[test]
    fn boundaries_are_never_rounded() {
        let mut m = model(10.0, (3.0, 37.0), (None, None), (3.0, 3.0));
        assert_eq!(pair(&m), (3.0, 3.0));

        m.set_position(3.0, 37.0);
        assert_eq!(pair(&m), (3.0, 37.0));

        m.set_position(10.0, 30.0);
        assert_eq!(pair(&m), (10.0, 30.0));

        m.set_position(15.0, 23.0);
        assert_eq!(pair(&m), (10.0, 20.0));

        // 36 rounds to 40, which is past the track end.
        m.set_position(36.0, 36.0);
        assert_eq!(pair(&m), (37.0, 37.0));
    }

    #[test]
    fn non_exact_rounding_still_reaches_both_extremes() {
        let m = model(7.0, (2.0, 10.0), (None, None), (2.0, 10.0));
        assert!(m.is_at_lower_extreme());
        assert!(m.is_at_upper_extreme());

        let m = model(7.0, (2.0, 10.0), (Some(1.0), Some(100.0)), (2.0, 10.0));
        assert_eq!(pair(&m), (1.0, 100.0));
        assert!(m.is_at_lower_extreme());
        assert!(m.is_at_upper_extreme());
    }

    #[test]
    fn extremes_report_limits_instead_of_range() {
        let m = model(5.0, (5.0, 95.0), (Some(1.0), Some(100.0)), (5.0, 60.0));
        assert_eq!(m.current_min(), 1.0);
        assert!(m.is_at_lower_extreme());
        assert!(!m.is_at_upper_extreme());

        let m = model(5.0, (5.0, 95.0), (Some(1.0), Some(1000.0)), (5.0, 95.0));
        assert_eq!(m.current_max(), 1000.0);
        assert!(m.is_at_upper_extreme());

        let m = model(10.0, (5.0, 95.0), (Some(1.0), Some(100.0)), (30.0, 60.0));
        assert_eq!(pair(&m), (30.0, 60.0));
        assert!(!m.is_at_lower_extreme());
        assert!(!m.is_at_upper_extreme());
    }

    #[test]
    fn limits_beyond_the_track_keep_both_ends_reachable() {
        let mut m = model(1.0, (0.0, 10.0), (Some(20.0), Some(30.0)), (0.0, 10.0));
        assert_eq!(pair(&m), (20.0, 30.0));
        assert!(m.is_at_lower_extreme() && m.is_at_upper_extreme());

        m.set_position(5.0, 5.0);
        assert_eq!(pair(&m), (20.0, 20.0));
        assert!(!m.is_at_upper_extreme());

        m.set_position(0.0, 10.0);
        assert_eq!(pair(&m), (20.0, 30.0));

        let m = model(1.0, (0.0, 1.0), (Some(1.0), Some(2.0)), (0.0, 1.0));
        assert_eq!(pair(&m), (1.0, 2.0));
        assert!(m.is_at_upper_extreme());

        // Limits below the track.
        let m = model(1.0, (10.0, 20.0), (Some(-5.0), Some(0.0)), (10.0, 20.0));
        assert_eq!(pair(&m), (-5.0, 0.0));
    }

    #[test]
    fn set_range_reclamps_against_limits() {
        let mut m = model(10.0, (5.0, 95.0), (Some(1.0), Some(100.0)), (30.0, 60.0));

        m.set_range(0.0, 1000.0).expect("valid range");
        assert_eq!(pair(&m), (30.0, 60.0));
        assert!(!m.is_at_lower_extreme() && !m.is_at_upper_extreme());

        m.set_range(40.0, 95.0).expect("valid range");
        assert_eq!(pair(&m), (1.0, 60.0));
        assert!(m.is_at_lower_extreme() && !m.is_at_upper_extreme());

        m.set_range(5.0, 50.0).expect("valid range");
        assert_eq!(pair(&m), (1.0, 100.0));
        assert!(m.is_at_lower_extreme() && m.is_at_upper_extreme());
    }

    #[test]
    fn grips_may_cross() {
        let mut m = model(
            100.0,
            (100.0, 1000.0),
            (Some(80.0), Some(1100.0)),
            (10.0, 500.0),
        );
        m.set_position(50.0, 2000.0);
        assert_eq!(pair(&m), (80.0, 1100.0));

        m.set_position(2000.0, 50.0);
        assert_eq!(pair(&m), (80.0, 1100.0));

        m.set_position(500.0, 200.0);
        assert_eq!(pair(&m), (200.0, 500.0));
    }

    #[test]
    fn narrowing_limits_clamp_interior_values() {
        let mut m = model(1.0, (0.0, 100.0), (Some(20.0), Some(30.0)), (0.0, 100.0));
        assert_eq!(pair(&m), (20.0, 30.0));

        m.set_position(10.0, 25.0);
        assert_eq!(pair(&m), (20.0, 25.0));

        m.set_position(29.6, 31.0);
        assert_eq!(pair(&m), (30.0, 30.0));
        assert!(m.is_at_upper_extreme());
    }

    #[test]
    fn set_range_reclamps_without_rounding() {
        let mut m = model(100.0, (500.0, 800.0), (None, None), (500.0, 800.0));

        m.set_range(0.0, 1000.0).expect("valid range");
        assert_eq!((m.range_min(), m.range_max()), (0.0, 1000.0));
        assert_eq!(pair(&m), (500.0, 800.0));

        m.set_range(500.0, 800.0).expect("valid range");
        assert_eq!(pair(&m), (500.0, 800.0));

        m.set_range(700.0, 800.0).expect("valid range");
        assert_eq!(pair(&m), (700.0, 800.0));

        let mut m = model(20.0, (750.0, 1395.0), (None, None), (750.0, 1395.0));
        m.set_range(795.0, 1250.0).expect("valid range");
        assert_eq!(pair(&m), (795.0, 1250.0));

        let mut m = model(100.0, (0.0, 1000.0), (None, None), (0.0, 1000.0));
        m.set_range(0.0, 2000.0).expect("valid range");
        m.set_position(0.0, 1234.0);
        m.set_range(0.0, 1500.0).expect("valid range");
        // 1200 was rounded by set_position; set_range keeps it as is.
        assert_eq!(pair(&m), (0.0, 1200.0));
    }

    #[test]
    fn set_range_rejects_invalid_ranges() {
        let mut m = model(10.0, (0.0, 100.0), (Some(50.0), None), (60.0, 70.0));

        assert_eq!(
            m.set_range(10.0, 10.0),
            Err(SliderError::InvalidRange {
                min: 10.0,
                max: 10.0
            })
        );
        // Lower limit 50 would sit above the new upper end 40.
        assert!(matches!(
            m.set_range(0.0, 40.0),
            Err(SliderError::InvalidRange { .. })
        ));
        assert_eq!((m.range_min(), m.range_max()), (0.0, 100.0));
        assert_eq!(pair(&m), (60.0, 70.0));
    }

    #[test]
    fn rejects_crossing_configuration() {
        assert_eq!(
            Limits::new(Some(20.0), Some(10.0)),
            Err(SliderError::InvalidLimits {
                lower: 20.0,
                upper: 10.0
            })
        );
        assert!(Range::new(5.0, 5.0).is_err());

        let one_sided = ValueModel::new(
            Range::new(0.0, 10.0).expect("range"),
            Limits::new(Some(10.0), None).expect("limits"),
            Rounding::Step(1.0),
            0.0,
            10.0,
        );
        assert!(matches!(one_sided, Err(SliderError::InvalidLimits { .. })));
    }

    #[test]
    fn set_position_is_idempotent() {
        let mut m = model(10.0, (3.0, 1000.0), (None, None), (3.0, 1000.0));
        let first = m.set_position(123.4, 56.7);
        let second = m.set_position(123.4, 56.7);
        assert_eq!(first, second);
        assert_eq!(first, CurrentValue { min: 60.0, max: 120.0 });
    }

    #[test]
    fn maps_track_fraction_to_value() {
        let m = model(1.0, (100.0, 300.0), (None, None), (100.0, 300.0));
        assert_eq!(m.value_at_fraction(0.0), 100.0);
        assert_eq!(m.value_at_fraction(0.5), 200.0);
        assert_eq!(m.value_at_fraction(1.0), 300.0);
        assert_eq!(m.value_at_fraction(-0.5), 0.0);
    }
}
