#![no_main]

use libfuzzer_sys::fuzz_target;
use slider_core::{Limits, Range, Rounding, ValueModel};

fn pair(bytes: &[u8]) -> (f64, f64) {
    let mut a = [0u8; 8];
    let mut b = [0u8; 8];
    a.copy_from_slice(&bytes[0..8]);
    b.copy_from_slice(&bytes[8..16]);
    (f64::from_le_bytes(a), f64::from_le_bytes(b))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 48 {
        return;
    }
    let (range_min, range_max) = pair(&data[0..16]);
    let (step, lower) = pair(&data[16..32]);
    let Ok(range) = Range::new(range_min, range_max) else {
        return;
    };
    let Ok(rounding) = Rounding::step(step) else {
        return;
    };
    let lower = lower.is_finite().then_some(lower);
    let Ok(limits) = Limits::new(lower, None) else {
        return;
    };
    let Ok(mut model) = ValueModel::new(range, limits, rounding, range_min, range_max) else {
        return;
    };

    for chunk in data[32..].chunks_exact(16) {
        let (a, b) = pair(chunk);
        let v = model.set_position(a, b);
        assert!(v.min <= v.max, "unordered {v:?}");
        assert!(model.effective_lower() <= v.min, "{v:?} below lower bound");
        assert!(v.max <= model.effective_upper(), "{v:?} above upper bound");
    }
});
