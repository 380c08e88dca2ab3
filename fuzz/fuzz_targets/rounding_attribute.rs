#![no_main]

use libfuzzer_sys::fuzz_target;
use slider_core::Rounding;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(rounding) = Rounding::parse(text) {
        for v in [0.0, 1.0, -7.5, 999.0, 1e9] {
            let rounded = rounding.round(v);
            assert!(rounded.is_finite(), "{text:?} rounded {v} to {rounded}");
        }
    }
});
