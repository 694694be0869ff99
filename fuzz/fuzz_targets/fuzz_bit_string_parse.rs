#![no_main]

use libfuzzer_sys::fuzz_target;
use paritybit_core::types::BitString;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(bits) = text.parse::<BitString>() {
        assert_eq!(bits.to_string(), text);
        assert_eq!(bits.count_ones(), text.bytes().filter(|&b| b == b'1').count());
    }
});
