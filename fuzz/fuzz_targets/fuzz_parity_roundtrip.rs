#![no_main]

use libfuzzer_sys::fuzz_target;
use paritybit_core::types::{Bit, BitString, ParityMode, ParityPosition};
use paritybit_core::{check_parity, ParityCodec};

fuzz_target!(|data: &[u8]| {
    let Some((&control, rest)) = data.split_first() else {
        return;
    };
    let mode = if control & 1 == 0 {
        ParityMode::Even
    } else {
        ParityMode::Odd
    };
    let position = if control & 2 == 0 {
        ParityPosition::MostSignificant
    } else {
        ParityPosition::LeastSignificant
    };
    let codec = ParityCodec::new(mode, position);
    let bits: BitString = rest.iter().map(|b| Bit::from_bool(b & 1 == 1)).collect();

    let framed = codec.encode(&bits);
    assert!(check_parity(&framed, mode));
    assert_eq!(codec.decode(&framed), Ok(bits));

    let flip = usize::from(control >> 2) % framed.len();
    let corrupted = framed.flip(flip).expect("index within frame");
    assert!(!check_parity(&corrupted, mode));
});
