#![no_main]

use libfuzzer_sys::fuzz_target;
use scrim_core::{data_uri, detect_format};

fuzz_target!(|payload: &str| {
    let format = detect_format(payload);
    match data_uri(payload) {
        Some(uri) => {
            assert!(format.is_renderable());
            assert!(uri.ends_with(payload));
        }
        None => assert!(!format.is_renderable()),
    }
});
