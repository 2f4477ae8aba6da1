#![no_main]

use libfuzzer_sys::fuzz_target;
use weburi::Uri;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let uri = Uri::parse(text);
        let _ = uri.to_string();
        let _ = uri.to_display_string();
    }
});
