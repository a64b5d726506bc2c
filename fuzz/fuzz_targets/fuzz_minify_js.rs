#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let out = themekit::domain::services::minify_js(source);
        assert!(out.chars().count() <= source.chars().count());
    }
});
