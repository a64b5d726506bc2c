#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing, with and without unknown-key collection, never panics
        let _ = toml::from_str::<themekit::Config>(content);
        let _ = themekit::Config::parse_with_warnings(content, Path::new("fuzz.toml"));
    }
});
