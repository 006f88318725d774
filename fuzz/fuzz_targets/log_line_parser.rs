#![no_main]

use libfuzzer_sys::fuzz_target;
use pabotscope::extractor::EventExtractor;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string
    if let Ok(input) = std::str::from_utf8(data) {
        // Unmatched lines are skipped and malformed fields are errors;
        // neither may panic
        let _ = EventExtractor::new().extract(input.lines());
    }
});
