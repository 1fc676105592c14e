#![no_main]

use kestrel_syntax::parser::{parse, ParseMode};
use libfuzzer_sys::fuzz_target;

const MAX_SOURCE_BYTES: usize = 4096;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mode = if data[0] & 1 == 0 {
        ParseMode::File
    } else {
        ParseMode::Script
    };

    let capped = &data[1..data.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped).into_owned();

    let parsed = parse(&source, mode);

    // The tree must reproduce the input exactly, no matter how broken it is.
    assert_eq!(parsed.syntax().text().to_string(), source);
});
