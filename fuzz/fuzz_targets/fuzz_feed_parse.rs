#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic on any byte sequence, including truncated lines.
    let text = bankdaten::registry::decode_latin1(data);
    let _ = bankdaten::registry::parse_feed(&text);
});
