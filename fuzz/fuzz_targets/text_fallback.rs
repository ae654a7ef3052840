#![no_main]
use libfuzzer_sys::fuzz_target;
use magic_mime::text::classify_text;

fuzz_target!(|data: &[u8]| {
    if let Some((&limit, rest)) = data.split_first() {
        let _ = classify_text(rest, limit as usize + 1);
    }
});
