#![no_main]
use libfuzzer_sys::fuzz_target;
use magic_mime::{get_mime_type, MagicFlags};

fuzz_target!(|data: &[u8]| {
    let with_text = get_mime_type(data, MagicFlags::empty());
    let without_text = get_mime_type(data, MagicFlags::NO_TRY_TEXT);
    // the text fallback only ever replaces a need-more-data verdict
    if without_text.is_recognized() {
        assert_eq!(with_text, without_text);
    }
    if data.is_empty() {
        assert_eq!(with_text.status(), -1);
    }
});
