use magic_mime::text::{US_ASCII, UTF_16, UTF_8};
use magic_mime::{get_mime_type, Classification, MagicFlags, MimeSniffer, SniffConfig};

#[test]
fn ascii_text() {
    let result = get_mime_type(&[b'A'; 100], MagicFlags::empty());
    assert_eq!(result.mime(), Some(US_ASCII));
    assert!(result.status() > 0);
}

#[test]
fn utf8_byte_order_mark_alone() {
    assert_eq!(
        get_mime_type(&[0xEF, 0xBB, 0xBF], MagicFlags::empty()).mime(),
        Some(UTF_8)
    );
}

#[test]
fn utf8_without_byte_order_mark() {
    let text = "Grüße aus Köln und schöne Tage am Rhein\n";
    assert_eq!(
        get_mime_type(text.as_bytes(), MagicFlags::empty()).mime(),
        Some(UTF_8)
    );
}

#[test]
fn utf16_byte_order_mark() {
    let mut buf = vec![0xFF, 0xFE];
    for unit in "hello".encode_utf16() {
        buf.extend_from_slice(&unit.to_le_bytes());
    }
    assert_eq!(get_mime_type(&buf, MagicFlags::empty()).mime(), Some(UTF_16));
}

#[test]
fn text_fallback_can_be_disabled() {
    assert_eq!(
        get_mime_type(&[b'A'; 100], MagicFlags::NO_TRY_TEXT),
        Classification::NeedMoreData
    );

    let sniffer = MimeSniffer::with_config(SniffConfig {
        try_text: false,
        ..SniffConfig::default()
    });
    assert_eq!(sniffer.sniff(&[b'A'; 100]), Classification::NeedMoreData);
}

#[test]
fn binary_noise_is_not_text() {
    let mut buf = vec![b'A'; 60];
    buf.extend_from_slice(&[0xC0, 0x41, 0xFF, 0x80]);
    buf.extend_from_slice(&[b'A'; 60]);
    let result = get_mime_type(&buf, MagicFlags::empty());
    assert_eq!(result, Classification::NotRecognized);
    assert_eq!(result.status(), 0);
}

#[test]
fn nul_bytes_are_not_text() {
    let mut buf = b"looks like text until ".to_vec();
    buf.extend_from_slice(&[0x00; 4]);
    buf.extend_from_slice(b" and then more text follows here");
    assert_eq!(
        get_mime_type(&buf, MagicFlags::empty()),
        Classification::NotRecognized
    );
}
