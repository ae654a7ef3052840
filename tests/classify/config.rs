use magic_mime::{
    get_mime_type, Classification, MagicError, MagicFlags, MimeSniffer, SniffConfig,
    MAX_READ_BYTES, TEXT_SCAN_LIMIT,
};

#[test]
fn config_json_round_trip() {
    let cfg = SniffConfig {
        try_text: false,
        text_scan_limit: 256,
        max_read_bytes: 4096,
    };
    let json = cfg.to_json_string().unwrap();
    let back = SniffConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
    assert_eq!(back.flags(), MagicFlags::NO_TRY_TEXT);
}

#[test]
fn empty_json_gives_defaults() {
    let cfg = SniffConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SniffConfig::default());
    assert_eq!(cfg.text_scan_limit, TEXT_SCAN_LIMIT);
    assert_eq!(cfg.max_read_bytes, MAX_READ_BYTES);
}

#[test]
fn invalid_json_is_rejected() {
    assert!(matches!(
        SniffConfig::from_json_str("{\"try_text\": \"yes\"}"),
        Err(MagicError::Serialization(_))
    ));
    assert!(matches!(
        SniffConfig::from_json_str("{\"max_read_bytes\": 0}"),
        Err(MagicError::InvalidConfig(_))
    ));
}

#[test]
fn flags_and_config_agree() {
    let buf = [b'A'; 100];
    for flags in [MagicFlags::empty(), MagicFlags::NO_TRY_TEXT] {
        let via_flags = get_mime_type(&buf, flags);
        let via_config = MimeSniffer::with_config(SniffConfig::from(flags)).sniff(&buf);
        assert_eq!(via_flags, via_config);
    }
}

#[test]
fn scan_limit_bounds_the_text_check() {
    // the NUL sits beyond a 64-byte scan window
    let mut buf = vec![b'a'; 100];
    buf[80] = 0;
    let narrow = MimeSniffer::with_config(SniffConfig {
        text_scan_limit: 64,
        ..SniffConfig::default()
    });
    assert!(narrow.sniff(&buf).is_recognized());
    assert_eq!(MimeSniffer::new().sniff(&buf), Classification::NotRecognized);
}

#[test]
fn classification_serializes_for_reports() {
    let result = get_mime_type(b"GIF8", MagicFlags::empty());
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(value["status"], "recognized");
    assert_eq!(value["mime"], "image/gif");
    assert_eq!(value["consumed"], 4);
}
