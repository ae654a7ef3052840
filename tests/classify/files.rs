use magic_mime::{Classification, MagicError, MimeSniffer, SniffConfig};

use crate::common::{create_temp_file, png_header, zip_local_file};

#[test]
fn sniff_png_file() {
    let file = create_temp_file(&png_header());
    let result = MimeSniffer::new().sniff_path(file.path()).unwrap();
    assert_eq!(result.mime(), Some("image/png"));
}

#[test]
fn sniff_zip_file() {
    let file = create_temp_file(&zip_local_file(0x14, b"readme.md", b"# readme\n"));
    let result = MimeSniffer::new().sniff_path(file.path()).unwrap();
    assert_eq!(result.mime(), Some("application/zip"));
}

#[test]
fn sniff_empty_file() {
    let file = create_temp_file(&[]);
    let result = MimeSniffer::new().sniff_path(file.path()).unwrap();
    assert_eq!(result, Classification::NeedMoreData);
}

#[test]
fn read_limit_truncates_large_files() {
    // only the first 8 bytes are read, which is not enough for the IHDR check
    let file = create_temp_file(&png_header());
    let sniffer = MimeSniffer::with_config(SniffConfig {
        try_text: false,
        max_read_bytes: 8,
        ..SniffConfig::default()
    });
    assert_eq!(
        sniffer.sniff_path(file.path()).unwrap(),
        Classification::NeedMoreData
    );
}

#[test]
fn tar_header_beyond_first_block() {
    let mut buf = vec![0u8; 512];
    buf[..9].copy_from_slice(b"hello.txt");
    buf[257..263].copy_from_slice(b"ustar\x00");
    buf[263..265].copy_from_slice(b"00");
    // name and mode fields keep the early binary rules from matching
    buf[100..108].copy_from_slice(b"0000644\x00");
    let file = create_temp_file(&buf);
    let result = MimeSniffer::new().sniff_path(file.path()).unwrap();
    assert_eq!(result.mime(), Some("application/x-tar"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MimeSniffer::new()
        .sniff_path(dir.path().join("nope.bin"))
        .unwrap_err();
    assert!(matches!(err, MagicError::Io(_)));
}
