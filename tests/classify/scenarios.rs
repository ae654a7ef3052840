use magic_mime::{get_mime_type, Classification, MagicFlags, MimeSniffer};

use crate::common::{jpeg_header, package_with_mimetype, png_header, zip_local_file};

fn mime(buf: &[u8]) -> Option<&'static str> {
    get_mime_type(buf, MagicFlags::empty()).mime()
}

#[test]
fn gif_signature() {
    let result = get_mime_type(b"GIF8", MagicFlags::empty());
    assert_eq!(
        result,
        Classification::Recognized {
            mime: "image/gif",
            consumed: 4
        }
    );
    assert_eq!(result.status(), 4);
}

#[test]
fn postscript_two_bytes() {
    assert_eq!(mime(b"%!"), Some("application/postscript"));
    assert_eq!(mime(b"%!PS-Adobe-3.0\n"), Some("application/postscript"));
}

#[test]
fn plain_zip_archive() {
    let buf = zip_local_file(0x14, b"hello.txt", b"hello, world\n");
    assert_eq!(mime(&buf), Some("application/zip"));
}

#[test]
fn opendocument_and_epub_packages() {
    assert_eq!(
        mime(&package_with_mimetype("application/vnd.oasis.opendocument.text")),
        Some("application/vnd.oasis.opendocument.text")
    );
    assert_eq!(
        mime(&package_with_mimetype(
            "application/vnd.oasis.opendocument.spreadsheet"
        )),
        Some("application/vnd.oasis.opendocument.spreadsheet")
    );
    assert_eq!(
        mime(&package_with_mimetype("application/epub+zip")),
        Some("application/epub+zip")
    );
}

#[test]
fn common_images() {
    assert_eq!(mime(&png_header()), Some("image/png"));
    assert_eq!(mime(&jpeg_header()), Some("image/jpeg"));
    assert_eq!(mime(b"GIF89a\x01\x00\x01\x00"), Some("image/gif"));
}

#[test]
fn pdf_document() {
    assert_eq!(mime(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n"), Some("application/pdf"));
}

#[test]
fn truncated_jpeg_needs_more_data() {
    assert_eq!(
        get_mime_type(&[0xFF, 0xD8], MagicFlags::NO_TRY_TEXT),
        Classification::NeedMoreData
    );
    assert_eq!(
        get_mime_type(&[0xFF, 0xD8], MagicFlags::NO_TRY_TEXT).status(),
        -1
    );
    // too short for the UTF-8 pass to reject, so the fallback calls it text
    assert_eq!(
        get_mime_type(&[0xFF, 0xD8], MagicFlags::empty()),
        Classification::Recognized {
            mime: magic_mime::text::UTF_8,
            consumed: 0
        }
    );
}

#[test]
fn empty_input_needs_more_data() {
    assert_eq!(
        get_mime_type(&[], MagicFlags::empty()),
        Classification::NeedMoreData
    );
}

#[test]
fn first_match_wins_in_numeric_group() {
    // 0xFFFD masks to the MPEG entry before the ADTS entry is tried
    assert_eq!(mime(&[0xFF, 0xFD, 0x90, 0x00]), Some("audio/mpeg"));
    // 0xFFF1 only satisfies the ADTS mask
    assert_eq!(mime(&[0xFF, 0xF1, 0x50, 0x80]), Some("audio/x-hx-aac-adts"));
}

#[test]
fn java_class_before_mach_o() {
    assert_eq!(
        mime(&[0xca, 0xfe, 0xba, 0xbe, 0x00, 0x00, 0x00, 0x37]),
        Some("application/x-java-applet")
    );
    assert_eq!(
        mime(&[0xca, 0xfe, 0xba, 0xbe, 0x00, 0x00, 0x00, 0x02]),
        Some("application/x-mach-binary")
    );
}

#[test]
fn classification_is_deterministic() {
    let samples: Vec<Vec<u8>> = vec![
        b"GIF8".to_vec(),
        png_header(),
        zip_local_file(0x14, b"a.txt", b"abc"),
        b"just some words\n".to_vec(),
        vec![0xEF, 0xBB, 0xBF],
        vec![0xFF, 0xD8],
        vec![0u8; 40],
    ];
    for sample in &samples {
        let first = get_mime_type(sample, MagicFlags::empty());
        for _ in 0..3 {
            assert_eq!(get_mime_type(sample, MagicFlags::empty()), first);
        }
    }
}

#[test]
fn parallel_matches_sequential() {
    let samples: Vec<Vec<u8>> = (0..64u8)
        .map(|i| match i % 4 {
            0 => png_header(),
            1 => jpeg_header(),
            2 => format!("line {} of plain text\n", i).into_bytes(),
            _ => zip_local_file(0x14, b"x.bin", &[i; 8]),
        })
        .collect();

    let sniffer = MimeSniffer::new();
    let parallel = sniffer.sniff_many(&samples);
    let sequential: Vec<Classification> = samples.iter().map(|s| sniffer.sniff(s)).collect();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel[0].mime(), Some("image/png"));
    assert_eq!(parallel[3].mime(), Some("application/zip"));
}
