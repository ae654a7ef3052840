//! Shared builders for sample buffers and temporary files.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// A ZIP local file header for `name`, followed by `body`.
///
/// Bytes 4..26 carry a plausible version, method, timestamp, CRC and sizes.
pub fn zip_local_file(version: u8, name: &[u8], body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"PK\x03\x04");
    buf.extend_from_slice(&[version, 0x00]);
    buf.extend_from_slice(&[0x00, 0x00]);
    buf.extend_from_slice(&[0x00, 0x00]);
    buf.extend_from_slice(&[0x4b, 0x9c, 0x53, 0x59]);
    buf.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]);
    let size = (body.len() as u32).to_le_bytes();
    buf.extend_from_slice(&size);
    buf.extend_from_slice(&size);
    buf.extend_from_slice(&(name.len() as u16).to_le_bytes());
    buf.extend_from_slice(&[0x00, 0x00]);
    buf.extend_from_slice(name);
    buf.extend_from_slice(body);
    buf
}

/// The first entry of an OpenDocument or EPUB package: an uncompressed
/// `mimetype` member holding `mime`.
pub fn package_with_mimetype(mime: &str) -> Vec<u8> {
    let mut buf = zip_local_file(0x0a, b"mimetype", mime.as_bytes());
    buf.extend_from_slice(b"PK\x03\x04");
    buf
}

/// A PNG signature and IHDR chunk for a 1x1 image.
pub fn png_header() -> Vec<u8> {
    let mut buf = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR".to_vec();
    buf.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]);
    buf
}

/// JFIF application marker following the start-of-image marker.
pub fn jpeg_header() -> Vec<u8> {
    let mut buf = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    buf.extend_from_slice(b"JFIF\x00\x01\x01\x00\x00\x01\x00\x01\x00\x00");
    buf
}
