//! Plain-text fallback for buffers the rule set could not decide.
//!
//! Only the first `scan_limit` bytes are examined. A buffer qualifies as
//! text when it has no NUL and at most 1% control bytes (anything below
//! 0x20 other than CR, LF and TAB).

use tracing::trace;

pub const US_ASCII: &str = "text/plain; charset=US-ASCII";
pub const UTF_8: &str = "text/plain; charset=UTF-8";
pub const UTF_16: &str = "text/plain; charset=UTF-16";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];

/// NUL and control-byte counts over a scan.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    nuls: usize,
    controls: usize,
}

impl Tally {
    fn add(&mut self, cp: u32) {
        if cp == 0 {
            self.nuls += 1;
        }
        if cp < 0x20 && !matches!(cp, 0x09 | 0x0a | 0x0d) {
            self.controls += 1;
        }
    }

    fn acceptable(&self, scanned: usize) -> bool {
        self.nuls == 0 && self.controls <= scanned / 100
    }
}

/// Decode one code point from the front of `bytes`.
///
/// Checks lead and continuation bit patterns only; overlong and surrogate
/// forms pass, 5 and 6 byte forms do not.
pub fn decode_utf8(bytes: &[u8]) -> Option<(u32, usize)> {
    let lead = *bytes.first()?;
    let cont = |i: usize| {
        bytes
            .get(i)
            .filter(|&&b| b & 0xC0 == 0x80)
            .map(|&b| u32::from(b & 0x3F))
    };

    if lead & 0x80 == 0 {
        Some((u32::from(lead), 1))
    } else if lead & 0xE0 == 0xC0 {
        Some(((u32::from(lead & 0x1F) << 6) | cont(1)?, 2))
    } else if lead & 0xF0 == 0xE0 {
        Some(((u32::from(lead & 0x0F) << 12) | (cont(1)? << 6) | cont(2)?, 3))
    } else if lead & 0xF8 == 0xF0 {
        let cp = (u32::from(lead & 0x07) << 18) | (cont(1)? << 12) | (cont(2)? << 6) | cont(3)?;
        Some((cp, 4))
    } else {
        None
    }
}

/// Classify `buf` as plain text, or `None` if it does not look like text.
pub fn classify_text(buf: &[u8], scan_limit: usize) -> Option<&'static str> {
    let scanned = &buf[..buf.len().min(scan_limit)];

    let mut tally = Tally::default();
    let mut ascii = true;
    for &b in scanned {
        tally.add(u32::from(b));
        ascii &= b < 0x80;
    }
    if ascii && tally.acceptable(scanned.len()) {
        return Some(US_ASCII);
    }

    if buf.starts_with(UTF8_BOM) {
        return Some(UTF_8);
    }
    if buf.starts_with(UTF16_BE_BOM) || buf.starts_with(UTF16_LE_BOM) {
        return Some(UTF_16);
    }

    // stop short of the end so a sequence never runs off the scanned window
    let end = scanned.len().saturating_sub(4);
    let mut tally = Tally::default();
    let mut pos = 0;
    while pos < end {
        let Some((cp, len)) = decode_utf8(&scanned[pos..]) else {
            trace!(pos, "invalid utf-8 sequence");
            return None;
        };
        tally.add(cp);
        pos += len;
    }

    tally.acceptable(scanned.len()).then_some(UTF_8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEXT_SCAN_LIMIT;

    #[test]
    fn test_ascii() {
        assert_eq!(classify_text(&[b'A'; 100], TEXT_SCAN_LIMIT), Some(US_ASCII));
        assert_eq!(
            classify_text(b"line one\r\n\tline two\n", TEXT_SCAN_LIMIT),
            Some(US_ASCII)
        );
    }

    #[test]
    fn test_control_threshold() {
        let mut buf = vec![b'a'; 200];
        buf[10] = 0x1b;
        buf[20] = 0x1b;
        assert_eq!(classify_text(&buf, TEXT_SCAN_LIMIT), Some(US_ASCII));
        buf[30] = 0x1b;
        assert_eq!(classify_text(&buf, TEXT_SCAN_LIMIT), None);
    }

    #[test]
    fn test_nul_is_never_text() {
        let mut buf = vec![b'a'; 500];
        buf[250] = 0;
        assert_eq!(classify_text(&buf, TEXT_SCAN_LIMIT), None);
    }

    #[test]
    fn test_byte_order_marks() {
        assert_eq!(classify_text(&[0xEF, 0xBB, 0xBF], TEXT_SCAN_LIMIT), Some(UTF_8));
        let mut buf = vec![0xEF, 0xBB, 0xBF];
        buf.extend_from_slice(&[0u8; 64]);
        assert_eq!(classify_text(&buf, TEXT_SCAN_LIMIT), Some(UTF_8));

        assert_eq!(classify_text(&[0xFF, 0xFE, b'h', 0], TEXT_SCAN_LIMIT), Some(UTF_16));
        assert_eq!(classify_text(&[0xFE, 0xFF, 0, b'h'], TEXT_SCAN_LIMIT), Some(UTF_16));
    }

    #[test]
    fn test_utf8_body() {
        let text = "naïve café, déjà vu: ünïcödé text without a byte order mark";
        assert_eq!(classify_text(text.as_bytes(), TEXT_SCAN_LIMIT), Some(UTF_8));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut buf = vec![b'a'; 20];
        buf.push(0xFF);
        buf.extend_from_slice(&[b'a'; 20]);
        assert_eq!(classify_text(&buf, TEXT_SCAN_LIMIT), None);

        // lead byte without its continuation
        let mut buf = vec![b'a'; 20];
        buf.extend_from_slice(&[0xC3, b'a']);
        buf.extend_from_slice(&[b'a'; 20]);
        assert_eq!(classify_text(&buf, TEXT_SCAN_LIMIT), None);
    }

    #[test]
    fn test_scan_limit() {
        let mut buf = vec![b'x'; 64];
        buf.extend_from_slice(&[0u8; 64]);
        assert_eq!(classify_text(&buf, 64), Some(US_ASCII));
        assert_eq!(classify_text(&buf, 128), None);
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8(b"A"), Some((0x41, 1)));
        assert_eq!(decode_utf8("é".as_bytes()), Some((0xE9, 2)));
        assert_eq!(decode_utf8("€".as_bytes()), Some((0x20AC, 3)));
        assert_eq!(decode_utf8("😀".as_bytes()), Some((0x1F600, 4)));
        assert_eq!(decode_utf8(&[0x80]), None);
        assert_eq!(decode_utf8(&[0xF8, 0x80, 0x80, 0x80, 0x80]), None);
        assert_eq!(decode_utf8(&[]), None);
    }
}
