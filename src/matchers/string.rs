//! Byte-string tests: exact comparison, whitespace and case tolerant
//! comparison, and bounded forward search.

use std::cmp::Ordering;

use bitflags::bitflags;
use memchr::memmem;

use super::{Compare, Outcome};

bitflags! {
    /// Options for [`flexible_match`] and [`bounded_search`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StringFlags: u8 {
        /// A run of spaces in the buffer matches one pattern space.
        const COMPACT_WS = 1 << 0;
        /// A pattern space may match no buffer bytes at all.
        const IGNORE_WS = 1 << 1;
        /// Lower-case pattern letters also match upper-case buffer bytes.
        const MATCH_LOWER = 1 << 2;
        /// Upper-case pattern letters also match lower-case buffer bytes.
        const MATCH_UPPER = 1 << 3;
    }
}

fn fixed<'a>(buf: &'a [u8], cursor: usize, literal: &[u8]) -> Option<&'a [u8]> {
    let end = cursor.checked_add(literal.len())?;
    buf.get(cursor..end)
}

/// Exact comparison of `literal` at `cursor`. The literal may contain NULs.
pub fn string_equal(buf: &[u8], cursor: usize, literal: &[u8]) -> Outcome {
    let Some(window) = fixed(buf, cursor, literal) else {
        return Outcome::InsufficientData;
    };
    // first byte rejects almost every candidate
    let ok = match (window.first(), literal.first()) {
        (Some(b), Some(c)) => b == c && window[1..] == literal[1..],
        _ => true,
    };
    Outcome::from_bool(ok, cursor, literal.len())
}

/// Holds when the buffer bytes sort before `literal`.
pub fn string_less(buf: &[u8], cursor: usize, literal: &[u8]) -> Outcome {
    match fixed(buf, cursor, literal) {
        Some(window) => Outcome::from_bool(window < literal, cursor, literal.len()),
        None => Outcome::InsufficientData,
    }
}

/// Holds when the buffer bytes sort after `literal`.
pub fn string_greater(buf: &[u8], cursor: usize, literal: &[u8]) -> Outcome {
    match fixed(buf, cursor, literal) {
        Some(window) => Outcome::from_bool(window > literal, cursor, literal.len()),
        None => Outcome::InsufficientData,
    }
}

/// Compare `pattern` at `cursor` with whitespace and case options.
///
/// Compaction works on the buffer side: on a space, the buffer cursor jumps
/// to the last space of the run before comparing. Elision works on the
/// pattern side: when the pattern has a space and the buffer byte is not a
/// space, the pattern skips its run of spaces. If that run ends the pattern,
/// the last space is compared against the buffer byte, and a failed
/// comparison there reports insufficient data. Ordering operators use the
/// first differing byte. `Equal` is used for the bit operators, which have
/// no string meaning.
pub fn flexible_match(
    buf: &[u8],
    cursor: usize,
    pattern: &[u8],
    compare: Compare,
    invert: bool,
    flags: StringFlags,
) -> Outcome {
    let mut bp = cursor;
    let mut tp = 0;
    let mut order = Ordering::Equal;
    let mut stranded = false;

    while tp < pattern.len() {
        let Some(&raw) = buf.get(bp) else {
            return Outcome::InsufficientData;
        };
        let mut b = raw;

        if b == b' ' && flags.contains(StringFlags::COMPACT_WS) {
            while buf.get(bp + 1) == Some(&b' ') {
                bp += 1;
            }
        }

        let mut c = pattern[tp];
        if c == b' ' && b != b' ' && flags.contains(StringFlags::IGNORE_WS) {
            let mut t = tp;
            while t < pattern.len() && pattern[t] == b' ' {
                t += 1;
            }
            if t == pattern.len() {
                // the pattern ran out while skipping, so the space is compared
                stranded = true;
                tp = t - 1;
            } else {
                tp = t;
                c = pattern[tp];
            }
        }

        if flags.contains(StringFlags::MATCH_LOWER) && c.is_ascii_lowercase() {
            b = b.to_ascii_lowercase();
        }
        if flags.contains(StringFlags::MATCH_UPPER) && c.is_ascii_uppercase() {
            b = b.to_ascii_uppercase();
        }

        bp += 1;
        if b != c {
            order = b.cmp(&c);
            break;
        }
        tp += 1;
    }

    let ok = match compare {
        Compare::Less => order == Ordering::Less,
        Compare::Greater => order == Ordering::Greater,
        _ => order == Ordering::Equal,
    } != invert;
    if !ok && stranded {
        // unfinished buffer against a finished pattern
        return Outcome::InsufficientData;
    }
    Outcome::from_bool(ok, cursor, bp - cursor)
}

/// Search forward from `cursor` for `pattern`, trying at most `limit`
/// start positions (0 searches the rest of the buffer).
///
/// The first position whose comparison is decided either way other than a
/// plain mismatch wins. Running off the end of the window is a mismatch,
/// not a lack of data.
pub fn bounded_search(
    buf: &[u8],
    cursor: usize,
    pattern: &[u8],
    limit: usize,
    flags: StringFlags,
) -> Outcome {
    let len = buf.len();
    let tlen = pattern.len();
    if cursor >= len || tlen > len {
        return Outcome::InsufficientData;
    }

    let last = len - tlen + 1;
    let end = if limit == 0 {
        last
    } else {
        cursor.saturating_add(limit).min(last)
    };
    if end <= cursor {
        return Outcome::NotMatched;
    }

    if flags.is_empty() {
        // every candidate start fits, so a plain substring scan is exact
        let haystack = &buf[cursor..end + tlen - 1];
        return match memmem::find(haystack, pattern) {
            Some(pos) => Outcome::span(cursor + pos, tlen),
            None => Outcome::NotMatched,
        };
    }

    for start in cursor..end {
        match flexible_match(buf, start, pattern, Compare::Equal, false, flags) {
            Outcome::NotMatched => continue,
            decided => return decided,
        }
    }
    Outcome::NotMatched
}
