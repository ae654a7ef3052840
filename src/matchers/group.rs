//! Grouped table matchers.
//!
//! Many signatures share one field or one leading byte. A group decodes
//! that once and scans a table, returning the first entry's mime.

use super::numeric::{read_uint, Endian, Width};

/// Result of a group dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupOutcome {
    Hit {
        mime: &'static str,
        consumed: usize,
        next: usize,
    },
    NotMatched,
    InsufficientData,
}

/// One row of a [`NumericGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericEntry {
    pub value: u64,
    pub mask: u64,
    pub mime: &'static str,
}

impl NumericEntry {
    pub const fn new(value: u64, mask: u64, mime: &'static str) -> Self {
        Self { value, mask, mime }
    }
}

/// Numeric dispatch: one field, many `(value, mask, mime)` rows scanned in
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericGroup<'r> {
    pub offset: usize,
    pub width: Width,
    pub endian: Endian,
    pub entries: &'r [NumericEntry],
}

impl<'r> NumericGroup<'r> {
    /// The usual shape: a big-endian short at offset 0.
    pub const fn be_short(entries: &'r [NumericEntry]) -> Self {
        Self {
            offset: 0,
            width: Width::Short,
            endian: Endian::Big,
            entries,
        }
    }

    pub fn apply(&self, buf: &[u8]) -> GroupOutcome {
        let n = self.width.bytes();
        let Some(field) = read_uint(buf, self.offset, n, self.endian) else {
            return GroupOutcome::InsufficientData;
        };

        let ones = self.width.ones();
        self.entries
            .iter()
            .find(|e| field & e.mask & ones == e.value & e.mask & ones)
            .map_or(GroupOutcome::NotMatched, |e| GroupOutcome::Hit {
                mime: e.mime,
                consumed: n,
                next: self.offset + n,
            })
    }
}

/// One row of a [`StringGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringEntry<'r> {
    pub literal: &'r [u8],
    pub mime: &'static str,
}

impl<'r> StringEntry<'r> {
    pub const fn new(literal: &'r [u8], mime: &'static str) -> Self {
        Self { literal, mime }
    }
}

/// Literal-prefix dispatch over entries sorted by first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringGroup<'r> {
    pub offset: usize,
    pub entries: &'r [StringEntry<'r>],
}

impl<'r> StringGroup<'r> {
    pub const fn new(offset: usize, entries: &'r [StringEntry<'r>]) -> Self {
        Self { offset, entries }
    }

    /// Find the run of entries sharing the buffer's leading byte and
    /// compare each in full.
    ///
    /// Any entry in the run that is longer than the remaining buffer marks
    /// the result as insufficient, even when a later, shorter entry could
    /// still be tried.
    pub fn apply(&self, buf: &[u8]) -> GroupOutcome {
        let Some(rest) = buf.get(self.offset..).filter(|r| !r.is_empty()) else {
            return GroupOutcome::InsufficientData;
        };
        let key = rest[0];

        let Some(first) = self
            .entries
            .iter()
            .position(|e| e.literal.first() == Some(&key))
        else {
            return GroupOutcome::NotMatched;
        };

        let mut short = false;
        for entry in &self.entries[first..] {
            if entry.literal.first() != Some(&key) {
                break;
            }
            let tlen = entry.literal.len();
            if tlen > rest.len() {
                short = true;
            } else if rest[1..tlen] == entry.literal[1..] {
                return GroupOutcome::Hit {
                    mime: entry.mime,
                    consumed: tlen,
                    next: self.offset + tlen,
                };
            }
        }

        if short {
            GroupOutcome::InsufficientData
        } else {
            GroupOutcome::NotMatched
        }
    }

    /// True when entries are ordered by first byte and none is empty.
    pub fn is_sorted(&self) -> bool {
        self.entries.iter().all(|e| !e.literal.is_empty())
            && self
                .entries
                .windows(2)
                .all(|w| w[0].literal[0] <= w[1].literal[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MPEG: &[NumericEntry] = &[
        NumericEntry::new(0xFFFC, 0xFFFE, "audio/mpeg"),
        NumericEntry::new(0x0b77, 0xFFFF, "audio/vnd.dolby.dd-raw"),
    ];

    const PREFIXES: &[StringEntry<'static>] = &[
        StringEntry::new(b"%!", "application/postscript"),
        StringEntry::new(b"%PDF-", "application/pdf"),
        StringEntry::new(b"GIF8", "image/gif"),
        StringEntry::new(b"Rar!\x1a\x07\x00", "application/x-rar"),
        StringEntry::new(b"RIFX", "application/x-riff"),
    ];

    #[test]
    fn test_numeric_group_mask() {
        let group = NumericGroup::be_short(MPEG);
        assert_eq!(
            group.apply(&[0xFF, 0xFD]),
            GroupOutcome::Hit {
                mime: "audio/mpeg",
                consumed: 2,
                next: 2
            }
        );
        assert_eq!(group.apply(&[0xFF, 0xF1]), GroupOutcome::NotMatched);
        assert_eq!(group.apply(&[0xFF]), GroupOutcome::InsufficientData);
        assert!(matches!(
            group.apply(&[0x0b, 0x77, 0x00]),
            GroupOutcome::Hit {
                mime: "audio/vnd.dolby.dd-raw",
                ..
            }
        ));
    }

    #[test]
    fn test_string_group_hits() {
        let group = StringGroup::new(0, PREFIXES);
        assert!(matches!(
            group.apply(b"GIF89a"),
            GroupOutcome::Hit {
                mime: "image/gif",
                consumed: 4,
                ..
            }
        ));
        assert!(matches!(
            group.apply(b"%!"),
            GroupOutcome::Hit {
                mime: "application/postscript",
                ..
            }
        ));
        assert_eq!(group.apply(b"zzzz"), GroupOutcome::NotMatched);
        assert_eq!(group.apply(b""), GroupOutcome::InsufficientData);
    }

    #[test]
    fn test_string_group_short_entry_is_sticky() {
        let group = StringGroup::new(0, PREFIXES);
        // "Rar!..." is too long, "RIFX" is not and does not match
        assert_eq!(group.apply(b"RIFF"), GroupOutcome::InsufficientData);
        // "%PDF-" is too long but "%!" still wins first
        assert!(matches!(group.apply(b"%!PS"), GroupOutcome::Hit { .. }));
        assert_eq!(group.apply(b"%PD"), GroupOutcome::InsufficientData);
    }

    #[test]
    fn test_sorted_check() {
        assert!(StringGroup::new(0, PREFIXES).is_sorted());
        let bad = [
            StringEntry::new(b"b", "x/b"),
            StringEntry::new(b"a", "x/a"),
        ];
        assert!(!StringGroup::new(0, &bad).is_sorted());
    }
}
