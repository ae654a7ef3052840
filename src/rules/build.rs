//! Const constructors for writing rule tables as static data.
//!
//! Numeric names follow the signature format: `byte`, `be_short`, ... are
//! signed, the `u` forms unsigned. Every constructor starts as an equality
//! test at an absolute offset; chain [`Test`] modifiers such as `.mask()`,
//! `.gt()` or `.relative()` to refine it.
//!
//! ```
//! use magic_mime::rule;
//! use magic_mime::rules::build::*;
//! use magic_mime::rules::RuleSet;
//!
//! static TREES: &[magic_mime::rules::RuleNode<'static>] = &[rule!(
//!     be_long(0, 0xcafebabe) => [
//!         rule!(be_long(4, 30).gt() => "application/x-java-applet"),
//!     ]
//! )];
//! let set = RuleSet::new(TREES);
//! assert!(set.validate().is_ok());
//! ```

use super::node::{Offset, Test};
use crate::matchers::{
    Compare, Endian, NumericEntry, NumericGroup, NumericTest, RegexFlags, StringEntry,
    StringFlags, StringGroup, Width,
};

/// Build a [`RuleNode`](super::RuleNode): `rule!(test => "mime")` declares a
/// type, `rule!(test => [children...])` descends.
#[macro_export]
macro_rules! rule {
    ($test:expr => $mime:literal) => {
        $crate::rules::RuleNode {
            test: $test,
            mime: Some($mime),
            children: &[],
        }
    };
    ($test:expr => [$($child:expr),* $(,)?]) => {
        $crate::rules::RuleNode {
            test: $test,
            mime: None,
            children: &[$($child),*],
        }
    };
}

const fn num(at: usize, width: Width, endian: Endian, value: u64, signed: bool) -> Test<'static> {
    let test = NumericTest::new(width, endian, value);
    Test::Numeric {
        at: Offset::Absolute(at),
        test: if signed { test.signed() } else { test },
    }
}

pub const fn byte(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Byte, Endian::Big, value, true)
}

pub const fn ubyte(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Byte, Endian::Big, value, false)
}

pub const fn be_short(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Short, Endian::Big, value, true)
}

pub const fn le_short(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Short, Endian::Little, value, true)
}

pub const fn ube_short(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Short, Endian::Big, value, false)
}

pub const fn ule_short(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Short, Endian::Little, value, false)
}

pub const fn be_long(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Long, Endian::Big, value, true)
}

pub const fn le_long(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Long, Endian::Little, value, true)
}

pub const fn ube_long(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Long, Endian::Big, value, false)
}

pub const fn ule_long(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Long, Endian::Little, value, false)
}

pub const fn be_quad(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Quad, Endian::Big, value, true)
}

pub const fn le_quad(at: usize, value: u64) -> Test<'static> {
    num(at, Width::Quad, Endian::Little, value, true)
}

/// Exact byte-string equality.
pub const fn string(at: usize, literal: &[u8]) -> Test<'_> {
    Test::Str {
        at: Offset::Absolute(at),
        literal,
        compare: Compare::Equal,
        invert: false,
    }
}

/// Whitespace and case tolerant equality.
pub const fn flex(at: usize, pattern: &[u8], flags: StringFlags) -> Test<'_> {
    Test::Flex {
        at: Offset::Absolute(at),
        pattern,
        compare: Compare::Equal,
        invert: false,
        flags,
    }
}

/// Forward search over at most `limit` start positions (0 = unbounded).
pub const fn search(at: usize, pattern: &[u8], limit: usize, flags: StringFlags) -> Test<'_> {
    Test::Search {
        at: Offset::Absolute(at),
        pattern,
        limit,
        flags,
    }
}

pub const fn regex(at: usize, pattern: &str, limit: usize, flags: RegexFlags) -> Test<'_> {
    Test::Regex {
        at: Offset::Absolute(at),
        pattern,
        limit,
        flags,
    }
}

/// Big-endian short dispatch at offset 0.
pub const fn short_group(entries: &[NumericEntry]) -> Test<'_> {
    Test::NumericGroup(NumericGroup::be_short(entries))
}

/// Leading-byte literal dispatch at `at`.
pub const fn prefix_group<'r>(at: usize, entries: &'r [StringEntry<'r>]) -> Test<'r> {
    Test::StringGroup(StringGroup::new(at, entries))
}

pub const fn entry(value: u64, mask: u64, mime: &'static str) -> NumericEntry {
    NumericEntry::new(value, mask, mime)
}

pub const fn prefix<'r>(literal: &'r [u8], mime: &'static str) -> StringEntry<'r> {
    StringEntry::new(literal, mime)
}
