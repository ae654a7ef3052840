//! Rule tree nodes: where a test reads, what it checks, and what it
//! declares when it holds.

use crate::matchers::{
    bounded_search, flexible_match, regex_search, string_equal, string_greater, string_less,
    Compare, GroupOutcome, IndirectKind, NumericGroup, NumericTest, Outcome, RegexFlags,
    StringFlags, StringGroup,
};

/// An offset read from the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indirect {
    /// Where the offset value is stored.
    pub at: i64,
    /// `at` counts from the parent's end cursor instead of the buffer start.
    pub at_relative: bool,
    pub kind: IndirectKind,
    /// Added to the value read.
    pub adjust: i64,
    /// The result counts from the parent's end cursor.
    pub relative: bool,
}

/// Where a test starts reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    Absolute(usize),
    /// Delta from the end of the parent's match.
    Relative(i64),
    Indirect(Indirect),
}

fn shift(base: usize, delta: i64) -> Result<usize, Outcome> {
    i64::try_from(base)
        .ok()
        .and_then(|b| b.checked_add(delta))
        .and_then(|v| usize::try_from(v).ok())
        .ok_or(Outcome::NotMatched)
}

impl Offset {
    /// Resolve to a buffer position. `base` is the parent's end cursor.
    ///
    /// A position that would be negative is a mismatch; an indirect value
    /// that cannot be read is a lack of data.
    pub fn resolve(&self, buf: &[u8], base: usize) -> Result<usize, Outcome> {
        match *self {
            Offset::Absolute(n) => Ok(n),
            Offset::Relative(delta) => shift(base, delta),
            Offset::Indirect(ind) => {
                let at = shift(if ind.at_relative { base } else { 0 }, ind.at)?;
                let value = ind
                    .kind
                    .resolve(buf, at)
                    .ok_or(Outcome::InsufficientData)?;
                let value = i64::try_from(value).map_err(|_| Outcome::NotMatched)?;
                let delta = value.checked_add(ind.adjust).ok_or(Outcome::NotMatched)?;
                shift(if ind.relative { base } else { 0 }, delta)
            }
        }
    }
}

/// A single test in a rule tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Test<'r> {
    Numeric {
        at: Offset,
        test: NumericTest,
    },
    /// Exact byte-string comparison.
    Str {
        at: Offset,
        literal: &'r [u8],
        compare: Compare,
        invert: bool,
    },
    /// Whitespace and case tolerant comparison.
    Flex {
        at: Offset,
        pattern: &'r [u8],
        compare: Compare,
        invert: bool,
        flags: StringFlags,
    },
    Search {
        at: Offset,
        pattern: &'r [u8],
        limit: usize,
        flags: StringFlags,
    },
    Regex {
        at: Offset,
        pattern: &'r str,
        limit: usize,
        flags: RegexFlags,
    },
    NumericGroup(NumericGroup<'r>),
    StringGroup(StringGroup<'r>),
}

impl<'r> Test<'r> {
    pub const fn offset(&self) -> Option<Offset> {
        match *self {
            Test::Numeric { at, .. }
            | Test::Str { at, .. }
            | Test::Flex { at, .. }
            | Test::Search { at, .. }
            | Test::Regex { at, .. } => Some(at),
            Test::NumericGroup(_) | Test::StringGroup(_) => None,
        }
    }

    pub const fn is_group(&self) -> bool {
        matches!(self, Test::NumericGroup(_) | Test::StringGroup(_))
    }

    /// Replace the offset. Groups have fixed offsets and are unchanged.
    pub const fn at(self, offset: Offset) -> Self {
        match self {
            Test::Numeric { test, .. } => Test::Numeric { at: offset, test },
            Test::Str {
                literal,
                compare,
                invert,
                ..
            } => Test::Str {
                at: offset,
                literal,
                compare,
                invert,
            },
            Test::Flex {
                pattern,
                compare,
                invert,
                flags,
                ..
            } => Test::Flex {
                at: offset,
                pattern,
                compare,
                invert,
                flags,
            },
            Test::Search {
                pattern,
                limit,
                flags,
                ..
            } => Test::Search {
                at: offset,
                pattern,
                limit,
                flags,
            },
            Test::Regex {
                pattern,
                limit,
                flags,
                ..
            } => Test::Regex {
                at: offset,
                pattern,
                limit,
                flags,
            },
            group => group,
        }
    }

    /// Count the offset from the end of the parent's match.
    pub const fn relative(self) -> Self {
        match self.offset() {
            Some(Offset::Absolute(n)) => self.at(Offset::Relative(n as i64)),
            _ => self,
        }
    }

    /// Read the real offset from the current position as `kind`, then add
    /// `adjust`.
    pub const fn via(self, kind: IndirectKind, adjust: i64) -> Self {
        let (at, at_relative) = match self.offset() {
            Some(Offset::Absolute(n)) => (n as i64, false),
            Some(Offset::Relative(d)) => (d, true),
            _ => return self,
        };
        self.at(Offset::Indirect(Indirect {
            at,
            at_relative,
            kind,
            adjust,
            relative: false,
        }))
    }

    /// Make an indirect result count from the parent's end cursor.
    pub const fn from_parent(self) -> Self {
        match self.offset() {
            Some(Offset::Indirect(mut ind)) => {
                ind.relative = true;
                self.at(Offset::Indirect(ind))
            }
            _ => self,
        }
    }

    const fn with_compare(self, compare: Compare) -> Self {
        match self {
            Test::Numeric { at, test } => Test::Numeric {
                at,
                test: test.compare(compare),
            },
            Test::Str {
                at,
                literal,
                invert,
                ..
            } => Test::Str {
                at,
                literal,
                compare,
                invert,
            },
            Test::Flex {
                at,
                pattern,
                invert,
                flags,
                ..
            } => Test::Flex {
                at,
                pattern,
                compare,
                invert,
                flags,
            },
            other => other,
        }
    }

    pub const fn lt(self) -> Self {
        self.with_compare(Compare::Less)
    }

    pub const fn gt(self) -> Self {
        self.with_compare(Compare::Greater)
    }

    pub const fn bits_set(self) -> Self {
        self.with_compare(Compare::BitsSet)
    }

    pub const fn bits_clear(self) -> Self {
        self.with_compare(Compare::BitsClear)
    }

    /// Invert the test.
    pub const fn inverted(self) -> Self {
        match self {
            Test::Numeric { at, test } => Test::Numeric {
                at,
                test: test.invert(),
            },
            Test::Str {
                at,
                literal,
                compare,
                invert,
            } => Test::Str {
                at,
                literal,
                compare,
                invert: !invert,
            },
            Test::Flex {
                at,
                pattern,
                compare,
                invert,
                flags,
            } => Test::Flex {
                at,
                pattern,
                compare,
                invert: !invert,
                flags,
            },
            other => other,
        }
    }

    pub const fn mask(self, mask: u64) -> Self {
        match self {
            Test::Numeric { at, test } => Test::Numeric {
                at,
                test: test.mask(mask),
            },
            other => other,
        }
    }

    /// Negate the decoded field before comparing.
    pub const fn flip_sign(self) -> Self {
        match self {
            Test::Numeric { at, test } => Test::Numeric {
                at,
                test: test.flip_sign(),
            },
            other => other,
        }
    }

    /// Run the test. `base` is the parent's end cursor; a group hit also
    /// reports its own mime.
    pub fn run(&self, buf: &[u8], base: usize) -> (Outcome, Option<&'static str>) {
        let group = match self {
            Test::NumericGroup(g) => g.apply(buf),
            Test::StringGroup(g) => g.apply(buf),
            _ => return (self.run_at(buf, base), None),
        };
        match group {
            GroupOutcome::Hit {
                mime,
                consumed,
                next,
            } => (Outcome::Matched { consumed, next }, Some(mime)),
            GroupOutcome::NotMatched => (Outcome::NotMatched, None),
            GroupOutcome::InsufficientData => (Outcome::InsufficientData, None),
        }
    }

    fn run_at(&self, buf: &[u8], base: usize) -> Outcome {
        let Some(offset) = self.offset() else {
            return Outcome::NotMatched;
        };
        let pos = match offset.resolve(buf, base) {
            Ok(pos) => pos,
            Err(outcome) => return outcome,
        };

        match *self {
            Test::Numeric { test, .. } => test.apply(buf, pos),
            Test::Str {
                literal,
                compare,
                invert,
                ..
            } => {
                let outcome = match compare {
                    Compare::Less => string_less(buf, pos, literal),
                    Compare::Greater => string_greater(buf, pos, literal),
                    _ => string_equal(buf, pos, literal),
                };
                if invert {
                    outcome.negate(pos)
                } else {
                    outcome
                }
            }
            Test::Flex {
                pattern,
                compare,
                invert,
                flags,
                ..
            } => flexible_match(buf, pos, pattern, compare, invert, flags),
            Test::Search {
                pattern,
                limit,
                flags,
                ..
            } => bounded_search(buf, pos, pattern, limit, flags),
            Test::Regex {
                pattern,
                limit,
                flags,
                ..
            } => regex_search(buf, pos, pattern, limit, flags),
            Test::NumericGroup(_) | Test::StringGroup(_) => Outcome::NotMatched,
        }
    }
}

/// A test, plus what happens when it holds: declare `mime`, or try
/// `children` in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleNode<'r> {
    pub test: Test<'r>,
    pub mime: Option<&'static str>,
    pub children: &'r [RuleNode<'r>],
}

impl<'r> RuleNode<'r> {
    pub const fn leaf(test: Test<'r>, mime: &'static str) -> Self {
        Self {
            test,
            mime: Some(mime),
            children: &[],
        }
    }

    pub const fn branch(test: Test<'r>, children: &'r [RuleNode<'r>]) -> Self {
        Self {
            test,
            mime: None,
            children,
        }
    }

    /// Nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(RuleNode::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{Endian, Width};

    const fn numeric(at: usize, width: Width, value: u64) -> Test<'static> {
        Test::Numeric {
            at: Offset::Absolute(at),
            test: NumericTest::new(width, Endian::Big, value),
        }
    }

    #[test]
    fn test_relative_offset() {
        let off = Offset::Relative(2);
        assert_eq!(off.resolve(b"", 5), Ok(7));
        assert_eq!(Offset::Relative(-6).resolve(b"", 5), Err(Outcome::NotMatched));
    }

    #[test]
    fn test_indirect_offset() {
        let mut buf = [0u8; 32];
        buf[10] = 0x05;
        let t = numeric(10, Width::Byte, 0).via(IndirectKind::LeShort, 0);
        let Some(Offset::Indirect(ind)) = t.offset() else {
            panic!("expected an indirect offset");
        };
        assert_eq!(Offset::Indirect(ind).resolve(&buf, 0), Ok(5));

        let adjusted = numeric(10, Width::Byte, 0).via(IndirectKind::LeShort, 30);
        assert_eq!(adjusted.offset().map(|o| o.resolve(&buf, 0)), Some(Ok(35)));

        let negative = numeric(10, Width::Byte, 0).via(IndirectKind::LeShort, -6);
        assert_eq!(
            negative.offset().map(|o| o.resolve(&buf, 0)),
            Some(Err(Outcome::NotMatched))
        );

        let unreadable = numeric(31, Width::Byte, 0).via(IndirectKind::LeLong, 0);
        assert_eq!(unreadable.run(&buf, 0).0, Outcome::InsufficientData);
    }

    #[test]
    fn test_indirect_from_parent() {
        let buf = [0u8, 0, 0, 3, 0, 0, 0, 0];
        // the byte at parent+2 holds 3, counted again from the parent cursor
        let t = numeric(2, Width::Byte, 0)
            .relative()
            .via(IndirectKind::Byte, 0)
            .from_parent();
        let Some(Offset::Indirect(ind)) = t.offset() else {
            panic!("expected an indirect offset");
        };
        assert!(ind.at_relative);
        assert_eq!(Offset::Indirect(ind).resolve(&buf, 1), Ok(4));
    }

    #[test]
    fn test_modifiers() {
        let t = numeric(4, Width::Long, 30).gt();
        assert!(t.run(&[0, 0, 0, 0, 0, 0, 0, 0x34], 0).0.is_match());
        assert!(!t.inverted().run(&[0, 0, 0, 0, 0, 0, 0, 0x34], 0).0.is_match());

        let s = Test::Str {
            at: Offset::Absolute(0),
            literal: b"mime",
            compare: Compare::Equal,
            invert: false,
        };
        assert!(s.inverted().run(b"abcd", 0).0.is_match());
        assert_eq!(s.inverted().run(b"ab", 0).0, Outcome::InsufficientData);
    }

    #[test]
    fn test_count() {
        const CHILDREN: &[RuleNode<'static>] = &[
            RuleNode::leaf(numeric(0, Width::Byte, 1), "x/one"),
            RuleNode::leaf(numeric(0, Width::Byte, 2), "x/two"),
        ];
        let root = RuleNode::branch(numeric(0, Width::Byte, 0).mask(0), CHILDREN);
        assert_eq!(root.count(), 3);
    }
}
