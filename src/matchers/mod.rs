//! Primitive matchers.
//!
//! Every matcher borrows the caller's buffer, starts at a cursor and answers
//! with an [`Outcome`]. A short buffer is never reported as a mismatch: any
//! test that needs bytes past the end yields [`Outcome::InsufficientData`].

pub mod group;
pub mod indirect;
pub mod numeric;
pub mod regex;
pub mod string;

pub use group::{GroupOutcome, NumericEntry, NumericGroup, StringEntry, StringGroup};
pub use indirect::IndirectKind;
pub use numeric::{Compare, Endian, NumericTest, Width};
pub use self::regex::{regex_search, RegexFlags};
pub use string::{
    bounded_search, flexible_match, string_equal, string_greater, string_less, StringFlags,
};

/// Three-valued result of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The test held. `consumed` bytes matched and `next` is the cursor
    /// just past them, which is where relative child offsets start.
    Matched { consumed: usize, next: usize },
    /// The bytes were present and did not satisfy the test.
    NotMatched,
    /// The test needed bytes beyond the end of the buffer.
    InsufficientData,
}

impl Outcome {
    /// A match of `consumed` bytes starting at `start`.
    pub(crate) fn span(start: usize, consumed: usize) -> Self {
        Outcome::Matched {
            consumed,
            next: start + consumed,
        }
    }

    pub(crate) fn from_bool(ok: bool, start: usize, consumed: usize) -> Self {
        if ok {
            Outcome::span(start, consumed)
        } else {
            Outcome::NotMatched
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Outcome::InsufficientData)
    }

    /// Cursor after a match.
    pub fn next(&self) -> Option<usize> {
        match self {
            Outcome::Matched { next, .. } => Some(*next),
            _ => None,
        }
    }

    /// Invert a decided outcome. Missing data stays missing; a negated
    /// mismatch matches zero bytes at `cursor`.
    pub fn negate(self, cursor: usize) -> Self {
        match self {
            Outcome::Matched { .. } => Outcome::NotMatched,
            Outcome::NotMatched => Outcome::span(cursor, 0),
            Outcome::InsufficientData => Outcome::InsufficientData,
        }
    }
}
