//! Fixed-width integer tests.
//!
//! A field of 1, 2, 4 or 8 bytes is decoded in the requested byte order,
//! masked, normalized to its width and compared against the test value.

use super::Outcome;

/// Field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Byte,
    Short,
    Long,
    Quad,
}

impl Width {
    pub const fn bytes(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Short => 2,
            Width::Long => 4,
            Width::Quad => 8,
        }
    }

    /// All bits of the field set.
    pub const fn ones(self) -> u64 {
        match self {
            Width::Quad => u64::MAX,
            w => (1u64 << (8 * w.bytes())) - 1,
        }
    }

    /// Sign-extend a width-normalized value.
    pub const fn sign_extend(self, v: u64) -> i64 {
        let shift = 64 - 8 * self.bytes() as u32;
        ((v << shift) as i64) >> shift
    }
}

/// Byte order of a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

/// Comparison operator. Ordering operators compare the buffer field
/// against the test value (`Less` holds when field < test).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compare {
    Equal,
    Less,
    Greater,
    /// Every bit of the test value is set in the field.
    BitsSet,
    /// Every bit of the test value is clear in the field.
    BitsClear,
}

impl Compare {
    fn unsigned(self, field: u64, test: u64) -> bool {
        match self {
            Compare::Equal => field == test,
            Compare::Less => field < test,
            Compare::Greater => field > test,
            Compare::BitsSet => field & test == test,
            Compare::BitsClear => field & test == 0,
        }
    }

    fn signed(self, field: i64, test: i64, ones: u64) -> bool {
        match self {
            Compare::Equal => field == test,
            Compare::Less => field < test,
            Compare::Greater => field > test,
            Compare::BitsSet | Compare::BitsClear => {
                self.unsigned(field as u64 & ones, test as u64 & ones)
            }
        }
    }
}

/// Read an unsigned integer of `n` bytes at `at`.
///
/// Returns `None` when the field runs past the end of `buf`.
pub fn read_uint(buf: &[u8], at: usize, n: usize, endian: Endian) -> Option<u64> {
    let end = at.checked_add(n)?;
    let bytes = buf.get(at..end)?;
    let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
    Some(match endian {
        Endian::Big => bytes.iter().fold(0, fold),
        Endian::Little => bytes.iter().rev().fold(0, fold),
    })
}

/// A complete numeric test: operands, operator and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericTest {
    pub width: Width,
    pub endian: Endian,
    pub signed: bool,
    /// Test value as a bit pattern; only the low `width` bytes are used.
    pub value: u64,
    /// Applied to both the field and the test value.
    pub mask: u64,
    pub compare: Compare,
    /// Invert the result of the comparison.
    pub invert: bool,
    /// Negate the field before comparing.
    pub flip_sign: bool,
}

impl NumericTest {
    /// Unsigned equality test with no mask.
    pub const fn new(width: Width, endian: Endian, value: u64) -> Self {
        Self {
            width,
            endian,
            signed: false,
            value,
            mask: u64::MAX,
            compare: Compare::Equal,
            invert: false,
            flip_sign: false,
        }
    }

    pub const fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    pub const fn mask(mut self, mask: u64) -> Self {
        self.mask = mask;
        self
    }

    pub const fn compare(mut self, compare: Compare) -> Self {
        self.compare = compare;
        self
    }

    pub const fn invert(mut self) -> Self {
        self.invert = !self.invert;
        self
    }

    pub const fn flip_sign(mut self) -> Self {
        self.flip_sign = true;
        self
    }

    /// Decode the field at `cursor`, width-normalized and unmasked.
    pub fn decode(&self, buf: &[u8], cursor: usize) -> Option<u64> {
        read_uint(buf, cursor, self.width.bytes(), self.endian)
    }

    /// Run the test at `cursor`. A match consumes exactly the field width.
    pub fn apply(&self, buf: &[u8], cursor: usize) -> Outcome {
        let Some(raw) = self.decode(buf, cursor) else {
            return Outcome::InsufficientData;
        };

        let ones = self.width.ones();
        let field = raw & self.mask & ones;
        let test = self.value & self.mask & ones;

        let ok = if self.signed {
            let mut f = self.width.sign_extend(field);
            if self.flip_sign {
                f = self.width.sign_extend(f.wrapping_neg() as u64 & ones);
            }
            self.compare.signed(f, self.width.sign_extend(test), ones)
        } else {
            let f = if self.flip_sign {
                field.wrapping_neg() & ones
            } else {
                field
            };
            self.compare.unsigned(f, test)
        };

        Outcome::from_bool(ok != self.invert, cursor, self.width.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn be_short(v: u64) -> NumericTest {
        NumericTest::new(Width::Short, Endian::Big, v)
    }

    #[test]
    fn test_read_uint_endianness() {
        let buf = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(read_uint(&buf, 0, 2, Endian::Big), Some(0x1234));
        assert_eq!(read_uint(&buf, 0, 2, Endian::Little), Some(0x3412));
        assert_eq!(read_uint(&buf, 0, 4, Endian::Little), Some(0x7856_3412));
        assert_eq!(read_uint(&buf, 3, 2, Endian::Big), None);
        assert_eq!(read_uint(&buf, usize::MAX, 2, Endian::Big), None);
    }

    #[test]
    fn test_equal_consumes_width() {
        let buf = [0xCA, 0xFE, 0xBA, 0xBE, 0x00];
        let t = NumericTest::new(Width::Long, Endian::Big, 0xCAFE_BABE);
        assert_eq!(t.apply(&buf, 0), Outcome::span(0, 4));
        // bytes 1..5 exist but hold a different value
        assert_eq!(t.apply(&buf, 1), Outcome::NotMatched);
        assert_eq!(t.apply(&buf, 2), Outcome::InsufficientData);
        let le = NumericTest::new(Width::Long, Endian::Little, 0xCAFE_BABE);
        assert_eq!(le.apply(&buf, 0), Outcome::NotMatched);
    }

    #[test]
    fn test_mask_applies_to_both_operands() {
        let t = be_short(0xFFFC).mask(0xFFFE);
        assert!(t.apply(&[0xFF, 0xFD], 0).is_match());
        assert!(!t.apply(&[0xFF, 0xF1], 0).is_match());
        // mask wider than the field is truncated
        let t = NumericTest::new(Width::Byte, Endian::Big, 0x1F0).mask(0xFFF0);
        assert!(t.apply(&[0xF3], 0).is_match());
    }

    #[test]
    fn test_ordering_is_field_against_test() {
        let lt9 = NumericTest::new(Width::Byte, Endian::Big, 9).compare(Compare::Less);
        assert!(lt9.apply(&[3], 0).is_match());
        assert!(!lt9.apply(&[9], 0).is_match());
        let gt30 = NumericTest::new(Width::Long, Endian::Big, 30).compare(Compare::Greater);
        assert!(gt30.apply(&[0, 0, 0, 0x34], 0).is_match());
        assert!(!gt30.apply(&[0, 0, 0, 2], 0).is_match());
    }

    #[test]
    fn test_signed_ordering() {
        let lt9 = NumericTest::new(Width::Byte, Endian::Big, 9)
            .signed()
            .compare(Compare::Less);
        // 0xF0 is -16 as a signed byte
        assert!(lt9.apply(&[0xF0], 0).is_match());
        let ult9 = NumericTest::new(Width::Byte, Endian::Big, 9).compare(Compare::Less);
        assert!(!ult9.apply(&[0xF0], 0).is_match());
    }

    #[test]
    fn test_signed_test_value_is_width_normalized() {
        // -1 as a short, given as a full 64-bit pattern
        let t = NumericTest::new(Width::Short, Endian::Little, u64::MAX).signed();
        assert!(t.apply(&[0xFF, 0xFF], 0).is_match());
    }

    #[test]
    fn test_bit_operators() {
        let set = NumericTest::new(Width::Byte, Endian::Big, 0x81).compare(Compare::BitsSet);
        assert!(set.apply(&[0xC1], 0).is_match());
        assert!(!set.apply(&[0x41], 0).is_match());
        let clr = NumericTest::new(Width::Byte, Endian::Big, 0x81).compare(Compare::BitsClear);
        assert!(clr.apply(&[0x7E], 0).is_match());
        assert!(!clr.apply(&[0x01], 0).is_match());
    }

    #[test]
    fn test_invert_and_flip_sign() {
        let ne = be_short(0xCAFE).invert();
        assert!(ne.apply(&[0x00, 0x01], 0).is_match());
        assert!(!ne.apply(&[0xCA, 0xFE], 0).is_match());
        assert_eq!(ne.apply(&[0xCA], 0), Outcome::InsufficientData);

        // -(-2) == 2
        let neg = NumericTest::new(Width::Byte, Endian::Big, 2)
            .signed()
            .flip_sign();
        assert!(neg.apply(&[0xFE], 0).is_match());
    }

    #[test]
    fn test_quad() {
        let buf = 0x0123_4567_89AB_CDEFu64.to_le_bytes();
        let t = NumericTest::new(Width::Quad, Endian::Little, 0x0123_4567_89AB_CDEF);
        assert_eq!(t.apply(&buf, 0), Outcome::span(0, 8));
    }
}
