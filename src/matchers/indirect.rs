//! Indirect offset reads: fetch an integer from the buffer and use it as a
//! position for another test.

use super::numeric::{read_uint, Endian};

/// Integer forms an indirect offset can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndirectKind {
    Byte,
    LeShort,
    BeShort,
    LeLong,
    BeLong,
}

impl IndirectKind {
    /// Map the single-letter code of the signature format (`b`, `B`, `s`,
    /// `S`, `l`, `L`).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            b'b' | b'B' => Some(IndirectKind::Byte),
            b's' => Some(IndirectKind::LeShort),
            b'S' => Some(IndirectKind::BeShort),
            b'l' => Some(IndirectKind::LeLong),
            b'L' => Some(IndirectKind::BeLong),
            _ => None,
        }
    }

    pub const fn width(self) -> usize {
        match self {
            IndirectKind::Byte => 1,
            IndirectKind::LeShort | IndirectKind::BeShort => 2,
            IndirectKind::LeLong | IndirectKind::BeLong => 4,
        }
    }

    const fn endian(self) -> Endian {
        match self {
            IndirectKind::BeShort | IndirectKind::BeLong => Endian::Big,
            _ => Endian::Little,
        }
    }

    /// Read the offset stored at `at`, or `None` if it runs past the end.
    pub fn resolve(self, buf: &[u8], at: usize) -> Option<u64> {
        read_uint(buf, at, self.width(), self.endian())
    }
}
