use std::fmt;

use super::{File, Rank, Square};

/******************************************\
|==========================================|
|                 Bitboard                 |
|==========================================|
\******************************************/

/// A 64-bit set of squares. Bit `i` is set when the square with index `i`
/// is occupied (or attacked), so A8 is the least significant bit and H1 the most.
///
/// Bitboards are plain values: every operation returns a new bitboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

crate::impl_bitboard_ops!(Bitboard);

/******************************************\
|==========================================|
|           Bitboard Constants             |
|==========================================|
\******************************************/

impl Bitboard {
    /// An empty bitboard, with no bits set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// A full bitboard, with all 64 bits set.
    pub const FULL: Bitboard = Bitboard(!Self::EMPTY.0);

    /// All squares on the 8th rank (the top row, indices 0-7).
    pub const RANK_8: Bitboard = Bitboard(0x00000000000000ff);

    /// All squares on the 1st rank (the bottom row, indices 56-63).
    pub const RANK_1: Bitboard = Bitboard(0xff00000000000000);

    /// All squares on the A file.
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);

    /// All squares on the H file.
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    /// All squares on the A and B files.
    pub const FILE_AB: Bitboard = Bitboard(0x0303030303030303);

    /// All squares on the G and H files.
    pub const FILE_GH: Bitboard = Bitboard(0xc0c0c0c0c0c0c0c0);

    /// Every square except the A file.
    pub const NOT_A_FILE: Bitboard = Bitboard(18374403900871474942);

    /// Every square except the H file.
    pub const NOT_H_FILE: Bitboard = Bitboard(9187201950435737471);

    /// Every square except the A and B files.
    pub const NOT_AB_FILE: Bitboard = Bitboard(18229723555195321596);

    /// Every square except the G and H files.
    pub const NOT_GH_FILE: Bitboard = Bitboard(4557430888798830399);
}

/******************************************\
|==========================================|
|                Conversions               |
|==========================================|
\******************************************/

impl Square {
    /// Converts a `Square` into a `Bitboard` with only that square's bit set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(1u64 << *self as u8)
    }
}

impl Rank {
    /// Converts a `Rank` into a `Bitboard` with all squares on that rank set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::RANK_8.0 << (8 * (7 - *self as u8)))
    }
}

impl File {
    /// Converts a `File` into a `Bitboard` with all squares on that file set.
    pub const fn bb(&self) -> Bitboard {
        Bitboard(Bitboard::FILE_A.0 << *self as u8)
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Bitboard {
        square.bb()
    }
}

impl<const N: usize> From<[Square; N]> for Bitboard {
    fn from(squares: [Square; N]) -> Bitboard {
        squares
            .into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb.set_bit(sq))
    }
}

/******************************************\
|==========================================|
|             Bit Primitives               |
|==========================================|
\******************************************/

impl Bitboard {
    /// Returns whether the bit for `square` is set.
    ///
    /// ## Examples
    /// ```rust
    /// use chessbits::core::{Bitboard, Square};
    /// assert!(Square::E2.bb().get_bit(Square::E2));
    /// assert!(!Bitboard::EMPTY.get_bit(Square::E2));
    /// ```
    #[inline]
    pub const fn get_bit(self, square: Square) -> bool {
        self.0 & (1u64 << square as u8) != 0
    }

    /// Returns a copy of the bitboard with the bit for `square` set.
    #[inline]
    #[must_use]
    pub const fn set_bit(self, square: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << square as u8))
    }

    /// Returns a copy of the bitboard with the bit for `square` cleared,
    /// whether or not it was set before.
    #[inline]
    #[must_use]
    pub const fn pop_bit(self, square: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << square as u8))
    }

    /// Counts the number of set bits (population count) in the bitboard.
    #[inline]
    pub const fn count_bits(self) -> u32 {
        self.0.count_ones()
    }

    /// Checks if the bitboard is empty (no bits set).
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Finds the least significant set bit and returns its `Square`,
    /// or `None` if the bitboard is empty.
    ///
    /// ## Examples
    /// ```rust
    /// use chessbits::core::{Bitboard, Square};
    /// assert_eq!((Square::A1.bb() | Square::H8.bb()).lsb(), Some(Square::H8));
    /// assert_eq!(Bitboard::EMPTY.lsb(), None);
    /// ```
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(unsafe { Square::from_unchecked(bits.trailing_zeros() as u8) }),
        }
    }

    /// Removes the least significant set bit, returning its `Square`.
    /// Returns `None` if the bitboard was empty.
    #[inline]
    pub const fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    /// Gathers the bits of `self` selected by `mask` into the low bits of the result,
    /// preserving their order (parallel bit extract).
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    #[inline]
    pub fn pext(self, mask: Bitboard) -> u64 {
        use std::arch::x86_64::_pext_u64;
        unsafe { _pext_u64(self.0, mask.0) }
    }

    /// Gathers the bits of `self` selected by `mask` into the low bits of the result,
    /// preserving their order (parallel bit extract).
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2")))]
    #[inline]
    pub const fn pext(self, mask: Bitboard) -> u64 {
        let mut result = 0u64;
        let mut out_bit = 1u64;
        let mut mask = mask.0;
        while mask != 0 {
            let lowest = mask & mask.wrapping_neg();
            if self.0 & lowest != 0 {
                result |= out_bit;
            }
            out_bit <<= 1;
            mask &= mask - 1;
        }
        result
    }
}

/******************************************\
|==========================================|
|                Iteration                 |
|==========================================|
\******************************************/

/// Iterator over the set squares of a bitboard, in ascending index order.
#[derive(Debug, Clone)]
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_bits() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for Bitboard {
    /// Prints the board from white's side, rank 8 at the top, followed by the raw value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, " {} ", rank)?;

            for file in File::iter() {
                let bit = self.get_bit(Square::from_parts(file, rank)) as u8;
                write!(f, " {}", bit)?;
            }

            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f)?;
        write!(f, "    Bitboard: {}", self.0)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
