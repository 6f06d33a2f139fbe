/******************************************\
|==========================================|
|          Macro: impl_board_enum          |
|==========================================|
\******************************************/

/// Turns a fieldless `#[repr(u8)]` enum with discriminants `0..count` into an
/// indexable board coordinate.
///
/// Adds to the enum:
/// - `NUM`: the number of variants, usable as an array length
/// - `from_unchecked(u8)`: `const` conversion from a raw discriminant
/// - `index()`: the discriminant as a `usize`, for indexing tables
/// - `iter()`: every variant in discriminant order
#[macro_export]
macro_rules! impl_board_enum {
    ($name:ident, $count:literal) => {
        impl $name {
            #[doc = concat!("Number of variants in ", stringify!($name))]
            pub const NUM: usize = $count;

            #[doc = concat!("Builds a ", stringify!($name), " from its raw discriminant")]
            /// ## Safety
            /// - `raw` must be below `NUM`
            #[inline]
            pub const unsafe fn from_unchecked(raw: u8) -> Self {
                debug_assert!((raw as usize) < Self::NUM, "discriminant out of range");
                unsafe { std::mem::transmute::<u8, Self>(raw) }
            }

            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }

            #[doc = concat!("Every ", stringify!($name), " in ascending index order")]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
                (0..$count as u8).map(|raw| unsafe { Self::from_unchecked(raw) })
            }
        }
    };
}

/******************************************\
|==========================================|
|        Macro: impl_bitboard_ops          |
|==========================================|
\******************************************/

/// Set algebra and shifts for a `u64` newtype.
///
/// `&`, `|` and `^` combine two boards, `!` complements one, and `<<` / `>>`
/// take a `u8` amount. Bits pushed past either end of the word are lost, so
/// callers mask off file wrap-around themselves.
#[macro_export]
macro_rules! impl_bitboard_ops {
    (@binary $name:ident, $rhs:ty, $r:ident => $raw:expr;
        $($op:ident $method:ident $assign:ident $assign_method:ident $sym:tt),+
    ) => {
        $(
            impl std::ops::$op<$rhs> for $name {
                type Output = Self;

                #[inline]
                fn $method(self, $r: $rhs) -> Self {
                    Self(self.0 $sym $raw)
                }
            }

            impl std::ops::$assign<$rhs> for $name {
                #[inline]
                fn $assign_method(&mut self, $r: $rhs) {
                    *self = *self $sym $r;
                }
            }
        )+
    };
    ($name:ident) => {
        $crate::impl_bitboard_ops!(@binary $name, $name, rhs => rhs.0;
            BitAnd bitand BitAndAssign bitand_assign &,
            BitOr bitor BitOrAssign bitor_assign |,
            BitXor bitxor BitXorAssign bitxor_assign ^
        );
        $crate::impl_bitboard_ops!(@binary $name, u8, rhs => rhs;
            Shl shl ShlAssign shl_assign <<,
            Shr shr ShrAssign shr_assign >>
        );

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }
    };
}
