//! # Module: `mask`
//!
//! Attack masks computed directly from a square, without any lookup table.
//! These are the building blocks the tables in [`lookup`](super::lookup) are filled from.
//!
//! Leaper masks (pawn, knight, king) shift a single-bit board and clear any bit
//! that wrapped across the left or right edge with the file-exclusion masks.
//! A shift towards a lower index moves north (towards rank 8), so a shift by 7
//! lands one file to the right and a shift by 9 one file to the left. Bits
//! shifted past either end of the word simply fall off.
//!
//! Slider masks (bishop, rook) walk rays over (row, file) coordinates instead.

use crate::core::{Bitboard, Side, Square};

const NOT_A: u64 = Bitboard::NOT_A_FILE.0;
const NOT_H: u64 = Bitboard::NOT_H_FILE.0;
const NOT_AB: u64 = Bitboard::NOT_AB_FILE.0;
const NOT_GH: u64 = Bitboard::NOT_GH_FILE.0;

/******************************************\
|==========================================|
|              Leaper Masks                |
|==========================================|
\******************************************/

/// Squares attacked by a pawn of `side` standing on `square`.
///
/// At most two bits are set: the two forward diagonals. Squares on the side's
/// last rank are not special-cased; their attacks fall off the board and the
/// result is empty.
///
/// ## Examples
/// ```rust
/// use chessbits::core::{Bitboard, Side, Square};
/// use chessbits::attacks::mask_pawn_attacks;
///
/// assert_eq!(mask_pawn_attacks(Square::B4, Side::White), Bitboard::from([Square::A5, Square::C5]));
/// assert_eq!(mask_pawn_attacks(Square::B4, Side::Black), Bitboard::from([Square::A3, Square::C3]));
/// assert_eq!(mask_pawn_attacks(Square::A2, Side::Black), Square::B1.bb());
/// ```
pub const fn mask_pawn_attacks(square: Square, side: Side) -> Bitboard {
    let bb = square.bb().0;

    let attacks = match side {
        Side::White => ((bb >> 7) & NOT_A) | ((bb >> 9) & NOT_H),
        Side::Black => ((bb << 7) & NOT_H) | ((bb << 9) & NOT_A),
    };

    Bitboard(attacks)
}

/// Squares attacked by a knight standing on `square`.
pub const fn mask_knight_attacks(square: Square) -> Bitboard {
    let bb = square.bb().0;

    let north =
        ((bb >> 17) & NOT_H) | ((bb >> 15) & NOT_A) | ((bb >> 10) & NOT_GH) | ((bb >> 6) & NOT_AB);
    let south =
        ((bb << 17) & NOT_A) | ((bb << 15) & NOT_H) | ((bb << 10) & NOT_AB) | ((bb << 6) & NOT_GH);

    Bitboard(north | south)
}

/// Squares attacked by a king standing on `square`.
pub const fn mask_king_attacks(square: Square) -> Bitboard {
    let bb = square.bb().0;

    let north = (bb >> 8) | ((bb >> 9) & NOT_H) | ((bb >> 7) & NOT_A) | ((bb >> 1) & NOT_H);
    let south = (bb << 8) | ((bb << 9) & NOT_A) | ((bb << 7) & NOT_H) | ((bb << 1) & NOT_A);

    Bitboard(north | south)
}

/******************************************\
|==========================================|
|              Slider Masks                |
|==========================================|
\******************************************/

/// Ray steps as (row, file) deltas, row 0 being rank 8
type Step = (i8, i8);

const BISHOP_STEPS: [Step; 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];
const ROOK_STEPS: [Step; 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

const fn on_board(row: i8, file: i8) -> bool {
    row >= 0 && row < 8 && file >= 0 && file < 8
}

// Walks one ray from `square`. The walk stops after the first square in `blockers`.
// With `relevant_only` the last square before the edge is dropped as well, since
// a piece there can never shorten the ray.
const fn ray(square: Square, step: Step, blockers: Bitboard, relevant_only: bool) -> u64 {
    let (d_row, d_file) = step;
    let mut row = (square as u8 >> 3) as i8 + d_row;
    let mut file = (square as u8 & 7) as i8 + d_file;
    let mut bb = 0u64;

    while on_board(row, file) && (!relevant_only || on_board(row + d_row, file + d_file)) {
        let bit = 1u64 << (row * 8 + file) as u32;
        bb |= bit;

        if blockers.0 & bit != 0 {
            break;
        }

        row += d_row;
        file += d_file;
    }

    bb
}

const fn slide(square: Square, steps: &[Step; 4], blockers: Bitboard, relevant_only: bool) -> Bitboard {
    let mut bb = 0u64;
    let mut i = 0;
    while i < steps.len() {
        bb |= ray(square, steps[i], blockers, relevant_only);
        i += 1;
    }
    Bitboard(bb)
}

/// Squares whose occupancy can change the attacks of a bishop on `square`
/// (its diagonals, excluding the board edge).
pub const fn mask_bishop_occupancy(square: Square) -> Bitboard {
    slide(square, &BISHOP_STEPS, Bitboard::EMPTY, true)
}

/// Squares whose occupancy can change the attacks of a rook on `square`
/// (its rank and file, excluding the board edge).
pub const fn mask_rook_occupancy(square: Square) -> Bitboard {
    slide(square, &ROOK_STEPS, Bitboard::EMPTY, true)
}

/// Bishop attacks from `square`, each ray ending on (and including) the first blocker.
pub const fn bishop_attacks_on_the_fly(square: Square, blockers: Bitboard) -> Bitboard {
    slide(square, &BISHOP_STEPS, blockers, false)
}

/// Rook attacks from `square`, each ray ending on (and including) the first blocker.
pub const fn rook_attacks_on_the_fly(square: Square, blockers: Bitboard) -> Bitboard {
    slide(square, &ROOK_STEPS, blockers, false)
}

/// Returns the `index`-th subset of `mask`: bit `k` of `index` decides whether the
/// `k`-th lowest set bit of `mask` is kept.
///
/// ## Examples
/// ```rust
/// use chessbits::core::{Bitboard, Square};
/// use chessbits::attacks::set_occupancy;
///
/// let mask = Bitboard::from([Square::B8, Square::C7]);
/// assert_eq!(set_occupancy(0b00, mask), Bitboard::EMPTY);
/// assert_eq!(set_occupancy(0b10, mask), Square::C7.bb());
/// assert_eq!(set_occupancy(0b11, mask), mask);
/// ```
pub const fn set_occupancy(index: usize, mask: Bitboard) -> Bitboard {
    let mut occupancy = 0u64;
    let mut mask = mask.0;
    let mut bit = 0;

    while mask != 0 {
        let lowest = mask & mask.wrapping_neg();
        if (index as u64 >> bit) & 1 != 0 {
            occupancy |= lowest;
        }
        mask &= mask - 1;
        bit += 1;
    }

    Bitboard(occupancy)
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
