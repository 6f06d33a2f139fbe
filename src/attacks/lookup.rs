//! # Module: `lookup`
//!
//! Precomputed attack tables and their read-only accessors.
//!
//! - `PAWN_ATTACKS`: indexed by `[Side][Square]`
//! - `KNIGHT_ATTACKS`, `KING_ATTACKS`: indexed by `[Square]`
//! - Bishop and rook tables: indexed through a [`SliderEntry`](super::slider::SliderEntry)
//!   per square, built lazily on first use (or by [`init_slider_tables`](super::init_slider_tables))
//!
//! The leaper tables are evaluated at compile time. Nothing here is mutable after
//! initialisation, so every accessor is safe to call from any thread.

use super::init::*;
use super::slider::{BISHOP_ENTRIES, BISHOP_TABLE, ROOK_ENTRIES, ROOK_TABLE};
use crate::core::{Bitboard, PieceType, Side, Square};

/******************************************\
|==========================================|
|              Type Definitions            |
|==========================================|
\******************************************/

/// Attack table for a single piece type indexed by square
pub(super) type AttackTable = [Bitboard; Square::NUM];
/// Attack table for pawns indexed by side and square
pub(super) type PawnAttackTable = [[Bitboard; Square::NUM]; Side::NUM];

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

static PAWN_ATTACKS: PawnAttackTable = init_pawn_attacks();

static KNIGHT_ATTACKS: AttackTable = init_knight_attacks();

static KING_ATTACKS: AttackTable = init_king_attacks();

/******************************************\
|==========================================|
|               Get Attacks                |
|==========================================|
\******************************************/

/// Squares attacked by a pawn of `side` on `sq`
#[inline]
pub fn pawn_attacks(side: Side, sq: Square) -> Bitboard {
    PAWN_ATTACKS[side.index()][sq.index()]
}

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

#[inline]
pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    BISHOP_TABLE[BISHOP_ENTRIES[sq.index()].index(occ)]
}

#[inline]
pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    ROOK_TABLE[ROOK_ENTRIES[sq.index()].index(occ)]
}

#[inline]
pub fn queen_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    bishop_attacks(sq, occ) | rook_attacks(sq, occ)
}

/// Gets the attack `Bitboard` for a piece
///
/// # Arguments
/// * `side`: The `Side` of the attacking piece. Only pawns look at it.
/// * `pt`: The `PieceType` of the attacking piece.
/// * `sq`: The `Square` the attacking piece is on.
/// * `occ`: All occupied squares on the board. Only sliders look at it.
///
/// # Example
/// ```rust
/// use chessbits::core::{Bitboard, PieceType, Side, Square};
/// use chessbits::attacks;
///
/// let occ = Square::A4.bb();
/// let rook = attacks(Side::White, PieceType::Rook, Square::A8, occ);
/// assert!(rook.get_bit(Square::A5));
/// assert!(rook.get_bit(Square::A4));
/// assert!(!rook.get_bit(Square::A3));
/// ```
#[inline]
pub fn attacks(side: Side, pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
    match pt {
        PieceType::Pawn => pawn_attacks(side, sq),
        PieceType::Knight => knight_attacks(sq),
        PieceType::King => king_attacks(sq),
        PieceType::Bishop => bishop_attacks(sq, occ),
        PieceType::Rook => rook_attacks(sq, occ),
        PieceType::Queen => queen_attacks(sq, occ),
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::mask::*;
    use crate::utils::PRNG;

    #[test]
    fn test_leaper_tables_match_masks() {
        for sq in Square::iter() {
            for side in Side::iter() {
                assert_eq!(pawn_attacks(side, sq), mask_pawn_attacks(sq, side));
            }
            assert_eq!(knight_attacks(sq), mask_knight_attacks(sq));
            assert_eq!(king_attacks(sq), mask_king_attacks(sq));
        }
    }

    #[test]
    fn test_pawn_table_worked_examples() {
        assert_eq!(
            pawn_attacks(Side::Black, Square::B4),
            Bitboard::from([Square::A3, Square::C3])
        );
        assert_eq!(pawn_attacks(Side::Black, Square::A2), Square::B1.bb());
        assert_eq!(
            pawn_attacks(Side::White, Square::B4),
            Bitboard::from([Square::A5, Square::C5])
        );
    }

    #[test]
    fn test_slider_tables_match_on_the_fly() {
        let mut prng = PRNG::default();

        for sq in Square::iter() {
            for _ in 0..200 {
                let occ = prng.sparse_bitboard();
                assert_eq!(bishop_attacks(sq, occ), bishop_attacks_on_the_fly(sq, occ));
                assert_eq!(rook_attacks(sq, occ), rook_attacks_on_the_fly(sq, occ));
            }
        }
    }

    #[test]
    fn test_slider_tables_every_relevant_subset() {
        for sq in [Square::A8, Square::D4, Square::H1, Square::B7] {
            let mask = mask_rook_occupancy(sq);
            for index in 0..1usize << mask.count_bits() {
                let occ = set_occupancy(index, mask);
                assert_eq!(rook_attacks(sq, occ), rook_attacks_on_the_fly(sq, occ));
            }

            let mask = mask_bishop_occupancy(sq);
            for index in 0..1usize << mask.count_bits() {
                let occ = set_occupancy(index, mask);
                assert_eq!(bishop_attacks(sq, occ), bishop_attacks_on_the_fly(sq, occ));
            }
        }
    }

    #[test]
    fn test_queen_is_union() {
        let occ = Bitboard::from([Square::D6, Square::F4, Square::B2, Square::G7]);
        for sq in Square::iter() {
            assert_eq!(
                queen_attacks(sq, occ),
                bishop_attacks(sq, occ) | rook_attacks(sq, occ)
            );
        }
        assert_eq!(queen_attacks(Square::D4, Bitboard::EMPTY).count_bits(), 27);
    }

    #[test]
    fn test_attacks_dispatch() {
        let occ = Bitboard::from([Square::E6, Square::C2]);
        let sq = Square::E4;

        assert_eq!(
            attacks(Side::White, PieceType::Pawn, sq, occ),
            pawn_attacks(Side::White, sq)
        );
        assert_eq!(
            attacks(Side::Black, PieceType::Pawn, sq, occ),
            pawn_attacks(Side::Black, sq)
        );
        assert_eq!(attacks(Side::White, PieceType::Knight, sq, occ), knight_attacks(sq));
        assert_eq!(attacks(Side::Black, PieceType::King, sq, occ), king_attacks(sq));
        assert_eq!(
            attacks(Side::White, PieceType::Bishop, sq, occ),
            bishop_attacks(sq, occ)
        );
        assert_eq!(attacks(Side::White, PieceType::Rook, sq, occ), rook_attacks(sq, occ));
        assert_eq!(
            attacks(Side::Black, PieceType::Queen, sq, occ),
            queen_attacks(sq, occ)
        );
        // Only pawns care about the side
        for pt in PieceType::iter().filter(|&pt| pt != PieceType::Pawn) {
            assert_eq!(attacks(Side::White, pt, sq, occ), attacks(Side::Black, pt, sq, occ));
        }
    }

    #[test]
    fn test_tables_shared_across_threads() {
        let handles: Vec<_> = Side::iter()
            .map(|side| {
                std::thread::spawn(move || {
                    Square::iter()
                        .map(|sq| {
                            pawn_attacks(side, sq).count_bits()
                                + rook_attacks(sq, Bitboard::EMPTY).count_bits()
                        })
                        .sum::<u32>()
                })
            })
            .collect();

        let totals: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(totals[0], totals[1]);
    }
}
