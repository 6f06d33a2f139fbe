//! # Module: `init`
//!
//! Compile-time initialisers for the leaper attack tables (pawn, knight, king).
//! Each table entry is the matching mask from [`mask`](super::mask) for that square.
use super::lookup::{AttackTable, PawnAttackTable};
use super::mask::{mask_king_attacks, mask_knight_attacks, mask_pawn_attacks};
use crate::core::{Bitboard, Side, Square};

/// Initialise the pawn attack table, indexed by `[Side][Square]`
pub(super) const fn init_pawn_attacks() -> PawnAttackTable {
    let mut table = [[Bitboard::EMPTY; Square::NUM]; Side::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };

        table[Side::White as usize][i] = mask_pawn_attacks(sq, Side::White);
        table[Side::Black as usize][i] = mask_pawn_attacks(sq, Side::Black);

        i += 1;
    }

    table
}

/// Initialise the knight attack table
pub(super) const fn init_knight_attacks() -> AttackTable {
    let mut table = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };
        table[i] = mask_knight_attacks(sq);
        i += 1;
    }

    table
}

/// Initialise the king attack table
pub(super) const fn init_king_attacks() -> AttackTable {
    let mut table = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };
        table[i] = mask_king_attacks(sq);
        i += 1;
    }

    table
}
