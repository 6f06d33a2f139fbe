use std::sync::LazyLock;

use super::mask::{
    bishop_attacks_on_the_fly, mask_bishop_occupancy, mask_rook_occupancy,
    rook_attacks_on_the_fly, set_occupancy,
};
use crate::core::*;

/******************************************\
|==========================================|
|           Slider Entry Definition        |
|==========================================|
\******************************************/

/// Per-square key into a slider attack table.
///
/// The relevant blockers of an occupancy are compressed with a bit-extract
/// through `mask`, giving a dense index into the `2^bits` entries the square
/// owns, starting at `offset`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SliderEntry {
    mask: Bitboard,
    offset: usize,
}

impl SliderEntry {
    const EMPTY: SliderEntry = SliderEntry {
        mask: Bitboard::EMPTY,
        offset: 0,
    };

    /// Index of the attack set for occupancy `occ`. Bits outside `mask` are ignored.
    #[inline]
    pub(crate) fn index(self, occ: Bitboard) -> usize {
        occ.pext(self.mask) as usize + self.offset
    }

    /// Number of table entries owned by this square
    const fn len(self) -> usize {
        1 << self.mask.count_bits()
    }
}

pub type SliderEntries = [SliderEntry; Square::NUM];

pub(super) const BISHOP_ENTRIES: SliderEntries = populate_entries(PieceType::Bishop);

pub(super) const ROOK_ENTRIES: SliderEntries = populate_entries(PieceType::Rook);

const BISHOP_TABLE_SIZE: usize = 0x1480;

const ROOK_TABLE_SIZE: usize = 0x19000;

const _: () = assert!(BISHOP_ENTRIES[63].offset + BISHOP_ENTRIES[63].len() == BISHOP_TABLE_SIZE);
const _: () = assert!(ROOK_ENTRIES[63].offset + ROOK_ENTRIES[63].len() == ROOK_TABLE_SIZE);

pub(super) static BISHOP_TABLE: LazyLock<Box<[Bitboard]>> =
    LazyLock::new(|| populate_attack_table(PieceType::Bishop, BISHOP_TABLE_SIZE));

pub(super) static ROOK_TABLE: LazyLock<Box<[Bitboard]>> =
    LazyLock::new(|| populate_attack_table(PieceType::Rook, ROOK_TABLE_SIZE));

/// Builds the bishop and rook tables now rather than on first lookup
pub fn init_slider_tables() {
    let _ = &*BISHOP_TABLE;
    let _ = &*ROOK_TABLE;
}

/******************************************\
|==========================================|
|            Populating Tables             |
|==========================================|
\******************************************/

const fn relevant_mask(pt: PieceType, sq: Square) -> Bitboard {
    match pt {
        PieceType::Bishop => mask_bishop_occupancy(sq),
        PieceType::Rook => mask_rook_occupancy(sq),
        _ => unreachable!(),
    }
}

const fn attacks_on_the_fly(pt: PieceType, sq: Square, occ: Bitboard) -> Bitboard {
    match pt {
        PieceType::Bishop => bishop_attacks_on_the_fly(sq, occ),
        PieceType::Rook => rook_attacks_on_the_fly(sq, occ),
        _ => unreachable!(),
    }
}

const fn populate_entries(pt: PieceType) -> SliderEntries {
    let mut entries = [SliderEntry::EMPTY; Square::NUM];
    let mut offset = 0;

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };

        entries[i] = SliderEntry {
            mask: relevant_mask(pt, sq),
            offset,
        };
        offset += entries[i].len();

        i += 1;
    }

    entries
}

fn populate_attack_table(pt: PieceType, size: usize) -> Box<[Bitboard]> {
    let entries = match pt {
        PieceType::Bishop => &BISHOP_ENTRIES,
        PieceType::Rook => &ROOK_ENTRIES,
        _ => unreachable!(),
    };

    let mut table = vec![Bitboard::EMPTY; size];

    for (sq, entry) in Square::iter().zip(entries.iter()) {
        for index in 0..entry.len() {
            let occ = set_occupancy(index, entry.mask);
            table[entry.index(occ)] = attacks_on_the_fly(pt, sq, occ);
        }
    }

    table.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_tile_the_table() {
        for entries in [&BISHOP_ENTRIES, &ROOK_ENTRIES] {
            assert_eq!(entries[0].offset, 0);
            for pair in entries.windows(2) {
                assert_eq!(pair[0].offset + pair[0].len(), pair[1].offset);
            }
        }
    }

    #[test]
    fn test_index_ignores_irrelevant_bits() {
        let entry = ROOK_ENTRIES[Square::D4.index()];
        let occ = Bitboard::from([Square::D6, Square::F4]);
        let noise = !entry.mask;
        assert_eq!(entry.index(occ), entry.index(occ | noise));
        assert!(entry.index(Bitboard::FULL) < entry.offset + entry.len());
    }

    #[test]
    fn test_tables_are_fully_populated() {
        init_slider_tables();
        assert_eq!(BISHOP_TABLE.len(), BISHOP_TABLE_SIZE);
        assert_eq!(ROOK_TABLE.len(), ROOK_TABLE_SIZE);
        // Every occupancy leaves at least one attacked square
        assert!(BISHOP_TABLE.iter().all(|bb| !bb.is_empty()));
        assert!(ROOK_TABLE.iter().all(|bb| !bb.is_empty()));
    }
}
