//! # Module: `attacks`
//!
//! Attack-mask generation for every piece type.
//!
//! - [`mask`]: masks computed on the fly from a square (and blockers for sliders)
//! - [`lookup`]: process-wide tables filled from those masks, with read-only accessors
mod init;
pub mod lookup;
pub mod mask;
mod slider;

pub use lookup::{
    attacks, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks,
    rook_attacks,
};
pub use mask::{
    bishop_attacks_on_the_fly, mask_bishop_occupancy, mask_king_attacks, mask_knight_attacks,
    mask_pawn_attacks, mask_rook_occupancy, rook_attacks_on_the_fly, set_occupancy,
};
pub use slider::{SliderEntry, init_slider_tables};
