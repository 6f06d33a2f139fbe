//! # Chessbits
//!
//! Bitboard primitives and precomputed attack masks for a chess move generator.
pub mod attacks;
pub mod core;
pub mod utils;

pub use attacks::{
    attacks, bishop_attacks, init_slider_tables, king_attacks, knight_attacks, pawn_attacks,
    queen_attacks, rook_attacks,
};
pub use crate::core::*;
