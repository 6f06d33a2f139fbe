// Core module exports

// Board representation submodules
pub mod bitboard;
pub mod errors;
pub mod macros;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use bitboard::Bitboard;
pub use errors::{
    InvalidSquare, ParseFileError, ParsePieceTypeError, ParseRankError, ParseSideError,
    ParseSquareError,
};
pub use piece::PieceType;
pub use square::{File, Rank, Square};
pub use types::Side;
