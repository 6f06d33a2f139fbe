//! Error types for the conversions that cross into the closed core types.
//!
//! Every `Square`, `File`, `Rank`, `Side` and `PieceType` value is valid by
//! construction, so the only failures happen at the boundary: turning raw
//! integers or strings into those types.

#![deny(missing_docs)]

use thiserror::Error;

/******************************************\
|==========================================|
|              Invalid Square              |
|==========================================|
\******************************************/

/// A raw square index outside of `0..64`.
///
/// # Example
/// ```
/// # use chessbits::core::{InvalidSquare, Square};
/// assert_eq!(Square::new(64), Err(InvalidSquare(64)));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Square index {0} is out of bounds, expected 0-63")]
pub struct InvalidSquare(pub u8);

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

/// Errors from parsing a `File` from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    /// The input string did not have length 1.
    #[error("Invalid length for file string: {0}, expected 1")]
    InvalidLength(usize),
    /// The character is not one of 'a' through 'h'.
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

/// Errors from parsing a `Rank` from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    /// The input string did not have length 1.
    #[error("Invalid length for rank string: {0}, expected 1")]
    InvalidLength(usize),
    /// The character is not one of '1' through '8'.
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

/// Errors from parsing a `Square` in algebraic notation (e.g. "e4").
///
/// # Example
/// ```
/// # use chessbits::core::{ParseSquareError, Square};
/// assert!(matches!("e9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9'))));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    /// The input string did not have length 2.
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    /// The first character is not a file ('a'-'h').
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    /// The second character is not a rank ('1'-'8').
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|          Side/Piece Parse Errors         |
|==========================================|
\******************************************/

/// A side string other than `w`, `b`, `white` or `black`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid side: '{0}', expected 'w', 'b', 'white' or 'black'")]
pub struct ParseSideError(pub String);

/// Errors from parsing a `PieceType` from its letter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceTypeError {
    /// The input string did not have length 1.
    #[error("Invalid piece string length: {0}, expected 1")]
    InvalidLength(usize),
    /// The character is not one of 'p', 'n', 'b', 'r', 'q', 'k' (either case).
    #[error("Invalid piece character: '{0}', expected one of 'pnbrqk'")]
    InvalidChar(char),
}
