use super::errors::{InvalidSquare, ParseFileError, ParseRankError, ParseSquareError};

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the squares of a chess board
/// - Numbered row by row from the top-left corner: `A8 = 0`, `H8 = 7`, `A1 = 56`, `H1 = 63`
/// - `file = index % 8` and `rank = 8 - index / 8`

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

crate::impl_board_enum!(Square, 64);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks of a chess board, `Rank1` being white's back rank

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

crate::impl_board_enum!(Rank, 8);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

crate::impl_board_enum!(File, 8);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Converts a raw index into a square, rejecting anything outside `0..64`
    ///
    /// ## Examples
    ///
    /// ```
    /// use chessbits::core::{InvalidSquare, Square};
    ///
    /// assert_eq!(Square::new(0), Ok(Square::A8));
    /// assert_eq!(Square::new(63), Ok(Square::H1));
    /// assert_eq!(Square::new(64), Err(InvalidSquare(64)));
    /// ```
    pub const fn new(index: u8) -> Result<Self, InvalidSquare> {
        if (index as usize) < Self::NUM {
            Ok(unsafe { Self::from_unchecked(index) })
        } else {
            Err(InvalidSquare(index))
        }
    }

    /// Returns the rank of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chessbits::core::{Square, Rank};
    ///
    /// assert_eq!(Square::A8.rank(), Rank::Rank8);
    /// assert_eq!(Square::E4.rank(), Rank::Rank4);
    /// assert_eq!(Square::H1.rank(), Rank::Rank1);
    /// ```
    pub const fn rank(&self) -> Rank {
        let row = (*self as u8) >> 3;
        unsafe { Rank::from_unchecked(7 - row) }
    }

    /// Returns the file of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chessbits::core::{Square, File};
    ///
    /// assert_eq!(Square::A8.file(), File::FileA);
    /// assert_eq!(Square::E4.file(), File::FileE);
    /// assert_eq!(Square::H1.file(), File::FileH);
    /// ```
    pub const fn file(&self) -> File {
        let file_index = (*self as u8) & 0b111;
        unsafe { File::from_unchecked(file_index) }
    }

    /// Combines a pair of file and rank to create a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chessbits::core::{Square, File, Rank};
    ///
    /// assert_eq!(Square::from_parts(File::FileA, Rank::Rank8), Square::A8);
    /// assert_eq!(Square::from_parts(File::FileB, Rank::Rank4), Square::B4);
    /// assert_eq!(Square::from_parts(File::FileH, Rank::Rank1), Square::H1);
    /// ```
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        let index = ((7 - rank as u8) << 3) + (file as u8);
        unsafe { Self::from_unchecked(index) }
    }

    /// Mirrors the square across the horizontal centre line (A8 <=> A1)
    pub const fn flip_rank(&self) -> Self {
        unsafe { Self::from_unchecked((*self as u8) ^ Square::A1 as u8) }
    }
}

impl TryFrom<u8> for Square {
    type Error = InvalidSquare;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index)
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq as u8
    }
}

/******************************************\
|==========================================|
|            Algebraic Notation            |
|==========================================|
\******************************************/

impl File {
    /// `'a'..='h'` to the matching file
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(unsafe { File::from_unchecked(c as u8 - b'a') }),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl Rank {
    /// `'1'..='8'` to the matching rank
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(unsafe { Rank::from_unchecked(c as u8 - b'1') }),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Display for Square {
    /// Lowercase algebraic notation, `Square::B4 => "b4"`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

/// The only char of `s`, or the char count when there is not exactly one
fn single_char(s: &str) -> Result<char, usize> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(s.chars().count()),
    }
}

impl std::str::FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = single_char(s).map_err(ParseFileError::InvalidLength)?;
        File::from_char(c).ok_or(ParseFileError::InvalidChar(c))
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = single_char(s).map_err(ParseRankError::InvalidLength)?;
        Rank::from_char(c).ok_or(ParseRankError::InvalidChar(c))
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a lowercase file letter followed by a rank digit
    ///
    /// ## Examples
    ///
    /// ```
    /// use chessbits::core::{Square, ParseSquareError};
    ///
    /// assert_eq!("b4".parse::<Square>(), Ok(Square::B4));
    /// assert_eq!("e9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9')));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [file_char, rank_char] = s.chars().collect::<Vec<_>>()[..] else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = File::from_char(file_char).ok_or(ParseSquareError::InvalidFileChar(file_char))?;
        let rank = Rank::from_char(rank_char).ok_or(ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
