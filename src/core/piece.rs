use super::errors::ParsePieceTypeError;

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types, independent of side

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Returns true for pieces whose attacks depend on board occupancy
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

crate::impl_board_enum!(PieceType, 6);

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// Piece letters, indexed by `PieceType`
const PIECE_STR: &[u8; PieceType::NUM] = b"pnbrqk";

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_STR[self.index()] as char)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for PieceType {
    type Err = ParsePieceTypeError;

    /// Parses a piece letter in either case ('N' and 'n' are both knights)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParsePieceTypeError::InvalidLength(s.chars().count()));
        };

        PIECE_STR
            .iter()
            .position(|&p| p as char == c.to_ascii_lowercase())
            .map(|i| unsafe { PieceType::from_unchecked(i as u8) })
            .ok_or(ParsePieceTypeError::InvalidChar(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("p".parse::<PieceType>(), Ok(PieceType::Pawn));
        assert_eq!("N".parse::<PieceType>(), Ok(PieceType::Knight));
        assert_eq!("q".parse::<PieceType>(), Ok(PieceType::Queen));
        assert_eq!(
            "x".parse::<PieceType>(),
            Err(ParsePieceTypeError::InvalidChar('x'))
        );
        assert_eq!(
            "kk".parse::<PieceType>(),
            Err(ParsePieceTypeError::InvalidLength(2))
        );
        assert_eq!(
            "".parse::<PieceType>(),
            Err(ParsePieceTypeError::InvalidLength(0))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for pt in PieceType::iter() {
            assert_eq!(pt.to_string().parse::<PieceType>(), Ok(pt));
        }
    }

    #[test]
    fn test_is_slider() {
        let sliders: Vec<_> = PieceType::iter().filter(|pt| pt.is_slider()).collect();
        assert_eq!(
            sliders,
            vec![PieceType::Bishop, PieceType::Rook, PieceType::Queen]
        );
    }
}
