use super::errors::ParseSideError;

/******************************************\
|==========================================|
|                  Sides                   |
|==========================================|
\******************************************/

/// # Side Representation
///
/// The two sides in chess. White pawns advance towards rank 8 (decreasing
/// square index), black pawns towards rank 1 (increasing square index).

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

crate::impl_board_enum!(Side, 2);

impl std::ops::Not for Side {
    type Output = Self;

    /// Returns the opposite side
    fn not(self) -> Self::Output {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    /// Accepts the FEN letters `w`/`b` or the full names, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Side::White),
            "b" | "black" => Ok(Side::Black),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not() {
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
    }

    #[test]
    fn test_index() {
        assert_eq!(Side::White.index(), 0);
        assert_eq!(Side::Black.index(), 1);
        assert_eq!(Side::iter().count(), Side::NUM);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("w".parse::<Side>(), Ok(Side::White));
        assert_eq!("White".parse::<Side>(), Ok(Side::White));
        assert_eq!("b".parse::<Side>(), Ok(Side::Black));
        assert_eq!("BLACK".parse::<Side>(), Ok(Side::Black));
        assert_eq!(
            "red".parse::<Side>(),
            Err(ParseSideError("red".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for side in Side::iter() {
            assert_eq!(side.to_string().parse::<Side>(), Ok(side));
        }
    }
}
