use chessbits::attacks::{attacks, init_slider_tables};
use chessbits::core::{
    Bitboard, ParsePieceTypeError, ParseSideError, ParseSquareError, PieceType, Side, Square,
};
use thiserror::Error;

const USAGE: &str = "usage: chessbits [square] [side] [piece] [occ=<square>,...]
    square  algebraic square, default b4
    side    w|b|white|black, default white
    piece   p|n|b|r|q|k, default p
    occ     blockers for sliding pieces, e.g. occ=d6,f4";

/******************************************\
|==========================================|
|            Argument Parsing              |
|==========================================|
\******************************************/

#[derive(Error, Debug, PartialEq)]
enum ArgsError {
    #[error(transparent)]
    Square(#[from] ParseSquareError),
    #[error(transparent)]
    Side(#[from] ParseSideError),
    #[error(transparent)]
    Piece(#[from] ParsePieceTypeError),
    #[error("Unexpected argument: '{0}'")]
    Unexpected(String),
}

#[derive(Debug, PartialEq)]
struct Options {
    square: Square,
    side: Side,
    piece: PieceType,
    occ: Bitboard,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            square: Square::B4,
            side: Side::White,
            piece: PieceType::Pawn,
            occ: Bitboard::EMPTY,
        }
    }
}

impl Options {
    fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        let mut position = 0;

        for arg in args {
            let arg = arg.as_ref();

            if let Some(list) = arg.strip_prefix("occ=") {
                for sq in list.split(',').filter(|s| !s.is_empty()) {
                    options.occ = options.occ.set_bit(sq.parse()?);
                }
                continue;
            }

            match position {
                0 => options.square = arg.parse()?,
                1 => options.side = arg.parse()?,
                2 => options.piece = arg.parse()?,
                _ => return Err(ArgsError::Unexpected(arg.to_string())),
            }
            position += 1;
        }

        Ok(options)
    }
}

/******************************************\
|==========================================|
|                   Main                   |
|==========================================|
\******************************************/

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }

    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if options.piece.is_slider() {
        init_slider_tables();
    }

    let bb = attacks(options.side, options.piece, options.square, options.occ);

    println!(
        "{} {:?} on {}:\n",
        options.side, options.piece, options.square
    );
    println!("{bb}");
}
