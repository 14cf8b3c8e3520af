/// Core value types for the 7x7 Congo board: colors, pieces, squares and moves.
///
/// Squares are indexed row-major from the top-left corner as seen from White:
/// `index = (7 - rank) * 7 + file`, so `a7 == 0`, `g7 == 6`, `a1 == 42` and
/// `g1 == 48`.
use std::cmp::Ordering;
use std::fmt;

pub use crate::game_state::game_state::GameState;

/// Number of files (and ranks) on the board.
pub const BOARD_WIDTH: u8 = 7;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 49;

/// Board square index (`0..=48`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `+1` for White, `-1` for Black. Converts white-relative scores into
    /// side-to-move scores.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Elephant,
    Zebra,
    Lion,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Pawn,
        PieceKind::Elephant,
        PieceKind::Zebra,
        PieceKind::Lion,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Elephant => 1,
            PieceKind::Zebra => 2,
            PieceKind::Lion => 3,
        }
    }

    #[inline]
    const fn lower_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Elephant => 'e',
            PieceKind::Zebra => 'z',
            PieceKind::Lion => 'l',
        }
    }
}

/// A colored piece, the content of an occupied tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Number of distinct piece tags (4 kinds x 2 colors).
    pub const TAG_COUNT: usize = 8;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Dense tag index: `P,E,Z,L` for White are `0..=3`, `p,e,z,l` are `4..=7`.
    #[inline]
    pub const fn tag_index(self) -> usize {
        self.color.index() * 4 + self.kind.index()
    }

    pub fn to_fen_char(self) -> char {
        let ch = self.kind.lower_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'e' => PieceKind::Elephant,
            'z' => PieceKind::Zebra,
            'l' => PieceKind::Lion,
            _ => return None,
        };

        Some(Self { color, kind })
    }
}

/// File index `0..=6` (`a..=g`) of a square.
#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % BOARD_WIDTH
}

/// Rank `1..=7` of a square.
#[inline]
pub const fn square_rank(square: Square) -> u8 {
    BOARD_WIDTH - square / BOARD_WIDTH
}

/// Build a square from a zero-based file and a one-based rank, or `None` when
/// the pair lies off the board.
#[inline]
pub const fn square_from_file_rank(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file >= BOARD_WIDTH as i8 || rank < 1 || rank > BOARD_WIDTH as i8 {
        return None;
    }
    Some((BOARD_WIDTH as i8 - rank) as u8 * BOARD_WIDTH + file as u8)
}

/// Step a square by a `(file, rank)` delta, staying on the board.
#[inline]
pub const fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    square_from_file_rank(
        square_file(square) as i8 + d_file,
        square_rank(square) as i8 + d_rank,
    )
}

#[inline]
pub const fn is_on_board(square: Square) -> bool {
    (square as usize) < NUM_SQUARES
}

/// Origin/destination pair. Text form is the two coordinates concatenated,
/// for example `c2c3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Key matching the lexicographic order of the move text: file before
    /// rank, origin before destination.
    #[inline]
    fn text_order_key(self) -> (u8, u8, u8, u8) {
        (
            square_file(self.from),
            square_rank(self.from),
            square_file(self.to),
            square_rank(self.to),
        )
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text_order_key().cmp(&other.text_order_key())
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_square(f, self.from)?;
        write_square(f, self.to)
    }
}

fn write_square(f: &mut fmt::Formatter<'_>, square: Square) -> fmt::Result {
    if !is_on_board(square) {
        return write!(f, "#{square}");
    }
    let file = char::from(b'a' + square_file(square));
    let rank = char::from(b'0' + square_rank(square));
    write!(f, "{file}{rank}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_indexing_matches_board_layout() {
        assert_eq!(square_from_file_rank(0, 7), Some(0));
        assert_eq!(square_from_file_rank(6, 7), Some(6));
        assert_eq!(square_from_file_rank(0, 1), Some(42));
        assert_eq!(square_from_file_rank(3, 4), Some(24));
        assert_eq!(square_from_file_rank(7, 4), None);
        assert_eq!(square_from_file_rank(0, 0), None);
        assert_eq!(square_rank(21), 4);
        assert_eq!(square_file(27), 6);
    }

    #[test]
    fn moves_sort_like_their_text() {
        let mut moves = vec![
            Move::new(45, 38), // d1d2
            Move::new(35, 28), // a2a3
            Move::new(37, 30), // c2c3
            Move::new(37, 29), // c2b3
        ];
        moves.sort();
        let text: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        let mut expected = text.clone();
        expected.sort();
        assert_eq!(text, expected);
        assert_eq!(text[0], "a2a3");
    }

    #[test]
    fn piece_fen_chars_round_trip() {
        for ch in ['P', 'E', 'Z', 'L', 'p', 'e', 'z', 'l'] {
            let piece = Piece::from_fen_char(ch).expect("piece letter should parse");
            assert_eq!(piece.to_fen_char(), ch);
        }
        assert!(Piece::from_fen_char('k').is_none());
        assert!(Piece::from_fen_char('3').is_none());
    }
}
